//! Related product links.
//!
//! The API has no record type here: links are created from a list of IDs and
//! the responses carry no body worth decoding.

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::ResourceError;

/// Related products of one product.
#[derive(Debug, Clone, Copy)]
pub struct RelatedProductService<'a> {
    client: &'a HttpClient,
}

impl<'a> RelatedProductService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Links `related_ids` to `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(&self, product_id: u64, related_ids: &[u64]) -> Result<(), ResourceError> {
        let path = format!("catalog/products/{product_id}/related");
        let body = serde_json::json!({ "product_ids": related_ids });
        let request = self
            .client
            .build_request_with_body(HttpMethod::Post, &path, &body)?;
        Ok(self.client.execute(request).await?)
    }

    /// Removes every related product link from `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete_all(&self, product_id: u64) -> Result<(), ResourceError> {
        let path = format!("catalog/products/{product_id}/related");
        let request = self.client.build_request(HttpMethod::Delete, &path)?;
        Ok(self.client.execute(request).await?)
    }

    /// Removes the link from `product_id` to `related_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, product_id: u64, related_id: u64) -> Result<(), ResourceError> {
        let path = format!("catalog/products/{product_id}/related/{related_id}");
        let request = self.client.build_request(HttpMethod::Delete, &path)?;
        Ok(self.client.execute(request).await?)
    }
}
