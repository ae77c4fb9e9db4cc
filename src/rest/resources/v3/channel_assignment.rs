//! Product channel assignments: which channels list a product.

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::path_ids;
use crate::rest::{Envelope, ResourceError, ResourceOperation, ResourcePath, RestResource};

/// A product listed on a channel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductChannelAssignment {
    /// Assigned product.
    pub product_id: u64,
    /// Channel listing it.
    pub channel_id: u64,
}

impl RestResource for ProductChannelAssignment {
    const NAME: &'static str = "ProductChannelAssignment";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &["product_id"],
            "catalog/products/{product_id}/channels",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["product_id", "channel_id"],
            "catalog/products/{product_id}/channels/{channel_id}",
        ),
    ];
}

/// Channel assignments of one product.
#[derive(Debug, Clone, Copy)]
pub struct ProductChannelService<'a> {
    client: &'a HttpClient,
}

impl<'a> ProductChannelService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the channels `product_id` is assigned to.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        product_id: u64,
    ) -> Result<Envelope<Vec<ProductChannelAssignment>>, ResourceError> {
        let ids = path_ids([("product_id", product_id)]);
        ProductChannelAssignment::list(self.client, &ids, None).await
    }

    /// Assigns `product_id` to `channel_ids`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(&self, product_id: u64, channel_ids: &[u64]) -> Result<(), ResourceError> {
        let path = format!("catalog/products/{product_id}/channels");
        let body = serde_json::json!({ "channel_ids": channel_ids });
        let request = self
            .client
            .build_request_with_body(HttpMethod::Post, &path, &body)?;
        Ok(self.client.execute(request).await?)
    }

    /// Removes `product_id` from `channel_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, product_id: u64, channel_id: u64) -> Result<(), ResourceError> {
        let ids = path_ids([("product_id", product_id), ("channel_id", channel_id)]);
        ProductChannelAssignment::delete(self.client, &ids).await
    }
}
