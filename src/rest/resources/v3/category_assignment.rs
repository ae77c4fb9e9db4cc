//! Product category assignments.

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::path_ids;
use crate::rest::{Envelope, ResourceError, ResourceOperation, ResourcePath, RestResource};

/// A product placed in a category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoryAssignment {
    /// Assigned product.
    pub product_id: u64,
    /// Category holding it.
    pub category_id: u64,
}

impl RestResource for CategoryAssignment {
    const NAME: &'static str = "CategoryAssignment";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &["product_id"],
            "catalog/products/{product_id}/categories",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["product_id"],
            "catalog/products/{product_id}/categories",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["product_id", "category_id"],
            "catalog/products/{product_id}/categories/{category_id}",
        ),
    ];
}

/// Category assignments of one product.
#[derive(Debug, Clone, Copy)]
pub struct ProductCategoryService<'a> {
    client: &'a HttpClient,
}

impl<'a> ProductCategoryService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the categories `product_id` belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        product_id: u64,
    ) -> Result<Envelope<Vec<CategoryAssignment>>, ResourceError> {
        CategoryAssignment::list(self.client, &path_ids([("product_id", product_id)]), None).await
    }

    /// Adds `product_id` to `category_ids`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(&self, product_id: u64, category_ids: &[u64]) -> Result<(), ResourceError> {
        let path = format!("catalog/products/{product_id}/categories");
        let body = serde_json::json!({ "category_ids": category_ids });
        let request = self
            .client
            .build_request_with_body(HttpMethod::Post, &path, &body)?;
        Ok(self.client.execute(request).await?)
    }

    /// Removes `product_id` from every category.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete_all(&self, product_id: u64) -> Result<(), ResourceError> {
        CategoryAssignment::delete(self.client, &path_ids([("product_id", product_id)])).await
    }

    /// Removes `product_id` from `category_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, product_id: u64, category_id: u64) -> Result<(), ResourceError> {
        let ids = path_ids([("product_id", product_id), ("category_id", category_id)]);
        CategoryAssignment::delete(self.client, &ids).await
    }
}
