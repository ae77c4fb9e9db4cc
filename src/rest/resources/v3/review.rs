//! Product review resource and service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::resources::path_ids;
use crate::rest::{crud_paths, Envelope, QueryParams, ResourceError, ResourcePath, RestResource};

/// A shopper review. `rating` runs from 1 to 5.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Review {
    /// Read-only review ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Owning product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Headline.
    #[serde(default)]
    pub title: String,
    /// Body.
    #[serde(default)]
    pub text: String,
    /// `approved`, `disapproved`, or `pending`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Stars given.
    #[serde(default)]
    pub rating: u8,
    /// Reviewer's email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Reviewer's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// When the record was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the record was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,
}

impl RestResource for Review {
    const NAME: &'static str = "Review";
    const PATHS: &'static [ResourcePath] = &crud_paths(
        &["product_id"],
        "catalog/products/{product_id}/reviews",
        &["product_id", "id"],
        "catalog/products/{product_id}/reviews/{id}",
    );
}

/// Reviews of one product.
#[derive(Debug, Clone, Copy)]
pub struct ReviewService<'a> {
    client: &'a HttpClient,
}

impl<'a> ReviewService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the reviews of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        product_id: u64,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<Review>>, ResourceError> {
        Review::list(self.client, &path_ids([("product_id", product_id)]), params).await
    }

    /// Fetches review `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(&self, product_id: u64, id: u64) -> Result<Envelope<Review>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        Review::get(self.client, &ids, None).await
    }

    /// Posts a review on `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(
        &self,
        product_id: u64,
        review: &Review,
    ) -> Result<Envelope<Review>, ResourceError> {
        Review::create(self.client, &path_ids([("product_id", product_id)]), review).await
    }

    /// Updates review `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update(
        &self,
        product_id: u64,
        id: u64,
        review: &Review,
    ) -> Result<Envelope<Review>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        Review::update(self.client, &ids, review).await
    }

    /// Deletes review `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, product_id: u64, id: u64) -> Result<(), ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        Review::delete(self.client, &ids).await
    }
}
