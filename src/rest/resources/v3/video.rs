//! Product video resource and service.

use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::resources::path_ids;
use crate::rest::{crud_paths, Envelope, QueryParams, ResourceError, ResourcePath, RestResource};

/// A video attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductVideo {
    /// Read-only video ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Owning product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Title shown on the product page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Text shown with the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Position among its siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    /// Only `youtube` is accepted.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub video_type: Option<String>,
    /// Provider's video ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    /// Read-only watch URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RestResource for ProductVideo {
    const NAME: &'static str = "ProductVideo";
    const PATHS: &'static [ResourcePath] = &crud_paths(
        &["product_id"],
        "catalog/products/{product_id}/videos",
        &["product_id", "id"],
        "catalog/products/{product_id}/videos/{id}",
    );
}

/// Videos of one product.
#[derive(Debug, Clone, Copy)]
pub struct ProductVideoService<'a> {
    client: &'a HttpClient,
}

impl<'a> ProductVideoService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the videos of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        product_id: u64,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<ProductVideo>>, ResourceError> {
        ProductVideo::list(self.client, &path_ids([("product_id", product_id)]), params).await
    }

    /// Fetches video `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(
        &self,
        product_id: u64,
        id: u64,
    ) -> Result<Envelope<ProductVideo>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        ProductVideo::get(self.client, &ids, None).await
    }

    /// Attaches a video to `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(
        &self,
        product_id: u64,
        video: &ProductVideo,
    ) -> Result<Envelope<ProductVideo>, ResourceError> {
        ProductVideo::create(self.client, &path_ids([("product_id", product_id)]), video).await
    }

    /// Updates video `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update(
        &self,
        product_id: u64,
        id: u64,
        video: &ProductVideo,
    ) -> Result<Envelope<ProductVideo>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        ProductVideo::update(self.client, &ids, video).await
    }

    /// Deletes video `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, product_id: u64, id: u64) -> Result<(), ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        ProductVideo::delete(self.client, &ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_video_type_is_renamed() {
        let video = ProductVideo {
            title: Some("Unboxing".to_string()),
            video_type: Some("youtube".to_string()),
            video_id: Some("dQw4w9WgXcQ".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&video).unwrap(),
            json!({"title": "Unboxing", "type": "youtube", "video_id": "dQw4w9WgXcQ"})
        );
    }
}
