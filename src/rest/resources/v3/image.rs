//! Product image resource and service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::resources::path_ids;
use crate::rest::{crud_paths, Envelope, QueryParams, ResourceError, ResourcePath, RestResource};

/// An image attached to a product.
///
/// To add an image by URL, set `image_url`; the store fetches it and fills
/// in the `url_*` renditions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImage {
    /// Read-only image ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Owning product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Whether this is the listing thumbnail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_thumbnail: Option<bool>,
    /// Position among its siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    /// Alt text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Uploaded file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_file: Option<String>,
    /// Image URL; the store fetches and hosts it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Read-only zoom rendition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_zoom: Option<String>,
    /// Read-only standard rendition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_standard: Option<String>,
    /// Read-only thumbnail rendition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_thumbnail: Option<String>,
    /// Read-only tiny rendition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_tiny: Option<String>,
    /// When the record was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,
}

impl RestResource for ProductImage {
    const NAME: &'static str = "ProductImage";
    const PATHS: &'static [ResourcePath] = &crud_paths(
        &["product_id"],
        "catalog/products/{product_id}/images",
        &["product_id", "id"],
        "catalog/products/{product_id}/images/{id}",
    );
}

/// Images of one product.
#[derive(Debug, Clone, Copy)]
pub struct ProductImageService<'a> {
    client: &'a HttpClient,
}

impl<'a> ProductImageService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the images of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        product_id: u64,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<ProductImage>>, ResourceError> {
        ProductImage::list(self.client, &path_ids([("product_id", product_id)]), params).await
    }

    /// Fetches image `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(
        &self,
        product_id: u64,
        id: u64,
    ) -> Result<Envelope<ProductImage>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        ProductImage::get(self.client, &ids, None).await
    }

    /// Attaches an image to `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(
        &self,
        product_id: u64,
        image: &ProductImage,
    ) -> Result<Envelope<ProductImage>, ResourceError> {
        ProductImage::create(self.client, &path_ids([("product_id", product_id)]), image).await
    }

    /// Updates image `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update(
        &self,
        product_id: u64,
        id: u64,
        image: &ProductImage,
    ) -> Result<Envelope<ProductImage>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        ProductImage::update(self.client, &ids, image).await
    }

    /// Deletes image `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, product_id: u64, id: u64) -> Result<(), ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        ProductImage::delete(self.client, &ids).await
    }
}
