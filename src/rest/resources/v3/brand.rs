//! Brand resource and service.

use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::resources::path_ids;
use crate::rest::{crud_paths, Envelope, QueryParams, ResourceError, ResourcePath, RestResource};

use super::CustomUrl;

/// A catalog brand.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Brand {
    /// Read-only brand ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Brand name, unique across the store.
    #[serde(default)]
    pub name: String,
    /// Storefront page title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    /// SEO meta keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<Vec<String>>,
    /// SEO meta description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// Image URL; the store fetches and hosts it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Comma-separated terms for storefront search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<String>,
    /// Storefront URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<CustomUrl>,
}

impl RestResource for Brand {
    const NAME: &'static str = "Brand";
    const PATHS: &'static [ResourcePath] =
        &crud_paths(&[], "catalog/brands", &["id"], "catalog/brands/{id}");
}

/// Catalog brands.
#[derive(Debug, Clone, Copy)]
pub struct BrandService<'a> {
    client: &'a HttpClient,
}

impl<'a> BrandService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists brands matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<Brand>>, ResourceError> {
        Brand::list(self.client, &path_ids([]), params).await
    }

    /// Fetches one brand.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(
        &self,
        id: u64,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Brand>, ResourceError> {
        Brand::get(self.client, &path_ids([("id", id)]), params).await
    }

    /// Creates a brand.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(&self, brand: &Brand) -> Result<Envelope<Brand>, ResourceError> {
        Brand::create(self.client, &path_ids([]), brand).await
    }

    /// Updates brand `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update(&self, id: u64, brand: &Brand) -> Result<Envelope<Brand>, ResourceError> {
        Brand::update(self.client, &path_ids([("id", id)]), brand).await
    }

    /// Deletes brand `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        Brand::delete(self.client, &path_ids([("id", id)])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::ResourceOperation;

    #[test]
    fn test_brand_resolves_member_path() {
        let (method, path) =
            Brand::resolve(ResourceOperation::Delete, &path_ids([("id", 12)])).unwrap();
        assert_eq!(method, crate::clients::HttpMethod::Delete);
        assert_eq!(path, "catalog/brands/12");
    }

    #[test]
    fn test_brand_serialization_skips_unset_fields() {
        let brand = Brand {
            name: "Acme".to_string(),
            meta_keywords: Some(vec!["acme".to_string()]),
            ..Default::default()
        };
        let json = serde_json::to_string(&brand).unwrap();
        assert_eq!(json, r#"{"name":"Acme","meta_keywords":["acme"]}"#);
    }
}
