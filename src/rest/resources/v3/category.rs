//! Category resource and service.

use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::resources::path_ids;
use crate::rest::{crud_paths, Envelope, QueryParams, ResourceError, ResourcePath, RestResource};

use super::CustomUrl;

/// A catalog category. `parent_id` 0 marks a top-level category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Category {
    /// Read-only category ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Parent category, `0` for top level.
    #[serde(default)]
    pub parent_id: u64,
    /// Category name, unique among siblings.
    #[serde(default)]
    pub name: String,
    /// HTML description shown on the category page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Read-only storefront page views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    /// Position among its siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    /// Storefront page title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    /// SEO meta keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<Vec<String>>,
    /// SEO meta description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// Storefront template file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_file: Option<String>,
    /// Whether the category shows on the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    /// `use_store_settings`, `featured`, `newest`, `best_selling`, `alpha_asc`, `alpha_desc`, `avg_customer_review`, `price_asc`, or `price_desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_product_sort: Option<String>,
    /// Image URL; the store fetches and hosts it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Storefront URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<CustomUrl>,
}

impl RestResource for Category {
    const NAME: &'static str = "Category";
    const PATHS: &'static [ResourcePath] = &crud_paths(
        &[],
        "catalog/categories",
        &["id"],
        "catalog/categories/{id}",
    );
}

/// Catalog categories.
#[derive(Debug, Clone, Copy)]
pub struct CategoryService<'a> {
    client: &'a HttpClient,
}

impl<'a> CategoryService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists categories matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<Category>>, ResourceError> {
        Category::list(self.client, &path_ids([]), params).await
    }

    /// Fetches one category.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(
        &self,
        id: u64,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Category>, ResourceError> {
        Category::get(self.client, &path_ids([("id", id)]), params).await
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(&self, category: &Category) -> Result<Envelope<Category>, ResourceError> {
        Category::create(self.client, &path_ids([]), category).await
    }

    /// Updates category `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update(
        &self,
        id: u64,
        category: &Category,
    ) -> Result<Envelope<Category>, ResourceError> {
        Category::update(self.client, &path_ids([("id", id)]), category).await
    }

    /// Deletes category `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        Category::delete(self.client, &path_ids([("id", id)])).await
    }
}
