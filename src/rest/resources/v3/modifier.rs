//! Product modifiers and their values.
//!
//! Modifiers are choices that change the line item without creating a
//! variant (gift wrap, engraving text). Their values reuse [`OptionValue`].

use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::resources::path_ids;
use crate::rest::{crud_paths, Envelope, QueryParams, ResourceError, ResourcePath, RestResource};

use super::OptionValue;

/// [`OptionConfig`](super::OptionConfig) plus the product-list settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ModifierConfig {
    /// Prefilled value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Whether a checkbox starts checked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_by_default: Option<bool>,
    /// Text next to a checkbox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkbox_label: Option<String>,
    /// Whether dates are restricted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_limited: Option<bool>,
    /// `earliest`, `range`, or `latest`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_limit_mode: Option<String>,
    /// Earliest allowed date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_earliest_value: Option<String>,
    /// Latest allowed date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_latest_value: Option<String>,
    /// Allowed file type groups, e.g. `images`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_types_supported: Option<Vec<String>>,
    /// Largest upload, in kilobytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_max_size: Option<u64>,
    /// Shortest allowed text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_min_length: Option<u32>,
    /// Longest allowed text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_max_length: Option<u32>,
    /// Whether text length is restricted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_characters_limited: Option<bool>,
    /// Whether numbers are restricted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_limited: Option<bool>,
    /// `lowest`, `highest`, or `range`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_limit_mode: Option<String>,
    /// Smallest allowed number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_lowest_value: Option<f64>,
    /// Largest allowed number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_highest_value: Option<f64>,
    /// Whether decimals are rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_integers_only: Option<bool>,
    /// Whether picking a product also takes its stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_list_adjusts_inventory: Option<bool>,
    /// Whether picking a product adds its price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_list_adjusts_pricing: Option<bool>,
}

/// A product modifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Modifier {
    /// Read-only modifier ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Owning product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Internal name.
    #[serde(default)]
    pub name: String,
    /// Name shown to shoppers.
    #[serde(default)]
    pub display_name: String,
    /// `checkbox`, `text`, `multi_line_text`, `numbers_only_text`, `date`,
    /// `file`, or any option type.
    #[serde(rename = "type", default)]
    pub modifier_type: String,
    /// Whether shoppers must fill it in.
    #[serde(default)]
    pub required: bool,
    /// Settings for free-input types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ModifierConfig>,
    /// Choices offered, for list types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_values: Option<Vec<OptionValue>>,
}

impl RestResource for Modifier {
    const NAME: &'static str = "Modifier";
    const PATHS: &'static [ResourcePath] = &crud_paths(
        &["product_id"],
        "catalog/products/{product_id}/modifiers",
        &["product_id", "id"],
        "catalog/products/{product_id}/modifiers/{id}",
    );
}

/// Modifiers of one product, and the values of each modifier.
#[derive(Debug, Clone, Copy)]
pub struct ModifierService<'a> {
    client: &'a HttpClient,
}

impl<'a> ModifierService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the modifiers of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        product_id: u64,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<Modifier>>, ResourceError> {
        Modifier::list(self.client, &path_ids([("product_id", product_id)]), params).await
    }

    /// Fetches modifier `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(&self, product_id: u64, id: u64) -> Result<Envelope<Modifier>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        Modifier::get(self.client, &ids, None).await
    }

    /// Creates a modifier under `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(
        &self,
        product_id: u64,
        modifier: &Modifier,
    ) -> Result<Envelope<Modifier>, ResourceError> {
        Modifier::create(self.client, &path_ids([("product_id", product_id)]), modifier).await
    }

    /// Updates modifier `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update(
        &self,
        product_id: u64,
        id: u64,
        modifier: &Modifier,
    ) -> Result<Envelope<Modifier>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        Modifier::update(self.client, &ids, modifier).await
    }

    /// Deletes modifier `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, product_id: u64, id: u64) -> Result<(), ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        Modifier::delete(self.client, &ids).await
    }

    /// Lists the values of modifier `modifier_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list_values(
        &self,
        product_id: u64,
        modifier_id: u64,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<OptionValue>>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("modifier_id", modifier_id)]);
        OptionValue::list(self.client, &ids, params).await
    }

    /// Fetches value `id` of modifier `modifier_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get_value(
        &self,
        product_id: u64,
        modifier_id: u64,
        id: u64,
    ) -> Result<Envelope<OptionValue>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("modifier_id", modifier_id), ("id", id)]);
        OptionValue::get(self.client, &ids, None).await
    }

    /// Adds a value to modifier `modifier_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create_value(
        &self,
        product_id: u64,
        modifier_id: u64,
        value: &OptionValue,
    ) -> Result<Envelope<OptionValue>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("modifier_id", modifier_id)]);
        OptionValue::create(self.client, &ids, value).await
    }

    /// Updates value `id` of modifier `modifier_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update_value(
        &self,
        product_id: u64,
        modifier_id: u64,
        id: u64,
        value: &OptionValue,
    ) -> Result<Envelope<OptionValue>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("modifier_id", modifier_id), ("id", id)]);
        OptionValue::update(self.client, &ids, value).await
    }

    /// Deletes value `id` of modifier `modifier_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete_value(
        &self,
        product_id: u64,
        modifier_id: u64,
        id: u64,
    ) -> Result<(), ResourceError> {
        let ids = path_ids([("product_id", product_id), ("modifier_id", modifier_id), ("id", id)]);
        OptionValue::delete(self.client, &ids).await
    }
}
