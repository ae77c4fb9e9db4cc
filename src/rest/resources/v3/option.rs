//! Product options and their values.
//!
//! Options are the choices that build variants (size, colour). Each option
//! owns a list of [`OptionValue`]s. The same value record is used under
//! modifiers, so [`OptionValue`] carries path templates for both parents.

use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::resources::path_ids;
use crate::rest::{crud_paths, Envelope, QueryParams, ResourceError, ResourcePath, RestResource};

/// One choice of an option or modifier, e.g. "Red" of "Colour".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OptionValue {
    /// Read-only value ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Option or modifier the value belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_id: Option<u64>,
    /// Text shown to shoppers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Position among its siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    /// Type-specific payload, e.g. a hex colour for swatches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Whether the value starts selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

const OPTION_VALUE_PATHS: [ResourcePath; 5] = crud_paths(
    &["product_id", "option_id"],
    "catalog/products/{product_id}/options/{option_id}/values",
    &["product_id", "option_id", "id"],
    "catalog/products/{product_id}/options/{option_id}/values/{id}",
);

const MODIFIER_VALUE_PATHS: [ResourcePath; 5] = crud_paths(
    &["product_id", "modifier_id"],
    "catalog/products/{product_id}/modifiers/{modifier_id}/values",
    &["product_id", "modifier_id", "id"],
    "catalog/products/{product_id}/modifiers/{modifier_id}/values/{id}",
);

impl RestResource for OptionValue {
    const NAME: &'static str = "OptionValue";
    const PATHS: &'static [ResourcePath] = &[
        OPTION_VALUE_PATHS[0],
        OPTION_VALUE_PATHS[1],
        OPTION_VALUE_PATHS[2],
        OPTION_VALUE_PATHS[3],
        OPTION_VALUE_PATHS[4],
        MODIFIER_VALUE_PATHS[0],
        MODIFIER_VALUE_PATHS[1],
        MODIFIER_VALUE_PATHS[2],
        MODIFIER_VALUE_PATHS[3],
        MODIFIER_VALUE_PATHS[4],
    ];
}

/// Settings for option types that take free input (text, numbers, dates,
/// files, checkboxes).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OptionConfig {
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
}

/// A variant option on a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductOption {
    /// Read-only option ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Owning product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Name shown to shoppers.
    #[serde(default)]
    pub display_name: String,
    /// `radio_buttons`, `rectangles`, `dropdown`, `product_list`, or `swatch`.
    #[serde(rename = "type", default)]
    pub option_type: String,
    /// Settings for free-input types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<OptionConfig>,
    /// Choices offered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_values: Option<Vec<OptionValue>>,
}

impl RestResource for ProductOption {
    const NAME: &'static str = "ProductOption";
    const PATHS: &'static [ResourcePath] = &crud_paths(
        &["product_id"],
        "catalog/products/{product_id}/options",
        &["product_id", "id"],
        "catalog/products/{product_id}/options/{id}",
    );
}

/// Options of one product, and the values of each option.
#[derive(Debug, Clone, Copy)]
pub struct OptionService<'a> {
    client: &'a HttpClient,
}

impl<'a> OptionService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the options of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        product_id: u64,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<ProductOption>>, ResourceError> {
        ProductOption::list(self.client, &path_ids([("product_id", product_id)]), params).await
    }

    /// Fetches option `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(
        &self,
        product_id: u64,
        id: u64,
    ) -> Result<Envelope<ProductOption>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        ProductOption::get(self.client, &ids, None).await
    }

    /// Creates an option, with its values, under `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(
        &self,
        product_id: u64,
        option: &ProductOption,
    ) -> Result<Envelope<ProductOption>, ResourceError> {
        ProductOption::create(self.client, &path_ids([("product_id", product_id)]), option).await
    }

    /// Updates option `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update(
        &self,
        product_id: u64,
        id: u64,
        option: &ProductOption,
    ) -> Result<Envelope<ProductOption>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        ProductOption::update(self.client, &ids, option).await
    }

    /// Deletes option `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, product_id: u64, id: u64) -> Result<(), ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        ProductOption::delete(self.client, &ids).await
    }

    /// Lists the values of option `option_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list_values(
        &self,
        product_id: u64,
        option_id: u64,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<OptionValue>>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("option_id", option_id)]);
        OptionValue::list(self.client, &ids, params).await
    }

    /// Fetches value `id` of option `option_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get_value(
        &self,
        product_id: u64,
        option_id: u64,
        id: u64,
    ) -> Result<Envelope<OptionValue>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("option_id", option_id), ("id", id)]);
        OptionValue::get(self.client, &ids, None).await
    }

    /// Adds a value to option `option_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create_value(
        &self,
        product_id: u64,
        option_id: u64,
        value: &OptionValue,
    ) -> Result<Envelope<OptionValue>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("option_id", option_id)]);
        OptionValue::create(self.client, &ids, value).await
    }

    /// Updates value `id` of option `option_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update_value(
        &self,
        product_id: u64,
        option_id: u64,
        id: u64,
        value: &OptionValue,
    ) -> Result<Envelope<OptionValue>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("option_id", option_id), ("id", id)]);
        OptionValue::update(self.client, &ids, value).await
    }

    /// Deletes value `id` of option `option_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete_value(
        &self,
        product_id: u64,
        option_id: u64,
        id: u64,
    ) -> Result<(), ResourceError> {
        let ids = path_ids([("product_id", product_id), ("option_id", option_id), ("id", id)]);
        OptionValue::delete(self.client, &ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use crate::rest::ResourceOperation;
    use serde_json::json;

    #[test]
    fn test_option_value_paths_follow_parent() {
        let ids = path_ids([("product_id", 7), ("option_id", 3), ("id", 11)]);
        let (method, path) = OptionValue::resolve(ResourceOperation::Update, &ids).unwrap();
        assert_eq!(method, HttpMethod::Put);
        assert_eq!(path, "catalog/products/7/options/3/values/11");

        let ids = path_ids([("product_id", 7), ("modifier_id", 4)]);
        let (method, path) = OptionValue::resolve(ResourceOperation::Create, &ids).unwrap();
        assert_eq!(method, HttpMethod::Post);
        assert_eq!(path, "catalog/products/7/modifiers/4/values");
    }

    #[test]
    fn test_option_value_without_parent_fails() {
        let ids = path_ids([("product_id", 7), ("id", 11)]);
        assert!(OptionValue::resolve(ResourceOperation::Get, &ids).is_err());
    }

    #[test]
    fn test_dropdown_option_serialization() {
        let option = ProductOption {
            display_name: "Colour".to_string(),
            option_type: "dropdown".to_string(),
            option_values: Some(vec![
                OptionValue {
                    label: Some("Red".to_string()),
                    sort_order: Some(0),
                    is_default: Some(true),
                    ..Default::default()
                },
                OptionValue {
                    label: Some("Blue".to_string()),
                    sort_order: Some(1),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&option).unwrap(),
            json!({
                "display_name": "Colour",
                "type": "dropdown",
                "option_values": [
                    {"label": "Red", "sort_order": 0, "is_default": true},
                    {"label": "Blue", "sort_order": 1}
                ]
            })
        );
    }

    #[test]
    fn test_option_config_decodes() {
        let option: ProductOption = serde_json::from_value(json!({
            "id": 3,
            "product_id": 7,
            "display_name": "Engraving",
            "type": "text",
            "config": {"text_characters_limited": true, "text_max_length": 20}
        }))
        .unwrap();

        let config = option.config.unwrap();
        assert_eq!(config.text_characters_limited, Some(true));
        assert_eq!(config.text_max_length, Some(20));
        assert_eq!(config.default_value, None);
    }
}
