//! Variant resource and service.
//!
//! A variant is one purchasable combination of a product's option values,
//! with its own SKU, price, and stock.

use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::resources::path_ids;
use crate::rest::{crud_paths, Envelope, QueryParams, ResourceError, ResourcePath, RestResource};

use super::OptionValue;

/// A purchasable combination of option values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Variant {
    /// Read-only variant ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Owning product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Stock keeping unit, unique across the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Price, overriding the product's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// What the merchant paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    /// Sale price, overriding the product's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    /// Manufacturer's suggested retail price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<f64>,
    /// Weight, overriding the product's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Width, overriding the product's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height, overriding the product's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Depth, overriding the product's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    /// Whether shipping is free.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free_shipping: Option<bool>,
    /// Flat shipping charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_cost_shipping_price: Option<f64>,
    /// Whether the variant can't be bought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchasing_disabled: Option<bool>,
    /// Text shown when it can't be bought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchasing_disabled_message: Option<String>,
    /// Image shown when the variant is picked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Universal product code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    /// Manufacturer part number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,
    /// Global trade item number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    /// Stock on hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_level: Option<i64>,
    /// Low-stock threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_warning_level: Option<i64>,
    /// Warehouse bin location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_picking_number: Option<String>,
    /// The option values this variant is made of. On create, each entry
    /// needs `option_id` and `id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_values: Option<Vec<OptionValue>>,
}

impl RestResource for Variant {
    const NAME: &'static str = "Variant";
    const PATHS: &'static [ResourcePath] = &crud_paths(
        &["product_id"],
        "catalog/products/{product_id}/variants",
        &["product_id", "id"],
        "catalog/products/{product_id}/variants/{id}",
    );
}

/// Variants of one product.
#[derive(Debug, Clone, Copy)]
pub struct VariantService<'a> {
    client: &'a HttpClient,
}

impl<'a> VariantService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the variants of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        product_id: u64,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<Variant>>, ResourceError> {
        Variant::list(self.client, &path_ids([("product_id", product_id)]), params).await
    }

    /// Fetches variant `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(&self, product_id: u64, id: u64) -> Result<Envelope<Variant>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        Variant::get(self.client, &ids, None).await
    }

    /// Creates a variant under `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(
        &self,
        product_id: u64,
        variant: &Variant,
    ) -> Result<Envelope<Variant>, ResourceError> {
        Variant::create(self.client, &path_ids([("product_id", product_id)]), variant).await
    }

    /// Updates variant `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update(
        &self,
        product_id: u64,
        id: u64,
        variant: &Variant,
    ) -> Result<Envelope<Variant>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        Variant::update(self.client, &ids, variant).await
    }

    /// Deletes variant `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, product_id: u64, id: u64) -> Result<(), ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        Variant::delete(self.client, &ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::ResourceOperation;
    use serde_json::json;

    #[test]
    fn test_variant_paths_need_product_id() {
        let (_, path) =
            Variant::resolve(ResourceOperation::Create, &path_ids([("product_id", 77)])).unwrap();
        assert_eq!(path, "catalog/products/77/variants");

        let error = Variant::resolve(ResourceOperation::Get, &path_ids([("id", 5)])).unwrap_err();
        assert!(matches!(error, ResourceError::PathResolutionFailed { .. }));
    }

    #[test]
    fn test_variant_with_option_values() {
        let variant = Variant {
            sku: Some("TRAIN-RED".to_string()),
            price: Some(26.0),
            option_values: Some(vec![OptionValue {
                id: Some(91),
                option_id: Some(14),
                ..Default::default()
            }]),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&variant).unwrap(),
            json!({
                "sku": "TRAIN-RED",
                "price": 26.0,
                "option_values": [{"id": 91, "option_id": 14}]
            })
        );
    }
}
