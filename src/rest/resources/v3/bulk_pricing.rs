//! Bulk pricing rule resource and service.
//!
//! Bulk pricing rules discount a product by quantity tier, e.g. 5 off each
//! unit when buying 10 to 19.

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::path_ids;
use crate::rest::{
    crud_paths, Envelope, QueryParams, ResourceError, ResourceOperation, ResourcePath,
    RestResource,
};

/// One quantity tier. `quantity_max` 0 (or absent) means unbounded.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PricingRule {
    /// Read-only rule ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Smallest quantity the tier covers.
    #[serde(default)]
    pub quantity_min: u32,
    /// Largest quantity the tier covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_max: Option<u32>,
    /// `price`, `percent`, or `fixed`.
    #[serde(rename = "type", default)]
    pub rule_type: String,
    /// Discount, read according to `rule_type`.
    #[serde(default)]
    pub amount: f64,
    /// Owning product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
}

const RULE_PATHS: [ResourcePath; 5] = crud_paths(
    &["product_id"],
    "catalog/products/{product_id}/bulk-pricing-rules",
    &["product_id", "id"],
    "catalog/products/{product_id}/bulk-pricing-rules/{id}",
);

impl RestResource for PricingRule {
    const NAME: &'static str = "PricingRule";
    const PATHS: &'static [ResourcePath] = &[
        RULE_PATHS[0],
        RULE_PATHS[1],
        RULE_PATHS[2],
        RULE_PATHS[3],
        RULE_PATHS[4],
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["product_id"],
            "catalog/products/{product_id}/bulk-pricing-rules",
        ),
    ];
}

/// Bulk pricing rules of one product.
#[derive(Debug, Clone, Copy)]
pub struct BulkPricingRuleService<'a> {
    client: &'a HttpClient,
}

impl<'a> BulkPricingRuleService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the rules of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        product_id: u64,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<PricingRule>>, ResourceError> {
        PricingRule::list(self.client, &path_ids([("product_id", product_id)]), params).await
    }

    /// Fetches rule `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(
        &self,
        product_id: u64,
        id: u64,
    ) -> Result<Envelope<PricingRule>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        PricingRule::get(self.client, &ids, None).await
    }

    /// Adds a rule to `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(
        &self,
        product_id: u64,
        rule: &PricingRule,
    ) -> Result<Envelope<PricingRule>, ResourceError> {
        PricingRule::create(self.client, &path_ids([("product_id", product_id)]), rule).await
    }

    /// Updates rule `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update(
        &self,
        product_id: u64,
        id: u64,
        rule: &PricingRule,
    ) -> Result<Envelope<PricingRule>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        PricingRule::update(self.client, &ids, rule).await
    }

    /// Deletes rule `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, product_id: u64, id: u64) -> Result<(), ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        PricingRule::delete(self.client, &ids).await
    }

    /// Replaces the rules of `product_id` in one request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update_batch(
        &self,
        product_id: u64,
        rules: &[PricingRule],
    ) -> Result<Envelope<Vec<PricingRule>>, ResourceError> {
        let path = format!("catalog/products/{product_id}/bulk-pricing-rules");
        let body = serde_json::json!({ "bulk_pricing_rules": rules });
        let request = self
            .client
            .build_request_with_body(HttpMethod::Put, &path, &body)?;
        Ok(self.client.decode_into(request).await?)
    }

    /// Deletes every rule of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete_all(&self, product_id: u64) -> Result<(), ResourceError> {
        PricingRule::delete(self.client, &path_ids([("product_id", product_id)])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_open_ended_tier_omits_quantity_max() {
        let rule = PricingRule {
            quantity_min: 20,
            rule_type: "price".to_string(),
            amount: 15.0,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({"quantity_min": 20, "type": "price", "amount": 15.0})
        );
    }

    #[test]
    fn test_delete_picks_member_or_collection() {
        let ids = path_ids([("product_id", 77), ("id", 2)]);
        let (_, path) = PricingRule::resolve(ResourceOperation::Delete, &ids).unwrap();
        assert_eq!(path, "catalog/products/77/bulk-pricing-rules/2");

        let (method, path) =
            PricingRule::resolve(ResourceOperation::Delete, &path_ids([("product_id", 77)]))
                .unwrap();
        assert_eq!(method, HttpMethod::Delete);
        assert_eq!(path, "catalog/products/77/bulk-pricing-rules");
    }
}
