//! Complex rule resource and service.
//!
//! A complex rule adjusts price, weight, or purchasability when a shopper
//! picks a particular combination of option and modifier values.

use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::resources::path_ids;
use crate::rest::{crud_paths, Envelope, QueryParams, ResourceError, ResourcePath, RestResource};

/// How a rule changes the price.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RuleAdjuster {
    /// `relative` or `percentage`.
    #[serde(default)]
    pub adjuster: String,
    /// Amount, in currency or percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjuster_value: Option<f64>,
}

/// One option value the rule matches on.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RuleCondition {
    /// Option or modifier matched.
    #[serde(default)]
    pub product_option_id: u64,
    /// Value that must be picked.
    #[serde(default)]
    pub product_option_value_id: u64,
    /// Read-only description of the condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

/// A rule applied when shoppers pick a matching combination.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ComplexRule {
    /// Read-only rule ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Owning product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Whether the rule is active.
    #[serde(default)]
    pub enabled: bool,
    /// Stop evaluating later rules once this one matches.
    #[serde(default)]
    pub stop: bool,
    /// Whether a match blocks purchase.
    #[serde(default)]
    pub purchasing_disabled: bool,
    /// Text shown when purchase is blocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchasing_disabled_message: Option<String>,
    /// Price change on a match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_adjuster: Option<RuleAdjuster>,
    /// Values that must all be picked.
    #[serde(default)]
    pub conditions: Vec<RuleCondition>,
    /// Position among its siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

impl RestResource for ComplexRule {
    const NAME: &'static str = "ComplexRule";
    const PATHS: &'static [ResourcePath] = &crud_paths(
        &["product_id"],
        "catalog/products/{product_id}/complex-rules",
        &["product_id", "id"],
        "catalog/products/{product_id}/complex-rules/{id}",
    );
}

/// Complex rules of one product.
#[derive(Debug, Clone, Copy)]
pub struct ComplexRuleService<'a> {
    client: &'a HttpClient,
}

impl<'a> ComplexRuleService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the complex rules of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        product_id: u64,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<ComplexRule>>, ResourceError> {
        ComplexRule::list(self.client, &path_ids([("product_id", product_id)]), params).await
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
    ) -> Result<Envelope<ComplexRule>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        ComplexRule::get(self.client, &ids, None).await
    }

    /// Creates a rule under `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(
        &self,
        product_id: u64,
        rule: &ComplexRule,
    ) -> Result<Envelope<ComplexRule>, ResourceError> {
        ComplexRule::create(self.client, &path_ids([("product_id", product_id)]), rule).await
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
        rule: &ComplexRule,
    ) -> Result<Envelope<ComplexRule>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        ComplexRule::update(self.client, &ids, rule).await
    }

    /// Deletes rule `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, product_id: u64, id: u64) -> Result<(), ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        ComplexRule::delete(self.client, &ids).await
    }
}
