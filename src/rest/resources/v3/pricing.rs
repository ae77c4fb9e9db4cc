//! Price calculation for products and variants.
//!
//! `POST pricing/products` returns the price a given customer would pay on a
//! given channel, with and without tax, including bulk pricing tiers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::{Envelope, ResourceError};

/// Who is buying, and where.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PricingContext {
    /// Channel to price for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<u64>,
    /// Customer to price for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    /// Customer group to price for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_group_id: Option<u64>,
}

/// Narrows which items are priced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PricingFilters {
    /// Price only taxable, or only non-taxable, items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_taxable: Option<bool>,
}

/// Which min/max aggregates to compute across the priced items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RequestedAggregations {
    /// Lowest price before tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_excluded_price_min: Option<bool>,
    /// Highest price before tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_excluded_price_max: Option<bool>,
    /// Lowest price after tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_included_price_min: Option<bool>,
    /// Highest price after tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_included_price_max: Option<bool>,
}

/// Body of a price calculation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PricingRequest {
    /// Products to price.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_ids: Vec<u64>,
    /// Variants to price.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variant_ids: Vec<u64>,
    /// Whether to compute tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_taxes: Option<bool>,
    /// ISO 4217 codes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub currencies: Vec<String>,
    /// Who is buying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<PricingContext>,
    /// Which items to price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<PricingFilters>,
    /// Aggregates to compute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<RequestedAggregations>,
}

/// One bulk pricing tier with its resolved prices.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PricingTier {
    /// Smallest quantity in the tier.
    pub quantity_min: u32,
    /// Largest quantity, `None` for unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_max: Option<u32>,
    /// `price`, `percent`, or `fixed`.
    #[serde(rename = "type")]
    pub tier_type: String,
    /// Discount the tier applies.
    pub amount: f64,
    /// Unit price before tax.
    pub price_excluding_tax: f64,
    /// Unit price after tax.
    pub price_including_tax: f64,
    /// Tax on one unit.
    pub tax_amount: f64,
}

/// Resolved prices for one product or variant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PricingEntry {
    /// Price before tax.
    pub price_excluding_tax: f64,
    /// Price after tax.
    pub price_including_tax: f64,
    /// Tax on the price.
    pub tax_amount: f64,
    /// Retail price before tax.
    pub retail_price_excluding_tax: f64,
    /// Retail price after tax.
    pub retail_price_including_tax: f64,
    /// Tax on the retail price.
    pub retail_tax_amount: f64,
    /// Sale price before tax.
    pub sale_price_excluding_tax: f64,
    /// Sale price after tax.
    pub sale_price_including_tax: f64,
    /// Tax on the sale price.
    pub sale_tax_amount: f64,
    /// Minimum advertised price before tax.
    pub map_price_excluding_tax: f64,
    /// Minimum advertised price after tax.
    pub map_price_including_tax: f64,
    /// Tax on the minimum advertised price.
    pub map_tax_amount: f64,
    /// Quantity tiers.
    pub bulk_pricing_tiers: Vec<PricingTier>,
    /// ISO 4217 code.
    pub currency: String,
}

/// Min/max prices across everything priced.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PricingAggregations {
    /// Lowest price before tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_excluded_price_min: Option<f64>,
    /// Highest price before tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_excluded_price_max: Option<f64>,
    /// Lowest price after tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_included_price_min: Option<f64>,
    /// Highest price after tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_included_price_max: Option<f64>,
}

/// Prices keyed by product or variant ID (as a string).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PricingData {
    /// Prices by product ID.
    pub products: HashMap<String, PricingEntry>,
    /// Prices by variant ID.
    pub variants: HashMap<String, PricingEntry>,
    /// Requested aggregates.
    pub aggregations: PricingAggregations,
}

impl PricingData {
    /// Returns the prices of product `id`, if it was priced.
    #[must_use]
    pub fn product(&self, id: u64) -> Option<&PricingEntry> {
        self.products.get(&id.to_string())
    }

    /// Returns the prices of variant `id`, if it was priced.
    #[must_use]
    pub fn variant(&self, id: u64) -> Option<&PricingEntry> {
        self.variants.get(&id.to_string())
    }
}

/// Price calculation.
#[derive(Debug, Clone, Copy)]
pub struct PricingService<'a> {
    client: &'a HttpClient,
}

impl<'a> PricingService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Prices the products and variants named in `request`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(
        &self,
        request: &PricingRequest,
    ) -> Result<Envelope<PricingData>, ResourceError> {
        let request =
            self.client
                .build_request_with_body(HttpMethod::Post, "pricing/products", request)?;
        Ok(self.client.decode_into(request).await?)
    }
}
