//! Product summary: stock, sales, and review totals for one product.

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::path_ids;
use crate::rest::{Envelope, ResourceError, ResourceOperation, ResourcePath, RestResource};

/// The thumbnail shown for a product in listings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PrimaryImage {
    /// Image ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Owning product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Thumbnail rendition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_thumbnail: Option<String>,
    /// Standard rendition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_standard: Option<String>,
}

/// Stock, sales, and review totals for one product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Summary {
    /// Stock on hand.
    pub inventory_level: i64,
    /// Low-stock threshold.
    pub inventory_warning_level: i64,
    /// First category the product is in.
    pub primary_category_id: u64,
    /// Units sold.
    pub total_sold: u64,
    /// Listing thumbnail, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_image: Option<PrimaryImage>,
    /// `available`, `disabled`, or `preorder`.
    pub availability: String,
    /// Mean review rating.
    pub rating_average: f64,
    /// Reviews received.
    pub number_of_reviews: u64,
}

impl RestResource for Summary {
    const NAME: &'static str = "Summary";
    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::Get,
        &["product_id"],
        "catalog/products/{product_id}/summary",
    )];
}

/// Read-only product summaries.
#[derive(Debug, Clone, Copy)]
pub struct SummaryService<'a> {
    client: &'a HttpClient,
}

impl<'a> SummaryService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetches the summary of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(&self, product_id: u64) -> Result<Envelope<Summary>, ResourceError> {
        Summary::get(self.client, &path_ids([("product_id", product_id)]), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_decodes() {
        let summary: Summary = serde_json::from_value(json!({
            "inventory_level": 40,
            "inventory_warning_level": 10,
            "primary_category_id": 18,
            "total_sold": 3,
            "primary_image": {"id": 372, "url_thumbnail": "https://cdn.example.com/t.jpg"},
            "availability": "available",
            "rating_average": 4.5,
            "number_of_reviews": 2
        }))
        .unwrap();

        assert_eq!(summary.inventory_level, 40);
        assert_eq!(summary.primary_image.unwrap().id, Some(372));
        assert!((summary.rating_average - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_is_read_only() {
        let ids = path_ids([("product_id", 1)]);
        assert!(Summary::resolve(ResourceOperation::Get, &ids).is_ok());
        assert!(Summary::resolve(ResourceOperation::Update, &ids).is_err());
        assert!(Summary::resolve(ResourceOperation::List, &ids).is_err());
    }
}
