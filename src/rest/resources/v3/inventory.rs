//! Aggregated product inventory.

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::resources::path_ids;
use crate::rest::{Envelope, QueryParams, ResourceError, ResourceOperation, ResourcePath, RestResource};

/// Stock totals for a product across its variants.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProductAggregatedInventory {
    /// Product the totals belong to.
    pub product_id: u64,
    /// Stock on hand, summed over variants when tracked by variant.
    pub inventory_level: i64,
    /// Low-stock threshold.
    pub inventory_warning_level: i64,
    /// Number of warranties on the product.
    pub warranties_count: u64,
    /// Number of variants.
    pub variants_count: u64,
    /// `none`, `product`, or `variant`.
    pub inventory_tracking: String,
}

impl RestResource for ProductAggregatedInventory {
    const NAME: &'static str = "ProductAggregatedInventory";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &[],
            "catalog/products/inventory",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["product_id"],
            "catalog/products/{product_id}/inventory",
        ),
    ];
}

/// Read-only inventory totals.
#[derive(Debug, Clone, Copy)]
pub struct InventoryService<'a> {
    client: &'a HttpClient,
}

impl<'a> InventoryService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetches the inventory of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(
        &self,
        product_id: u64,
    ) -> Result<Envelope<ProductAggregatedInventory>, ResourceError> {
        let ids = path_ids([("product_id", product_id)]);
        ProductAggregatedInventory::get(self.client, &ids, None).await
    }

    /// Fetches the inventory of several products, sent as repeated `id:in`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        product_ids: &[u64],
    ) -> Result<Envelope<Vec<ProductAggregatedInventory>>, ResourceError> {
        let params = QueryParams {
            id_in: product_ids.to_vec(),
            ..Default::default()
        };
        ProductAggregatedInventory::list(self.client, &path_ids([]), Some(&params)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_paths() {
        let (_, path) =
            ProductAggregatedInventory::resolve(ResourceOperation::List, &path_ids([])).unwrap();
        assert_eq!(path, "catalog/products/inventory");

        let (_, path) = ProductAggregatedInventory::resolve(
            ResourceOperation::Get,
            &path_ids([("product_id", 77)]),
        )
        .unwrap();
        assert_eq!(path, "catalog/products/77/inventory");
    }
}
