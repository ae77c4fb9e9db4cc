//! Batch product operations against `catalog/products`.

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::{Envelope, ResourceError};

use super::Product;

const PRODUCTS_PATH: &str = "catalog/products";

/// A per-product failure reported by a batch delete.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BatchError {
    /// Why the product could not be deleted.
    pub error: String,
    /// ID of the product that failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<u64>,
    /// API URL of the product that failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_url: Option<String>,
    /// HTTP status for this product.
    pub status: u16,
}

#[derive(Serialize)]
struct ProductsBody<'a> {
    products: &'a [Product],
}

#[derive(Serialize)]
struct ProductIdsBody<'a> {
    product_ids: &'a [u64],
}

/// Many products per request.
#[derive(Debug, Clone, Copy)]
pub struct BatchService<'a> {
    client: &'a HttpClient,
}

impl<'a> BatchService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Creates `products` and returns the server's copies.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create_products(
        &self,
        products: &[Product],
    ) -> Result<Envelope<Vec<Product>>, ResourceError> {
        self.send_products(HttpMethod::Post, products).await
    }

    /// Updates `products`; each needs its `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update_products(
        &self,
        products: &[Product],
    ) -> Result<Envelope<Vec<Product>>, ResourceError> {
        self.send_products(HttpMethod::Put, products).await
    }

    /// Deletes `product_ids`; the envelope lists the ones that failed.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete_products(
        &self,
        product_ids: &[u64],
    ) -> Result<Envelope<Vec<BatchError>>, ResourceError> {
        let body = ProductIdsBody { product_ids };
        let request =
            self.client
                .build_request_with_body(HttpMethod::Delete, PRODUCTS_PATH, &body)?;
        Ok(self.client.decode_into(request).await?)
    }

    async fn send_products(
        &self,
        method: HttpMethod,
        products: &[Product],
    ) -> Result<Envelope<Vec<Product>>, ResourceError> {
        let body = ProductsBody { products };
        let request = self
            .client
            .build_request_with_body(method, PRODUCTS_PATH, &body)?;
        Ok(self.client.decode_into(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_products_body_shape() {
        let products = [Product {
            id: Some(5),
            name: "Kite".to_string(),
            price: 12.0,
            ..Default::default()
        }];
        let json = serde_json::to_value(ProductsBody { products: &products }).unwrap();
        assert_eq!(json["products"][0]["id"], 5);
        assert_eq!(json["products"][0]["name"], "Kite");
    }

    #[test]
    fn test_product_ids_body_shape() {
        let json = serde_json::to_value(ProductIdsBody { product_ids: &[1, 2] }).unwrap();
        assert_eq!(json, json!({"product_ids": [1, 2]}));
    }

    #[test]
    fn test_batch_error_decodes() {
        let error: BatchError = serde_json::from_value(json!({
            "error": "Product not found",
            "resource_id": 9,
            "status": 404
        }))
        .unwrap();
        assert_eq!(error.status, 404);
        assert_eq!(error.resource_id, Some(9));
        assert_eq!(error.resource_url, None);
    }
}
