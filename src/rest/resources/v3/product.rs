//! Product resource and service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::resources::path_ids;
use crate::rest::{crud_paths, Envelope, QueryParams, ResourceError, ResourcePath, RestResource};

use super::{
    ComplexRule, CustomField, CustomUrl, Modifier, PricingRule, ProductImage, ProductOption,
    ProductVideo, Review, Variant,
};

/// Whether a product ships or is downloaded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// Shipped to the customer.
    #[default]
    Physical,
    /// Downloaded after purchase.
    Digital,
}

/// A catalog product.
///
/// `name`, `type`, `weight`, and `price` are always sent; everything else is
/// omitted when `None`. The `images`, `videos`, `variants`, and other nested
/// lists are filled in when requested through `include`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// Read-only product ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Product name, unique across the store.
    #[serde(default)]
    pub name: String,
    /// Physical or digital.
    #[serde(rename = "type", default)]
    pub product_type: ProductType,
    /// Stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// HTML description shown on the product page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Weight, in the store's weight unit.
    #[serde(default)]
    pub weight: f64,
    /// Width, in the store's length unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Depth, in the store's length unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    /// Height, in the store's length unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Default price.
    #[serde(default)]
    pub price: f64,
    /// What the merchant paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    /// Manufacturer's suggested retail price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<f64>,
    /// Price shown instead of `price` while on sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    /// Minimum advertised price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_price: Option<f64>,
    /// Tax class applied to the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class_id: Option<u64>,
    /// Tax code for third-party tax providers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_tax_code: Option<String>,
    /// Category IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<u64>>,
    /// Brand ID, `0` for none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<u64>,
    /// Stock on hand, when tracked at product level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_level: Option<i64>,
    /// Stock level that triggers a low-stock warning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_warning_level: Option<i64>,
    /// `none`, `product`, or `variant`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_tracking: Option<String>,
    /// Flat shipping charge that overrides the store's rates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_cost_shipping_price: Option<f64>,
    /// Whether shipping is free.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free_shipping: Option<bool>,
    /// Whether the product shows on the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    /// Whether the product is featured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    /// Related product IDs; `[-1]` asks the store to pick them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_products: Option<Vec<i64>>,
    /// Warranty text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,
    /// Warehouse bin location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_picking_number: Option<String>,
    /// Storefront template file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_file: Option<String>,
    /// Universal product code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    /// Manufacturer part number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,
    /// Global trade item number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    /// Comma-separated terms for storefront search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<String>,
    /// `available`, `disabled`, or `preorder`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    /// Text shown next to the availability status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_description: Option<String>,
    /// `any`, `none`, or `list`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_wrapping_options_type: Option<String>,
    /// Position in listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    /// `New`, `Used`, or `Refurbished`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Whether the condition shows on the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_condition_shown: Option<bool>,
    /// Minimum quantity per order, `0` for none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_quantity_minimum: Option<u32>,
    /// Maximum quantity per order, `0` for none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_quantity_maximum: Option<u32>,
    /// Storefront page title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    /// SEO meta keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<Vec<String>>,
    /// SEO meta description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// When the product was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the product was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,
    /// Storefront page views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    /// Release date for pre-orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preorder_release_date: Option<DateTime<Utc>>,
    /// Message shown while on pre-order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preorder_message: Option<String>,
    /// Whether the product can only be pre-ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_preorder_only: Option<bool>,
    /// Whether the price is hidden on the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_price_hidden: Option<bool>,
    /// Text shown in place of a hidden price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_hidden_label: Option<String>,
    /// Storefront URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<CustomUrl>,
    /// Variant that carries the product's own SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_variant_id: Option<u64>,
    /// Open Graph object type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_type: Option<String>,
    /// Open Graph title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_title: Option<String>,
    /// Open Graph description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_description: Option<String>,
    /// Images, when included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,
    /// Videos, when included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<ProductVideo>>,
    /// Custom fields, when included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomField>>,
    /// Bulk pricing rules, when included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_pricing_rules: Option<Vec<PricingRule>>,
    /// Variants, when included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,
    /// Variant options, when included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,
    /// Modifiers, when included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<Modifier>>,
    /// Reviews, when included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    /// Complex rules, when included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complex_rules: Option<Vec<ComplexRule>>,
}

impl RestResource for Product {
    const NAME: &'static str = "Product";
    const PATHS: &'static [ResourcePath] = &crud_paths(
        &[],
        "catalog/products",
        &["id"],
        "catalog/products/{id}",
    );
}

/// Products in the catalog.
#[derive(Debug, Clone, Copy)]
pub struct ProductService<'a> {
    client: &'a HttpClient,
}

impl<'a> ProductService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists products matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<Product>>, ResourceError> {
        Product::list(self.client, &path_ids([]), params).await
    }

    /// Fetches one product. `params` usually carries `include`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(
        &self,
        id: u64,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Product>, ResourceError> {
        Product::get(self.client, &path_ids([("id", id)]), params).await
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(&self, product: &Product) -> Result<Envelope<Product>, ResourceError> {
        Product::create(self.client, &path_ids([]), product).await
    }

    /// Updates product `id` with the fields set on `product`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update(
        &self,
        id: u64,
        product: &Product,
    ) -> Result<Envelope<Product>, ResourceError> {
        Product::update(self.client, &path_ids([("id", id)]), product).await
    }

    /// Deletes product `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        Product::delete(self.client, &path_ids([("id", id)])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{get_path, ResourceOperation};
    use serde_json::json;

    #[test]
    fn test_new_product_serializes_required_fields_only() {
        let product = Product {
            name: "Wooden Train".to_string(),
            product_type: ProductType::Physical,
            weight: 1.5,
            price: 24.99,
            categories: Some(vec![3, 7]),
            ..Default::default()
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "Wooden Train",
                "type": "physical",
                "weight": 1.5,
                "price": 24.99,
                "categories": [3, 7]
            })
        );
    }

    #[test]
    fn test_product_deserializes_server_copy() {
        let product: Product = serde_json::from_value(json!({
            "id": 111,
            "name": "Ebook",
            "type": "digital",
            "weight": 0,
            "price": 9.5,
            "inventory_tracking": "none",
            "date_created": "2024-03-01T10:00:00+00:00",
            "custom_url": {"url": "/ebook/", "is_customized": false},
            "variants": [{"id": 5, "product_id": 111, "sku": "EB-1"}]
        }))
        .unwrap();

        assert_eq!(product.id, Some(111));
        assert_eq!(product.product_type, ProductType::Digital);
        assert_eq!(product.custom_url.unwrap().url, "/ebook/");
        assert_eq!(product.variants.unwrap()[0].sku.as_deref(), Some("EB-1"));
        assert_eq!(
            product.date_created.unwrap().to_rfc3339(),
            "2024-03-01T10:00:00+00:00"
        );
    }

    #[test]
    fn test_product_paths() {
        let list = get_path(Product::PATHS, ResourceOperation::List, &[]).unwrap();
        assert_eq!(list.template, "catalog/products");

        let get = get_path(Product::PATHS, ResourceOperation::Get, &["id"]).unwrap();
        assert_eq!(get.template, "catalog/products/{id}");

        assert!(get_path(Product::PATHS, ResourceOperation::Update, &[]).is_none());
    }
}
