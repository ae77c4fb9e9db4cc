//! The [`BigCommerceClient`] facade.

use crate::clients::{HttpClient, HttpError};
use crate::config::BigCommerceConfig;
use crate::rest::resources::v3::{
    BatchService, BrandService, BulkPricingRuleService, CategoryService, ChannelService,
    ComplexRuleService, CustomFieldService, InventoryService, MetafieldService, ModifierService,
    OptionService, PricingService, ProductCategoryService, ProductChannelService,
    ProductImageService, ProductService, ProductVideoService, RelatedProductService,
    ReviewService, SummaryService, VariantService,
};

/// Typed client for one store's catalog.
///
/// Owns a single [`HttpClient`]; every accessor hands out a service that
/// borrows it, so services are free to create and drop.
///
/// # Thread Safety
///
/// `BigCommerceClient` is `Send + Sync`. Share it behind an `Arc` to use it
/// from several tasks; no locking is involved.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::{AuthToken, BigCommerceClient, BigCommerceConfig, StoreHash};
/// use bigcommerce_api::rest::resources::Category;
///
/// let config = BigCommerceConfig::builder()
///     .store_hash(StoreHash::new("abc123")?)
///     .auth_token(AuthToken::new(std::env::var("BIGCOMMERCE_AUTH_TOKEN")?)?)
///     .build()?;
/// let client = BigCommerceClient::new(&config)?;
///
/// let toys = Category { name: "Toys".into(), ..Default::default() };
/// let created = client.categories().create(&toys).await?;
/// println!("created category {}", created.id.unwrap_or_default());
/// ```
#[derive(Debug)]
pub struct BigCommerceClient {
    http: HttpClient,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerceClient>();
};

impl BigCommerceClient {
    /// Creates a client for the configured store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the base URL or the HTTP client cannot be built.
    pub fn new(config: &BigCommerceConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying transport, for endpoints without a service.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Products.
    #[must_use]
    pub const fn products(&self) -> ProductService<'_> {
        ProductService::new(&self.http)
    }

    /// Categories.
    #[must_use]
    pub const fn categories(&self) -> CategoryService<'_> {
        CategoryService::new(&self.http)
    }

    /// Brands.
    #[must_use]
    pub const fn brands(&self) -> BrandService<'_> {
        BrandService::new(&self.http)
    }

    /// Sales channels.
    #[must_use]
    pub const fn channels(&self) -> ChannelService<'_> {
        ChannelService::new(&self.http)
    }

    /// Product variants.
    #[must_use]
    pub const fn variants(&self) -> VariantService<'_> {
        VariantService::new(&self.http)
    }

    /// Product images.
    #[must_use]
    pub const fn product_images(&self) -> ProductImageService<'_> {
        ProductImageService::new(&self.http)
    }

    /// Product videos.
    #[must_use]
    pub const fn product_videos(&self) -> ProductVideoService<'_> {
        ProductVideoService::new(&self.http)
    }

    /// Options and option values.
    #[must_use]
    pub const fn options(&self) -> OptionService<'_> {
        OptionService::new(&self.http)
    }

    /// Modifiers and modifier values.
    #[must_use]
    pub const fn modifiers(&self) -> ModifierService<'_> {
        ModifierService::new(&self.http)
    }

    /// Product reviews.
    #[must_use]
    pub const fn reviews(&self) -> ReviewService<'_> {
        ReviewService::new(&self.http)
    }

    /// Complex rules of products.
    #[must_use]
    pub const fn complex_rules(&self) -> ComplexRuleService<'_> {
        ComplexRuleService::new(&self.http)
    }

    /// Custom fields of products.
    #[must_use]
    pub const fn custom_fields(&self) -> CustomFieldService<'_> {
        CustomFieldService::new(&self.http)
    }

    /// Bulk pricing rules of products.
    #[must_use]
    pub const fn bulk_pricing_rules(&self) -> BulkPricingRuleService<'_> {
        BulkPricingRuleService::new(&self.http)
    }

    /// Metafields of any catalog record.
    #[must_use]
    pub const fn metafields(&self) -> MetafieldService<'_> {
        MetafieldService::new(&self.http)
    }

    /// Per-product summaries.
    #[must_use]
    pub const fn summary(&self) -> SummaryService<'_> {
        SummaryService::new(&self.http)
    }

    /// Related products.
    #[must_use]
    pub const fn related_products(&self) -> RelatedProductService<'_> {
        RelatedProductService::new(&self.http)
    }

    /// Channel assignments of products.
    #[must_use]
    pub const fn product_channels(&self) -> ProductChannelService<'_> {
        ProductChannelService::new(&self.http)
    }

    /// Category assignments of products.
    #[must_use]
    pub const fn product_categories(&self) -> ProductCategoryService<'_> {
        ProductCategoryService::new(&self.http)
    }

    /// Batch product create, update, and delete.
    #[must_use]
    pub const fn batch(&self) -> BatchService<'_> {
        BatchService::new(&self.http)
    }

    /// Price calculation.
    #[must_use]
    pub const fn pricing(&self) -> PricingService<'_> {
        PricingService::new(&self.http)
    }

    /// Aggregated inventory.
    #[must_use]
    pub const fn inventory(&self) -> InventoryService<'_> {
        InventoryService::new(&self.http)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthToken, StoreHash};

    #[test]
    fn test_client_exposes_transport() {
        let config = BigCommerceConfig::builder()
            .store_hash(StoreHash::new("abc123").unwrap())
            .auth_token(AuthToken::new("token").unwrap())
            .build()
            .unwrap();
        let client = BigCommerceClient::new(&config).unwrap();

        assert_eq!(
            client.http().base_url().as_str(),
            "https://api.bigcommerce.com/stores/abc123/v3/"
        );
        let _ = client.products();
        let _ = client.inventory();
    }
}
