//! Catalog API v3 records and services.
//!
//! # Catalog records
//!
//! | Record | Service | Path |
//! |---|---|---|
//! | [`Product`] | [`ProductService`] | `catalog/products` |
//! | [`Category`] | [`CategoryService`] | `catalog/categories` |
//! | [`Brand`] | [`BrandService`] | `catalog/brands` |
//! | [`Channel`] | [`ChannelService`] | `channels` |
//! | [`Metafield`] | [`MetafieldService`] | `catalog/{resource_type}/{resource_id}/metafields` |
//!
//! # Product sub-resources
//!
//! Everything below lives under `catalog/products/{product_id}`:
//!
//! | Record | Service | Path |
//! |---|---|---|
//! | [`Variant`] | [`VariantService`] | `variants` |
//! | [`ProductImage`] | [`ProductImageService`] | `images` |
//! | [`ProductVideo`] | [`ProductVideoService`] | `videos` |
//! | [`ProductOption`], [`OptionValue`] | [`OptionService`] | `options`, `options/{option_id}/values` |
//! | [`Modifier`], [`OptionValue`] | [`ModifierService`] | `modifiers`, `modifiers/{modifier_id}/values` |
//! | [`Review`] | [`ReviewService`] | `reviews` |
//! | [`ComplexRule`] | [`ComplexRuleService`] | `complex-rules` |
//! | [`CustomField`] | [`CustomFieldService`] | `custom-fields` |
//! | [`PricingRule`] | [`BulkPricingRuleService`] | `bulk-pricing-rules` |
//! | [`Summary`] | [`SummaryService`] | `summary` |
//! | [`ProductAggregatedInventory`] | [`InventoryService`] | `inventory` |
//! | - | [`RelatedProductService`] | `related` |
//! | [`ProductChannelAssignment`] | [`ProductChannelService`] | `channels` |
//! | [`CategoryAssignment`] | [`ProductCategoryService`] | `categories` |
//!
//! # Other endpoints
//!
//! - [`BatchService`]: create, update, and delete many products at once
//! - [`PricingService`]: price products and variants for a channel and customer

mod batch;
mod brand;
mod bulk_pricing;
mod category;
mod category_assignment;
mod channel;
mod channel_assignment;
mod common;
mod complex_rule;
mod custom_field;
mod image;
mod inventory;
mod metafield;
mod modifier;
mod option;
mod pricing;
mod product;
mod related;
mod review;
mod summary;
mod variant;
mod video;

pub use batch::{BatchError, BatchService};
pub use brand::{Brand, BrandService};
pub use bulk_pricing::{BulkPricingRuleService, PricingRule};
pub use category::{Category, CategoryService};
pub use category_assignment::{CategoryAssignment, ProductCategoryService};
pub use channel::{Channel, ChannelService};
pub use channel_assignment::{ProductChannelAssignment, ProductChannelService};
pub use common::CustomUrl;
pub use complex_rule::{ComplexRule, ComplexRuleService, RuleAdjuster, RuleCondition};
pub use custom_field::{CustomField, CustomFieldService};
pub use image::{ProductImage, ProductImageService};
pub use inventory::{InventoryService, ProductAggregatedInventory};
pub use metafield::{Metafield, MetafieldService};
pub use modifier::{Modifier, ModifierConfig, ModifierService};
pub use option::{OptionConfig, OptionService, OptionValue, ProductOption};
pub use pricing::{
    PricingAggregations, PricingContext, PricingData, PricingEntry, PricingFilters,
    PricingRequest, PricingService, PricingTier, RequestedAggregations,
};
pub use product::{Product, ProductService, ProductType};
pub use related::RelatedProductService;
pub use review::{Review, ReviewService};
pub use summary::{PrimaryImage, Summary, SummaryService};
pub use variant::{Variant, VariantService};
pub use video::{ProductVideo, ProductVideoService};
