//! # BigCommerce API Rust SDK
//!
//! A typed async client for the BigCommerce v3 catalog API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`BigCommerceConfig`] and [`BigCommerceConfigBuilder`]
//! - Validated newtypes for the store hash, auth token, and API root
//! - An async HTTP transport that decodes `{data, meta}` envelopes and
//!   surfaces API errors with their status, title, and details
//! - A table-driven query parameter encoder for filters, sorting, and paging
//! - Typed records and services for products, categories, brands, variants,
//!   options, modifiers, reviews, pricing, inventory, and more
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcommerce_api::{AuthToken, BigCommerceClient, BigCommerceConfig, StoreHash};
//!
//! let config = BigCommerceConfig::builder()
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .auth_token(AuthToken::new("your-api-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = BigCommerceClient::new(&config).unwrap();
//! ```
//!
//! ## Listing With Filters
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{QueryParams, SortDirection};
//!
//! let params = QueryParams {
//!     category_id: vec![18],
//!     is_visible: Some(true),
//!     sort: "price".to_string(),
//!     direction: Some(SortDirection::Desc),
//!     include: vec!["variants".to_string(), "images".to_string()],
//!     ..QueryParams::paged(1, 50)
//! };
//!
//! let page = client.products().list(Some(&params)).await?;
//! println!("{} of {}", page.len(), page.pagination().total);
//! ```
//!
//! ## Handling Errors
//!
//! ```rust,ignore
//! match client.products().create(&product).await {
//!     Ok(created) => println!("id {}", created.id.unwrap_or_default()),
//!     Err(e) => match e.api_error() {
//!         Some(api) if api.status == 422 => eprintln!("invalid: {:?}", api.errors),
//!         _ => return Err(e.into()),
//!     },
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is a value, passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: the client is `Send + Sync` and needs no locking
//! - **One request per call**: no retries, caching, or automatic paging

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use config::{
    ApiRoot, ApiVersion, AuthToken, BigCommerceConfig, BigCommerceConfigBuilder, StoreHash,
};
pub use error::ConfigError;

pub use clients::{ApiError, BigCommerceClient, HttpClient, HttpError, HttpMethod, HttpRequest};

pub use rest::{Envelope, QueryParams, ResourceError, SortDirection};
