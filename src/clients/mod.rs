//! HTTP client types for BigCommerce API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: builds and sends authenticated requests for one store
//! - [`HttpRequest`]: a resolved request, optionally with a JSON body and query
//! - [`HttpMethod`]: GET, POST, PUT, DELETE
//! - [`HttpError`] / [`ApiError`]: transport and API failures
//! - [`BigCommerceClient`]: facade handing out typed resource services
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::{HttpClient, HttpMethod};
//! use bigcommerce_api::rest::{Envelope, QueryParams};
//! use bigcommerce_api::rest::resources::v3::Product;
//!
//! let client = HttpClient::new(&config)?;
//! let request = client
//!     .build_request(HttpMethod::Get, "catalog/products")?
//!     .with_query(&QueryParams { limit: 10, ..Default::default() });
//!
//! let products: Envelope<Vec<Product>> = client.decode_into(request).await?;
//! ```

mod bigcommerce;
mod errors;
mod http_client;
mod http_request;

pub use bigcommerce::BigCommerceClient;
pub use errors::{ApiError, HttpError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest};
