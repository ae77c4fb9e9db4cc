//! REST resource infrastructure for the catalog API.
//!
//! - **[`RestResource`]**: list/get/create/update/delete for any record with path templates
//! - **[`QueryParams`]**: filters, sorting, and pagination encoded as query parameters
//! - **[`Envelope<T>`]**: the `{data, meta}` wrapper every endpoint returns
//! - **Path building**: [`ResourcePath`], [`get_path`], [`build_path`]
//! - **[`ResourceError`]**: error type for resource operations
//! - **[`resources`]**: the typed records and services
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{QueryParams, SortDirection};
//!
//! let params = QueryParams {
//!     is_visible: Some(true),
//!     sort: "name".to_string(),
//!     direction: Some(SortDirection::Asc),
//!     ..QueryParams::paged(1, 50)
//! };
//!
//! let mut page = client.products().list(Some(&params)).await?;
//! for product in page.iter() {
//!     println!("{}: {}", product.id.unwrap_or_default(), product.name);
//! }
//!
//! while let Some(next) = page.next_page_query() {
//!     page = client.products().list(Some(&QueryParams { is_visible: Some(true), ..next })).await?;
//! }
//! ```

mod errors;
mod path;
mod query;
mod resource;
mod response;

pub mod resources;

pub use errors::ResourceError;
pub use path::{build_path, crud_paths, get_path, ResourceOperation, ResourcePath};
pub use query::{QueryParams, SortDirection};
pub use resource::{PathIds, RestResource};
pub use response::{Envelope, Meta, Pagination, PaginationLinks};
