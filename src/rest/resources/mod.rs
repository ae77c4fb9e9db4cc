//! Typed catalog resources, organized by API version.
//!
//! ```text
//! resources/
//!   mod.rs     <- this file (re-exports the current version)
//!   v3/
//!     mod.rs   <- records and services for the v3 API
//! ```
//!
//! The current version is re-exported here:
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::resources::Product;      // current version
//! use bigcommerce_api::rest::resources::v3::Product;  // explicit
//! ```
//!
//! Each record implements [`RestResource`](crate::rest::RestResource) and has a
//! matching service that takes plain numeric identifiers:
//!
//! ```rust,ignore
//! let variants = client.variants().list(77, None).await?;
//! let variant = client.variants().get(77, variants[0].id.unwrap_or_default()).await?;
//! ```

pub mod v3;

pub use v3::*;

use crate::rest::PathIds;

/// Builds path identifiers from numeric `(placeholder, value)` pairs.
pub(crate) fn path_ids<const N: usize>(pairs: [(&'static str, u64); N]) -> PathIds<'static> {
    pairs
        .into_iter()
        .map(|(name, value)| (name, value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_ids_formats_values() {
        let ids = path_ids([("product_id", 77), ("id", 5)]);
        assert_eq!(ids.len(), 2);
        assert_eq!(ids["product_id"], "77");
        assert_eq!(ids["id"], "5");
    }

    #[test]
    fn test_path_ids_empty() {
        assert!(path_ids([]).is_empty());
    }
}
