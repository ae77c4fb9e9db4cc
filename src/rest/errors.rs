//! Error type for resource operations.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::ResourceError;
//!
//! match client.products().get(123, None).await {
//!     Ok(product) => println!("Found: {}", product.name),
//!     Err(e) if e.is_not_found() => println!("no product 123"),
//!     Err(e) => match e.api_error() {
//!         Some(api) => println!("{} {}: {:?}", api.status, api.title, api.errors),
//!         None => println!("request failed: {e}"),
//!     },
//! }
//! ```

use crate::clients::{ApiError, HttpError};
use thiserror::Error;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No path template matches the operation and the identifiers supplied.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The resource name.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// The request failed in transport or was rejected by the API.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns the API error, if the server rejected the request.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Http(e) => e.api_error(),
            Self::PathResolutionFailed { .. } => None,
        }
    }

    /// Returns the HTTP status, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::PathResolutionFailed { .. } => None,
        }
    }

    /// Returns `true` when the API answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;

    fn api_error(status: u16) -> ResourceError {
        HttpError::Api(ApiError {
            method: HttpMethod::Get,
            url: "https://api.bigcommerce.com/stores/abc/v3/catalog/products/9".to_string(),
            status,
            title: "The requested resource was not found".to_string(),
            error_type: String::new(),
            errors: Vec::new(),
        })
        .into()
    }

    #[test]
    fn test_path_resolution_failed_message() {
        let error = ResourceError::PathResolutionFailed {
            resource: "Variant",
            operation: "get",
        };
        assert_eq!(
            error.to_string(),
            "Cannot resolve path for Variant::get with provided IDs"
        );
        assert!(error.api_error().is_none());
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_api_error_is_exposed() {
        let error = api_error(404);
        assert_eq!(error.status(), Some(404));
        assert!(error.is_not_found());
        assert_eq!(
            error.api_error().unwrap().title,
            "The requested resource was not found"
        );
    }

    #[test]
    fn test_http_error_display_is_transparent() {
        let error = api_error(500);
        assert!(!error.is_not_found());
        assert!(error.to_string().starts_with("GET https://"));
    }
}
