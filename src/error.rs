//! Configuration error types.
//!
//! Every configuration constructor returns `Result<T, ConfigError>` so that
//! bad credentials or URLs are rejected before any request is sent.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{AuthToken, ConfigError};
//!
//! let result = AuthToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAuthToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Store hash is empty or contains characters other than ASCII letters and digits.
    #[error("Invalid store hash '{hash}'. Expected the alphanumeric hash from the store's API path (e.g., 'abc123xyz').")]
    InvalidStoreHash {
        /// The rejected store hash.
        hash: String,
    },

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide the X-Auth-Token of a store-level API account.")]
    EmptyAuthToken,

    /// A value sent as an HTTP header contains characters a header cannot carry.
    ///
    /// The offending value is not included, since it may be a secret.
    #[error("Invalid {field}: it contains characters that are not allowed in an HTTP header (control characters such as a trailing newline).")]
    InvalidHeaderValue {
        /// The configuration field holding the value.
        field: &'static str,
    },

    /// API root is not an absolute http(s) URL.
    #[error("Invalid API root '{url}'. Please provide an absolute http or https URL (e.g., 'https://api.bigcommerce.com').")]
    InvalidApiRoot {
        /// The rejected URL.
        url: String,
    },

    /// API version segment is invalid.
    #[error("Invalid API version '{version}'. Expected a path segment such as 'v3'.")]
    InvalidApiVersion {
        /// The rejected version string.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_auth_token_error_message() {
        let message = ConfigError::EmptyAuthToken.to_string();
        assert!(message.contains("Auth token cannot be empty"));
        assert!(message.contains("X-Auth-Token"));
    }

    #[test]
    fn test_invalid_store_hash_error_message() {
        let error = ConfigError::InvalidStoreHash {
            hash: "bad hash!".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad hash!"));
        assert!(message.contains("alphanumeric"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "store_hash",
        };
        let message = error.to_string();
        assert!(message.contains("store_hash"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_invalid_header_value_error_message() {
        let message = ConfigError::InvalidHeaderValue {
            field: "auth_token",
        }
        .to_string();
        assert!(message.contains("auth_token"));
        assert!(message.contains("HTTP header"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAuthToken;
        let _: &dyn std::error::Error = &error;
    }
}
