//! Configuration types for the BigCommerce API client.
//!
//! # Overview
//!
//! - [`BigCommerceConfig`]: everything needed to talk to one store
//! - [`BigCommerceConfigBuilder`]: builder for [`BigCommerceConfig`]
//! - [`StoreHash`], [`AuthToken`], [`ApiRoot`]: validated newtypes
//! - [`ApiVersion`]: the version path segment
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{BigCommerceConfig, StoreHash, AuthToken};
//!
//! let config = BigCommerceConfig::builder()
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .auth_token(AuthToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_root().as_ref(), "https://api.bigcommerce.com");
//! ```

mod newtypes;
mod version;

use std::time::Duration;

use reqwest::header::HeaderValue;

pub use newtypes::{ApiRoot, AuthToken, StoreHash};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a single BigCommerce store.
///
/// `BigCommerceConfig` is `Clone`, `Send`, and `Sync`. It is an ordinary
/// value; there is no process-wide configuration.
#[derive(Clone, Debug)]
pub struct BigCommerceConfig {
    store_hash: StoreHash,
    auth_token: AuthToken,
    api_root: ApiRoot,
    api_version: ApiVersion,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl BigCommerceConfig {
    /// Creates a new builder for constructing a `BigCommerceConfig`.
    #[must_use]
    pub fn builder() -> BigCommerceConfigBuilder {
        BigCommerceConfigBuilder::new()
    }

    /// Returns the store hash.
    #[must_use]
    pub const fn store_hash(&self) -> &StoreHash {
        &self.store_hash
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the API root URL.
    #[must_use]
    pub const fn api_root(&self) -> &ApiRoot {
        &self.api_root
    }

    /// Returns the API version segment.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerceConfig>();
};

/// Builder for [`BigCommerceConfig`].
///
/// `store_hash` and `auth_token` are required.
///
/// # Defaults
///
/// - `api_root`: `https://api.bigcommerce.com`
/// - `api_version`: [`ApiVersion::V3`]
/// - `timeout`: 30 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct BigCommerceConfigBuilder {
    store_hash: Option<StoreHash>,
    auth_token: Option<AuthToken>,
    api_root: Option<ApiRoot>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl BigCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store hash (required).
    #[must_use]
    pub fn store_hash(mut self, hash: StoreHash) -> Self {
        self.store_hash = Some(hash);
        self
    }

    /// Sets the auth token (required).
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Overrides the API root URL.
    #[must_use]
    pub fn api_root(mut self, root: ApiRoot) -> Self {
        self.api_root = Some(root);
        self
    }

    /// Sets the API version segment.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`BigCommerceConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_hash` or
    /// `auth_token` are not set, and [`ConfigError::InvalidHeaderValue`] if
    /// the `User-Agent` prefix cannot be sent as a header.
    pub fn build(self) -> Result<BigCommerceConfig, ConfigError> {
        let store_hash = self.store_hash.ok_or(ConfigError::MissingRequiredField {
            field: "store_hash",
        })?;
        let auth_token = self.auth_token.ok_or(ConfigError::MissingRequiredField {
            field: "auth_token",
        })?;

        if let Some(prefix) = &self.user_agent_prefix {
            if HeaderValue::from_str(prefix).is_err() {
                return Err(ConfigError::InvalidHeaderValue {
                    field: "user_agent_prefix",
                });
            }
        }

        Ok(BigCommerceConfig {
            store_hash,
            auth_token,
            api_root: self.api_root.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
