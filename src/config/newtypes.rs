//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper checks its contents on construction, so a value that made it
//! into a [`BigCommerceConfig`](super::BigCommerceConfig) is known to be usable.

use crate::error::ConfigError;
use reqwest::header::HeaderValue;
use std::fmt;
use url::Url;

/// The hash identifying a BigCommerce store.
///
/// This is the `{store_hash}` segment of `https://api.bigcommerce.com/stores/{store_hash}/v3/`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::StoreHash;
///
/// let hash = StoreHash::new("abc123").unwrap();
/// assert_eq!(hash.as_ref(), "abc123");
/// assert!(StoreHash::new("abc/123").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoreHash(String);

impl StoreHash {
    /// Creates a new validated store hash.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreHash`] if the hash is empty or
    /// contains anything other than ASCII letters and digits.
    pub fn new(hash: impl Into<String>) -> Result<Self, ConfigError> {
        let hash = hash.into();
        let trimmed = hash.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidStoreHash { hash });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for StoreHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A store-level API account token, sent as `X-Auth-Token`.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AuthToken(*****)`, so configurations can be logged safely.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::AuthToken;
///
/// let token = AuthToken::new("secret-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty and
    /// [`ConfigError::InvalidHeaderValue`] if it cannot be sent as a header.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        if HeaderValue::from_str(&token).is_err() {
            return Err(ConfigError::InvalidHeaderValue {
                field: "auth_token",
            });
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// The root URL of the API host, without the `stores/...` suffix.
///
/// Defaults to `https://api.bigcommerce.com`. Overriding it is mainly
/// useful for pointing the client at a local mock server.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiRoot;
///
/// let root = ApiRoot::new("http://127.0.0.1:8080").unwrap();
/// assert_eq!(root.as_ref(), "http://127.0.0.1:8080");
/// assert!(ApiRoot::new("ftp://example.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRoot(String);

impl ApiRoot {
    /// The production API host.
    pub const DEFAULT: &'static str = "https://api.bigcommerce.com";

    /// Creates a new validated API root.
    ///
    /// Trailing slashes are removed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiRoot`] if the value does not parse as
    /// an absolute `http` or `https` URL with a host, or carries a query or
    /// fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        let parsed =
            Url::parse(trimmed).map_err(|_| ConfigError::InvalidApiRoot { url: url.clone() })?;
        if !matches!(parsed.scheme(), "http" | "https")
            || parsed.host_str().is_none()
            || parsed.query().is_some()
            || parsed.fragment().is_some()
        {
            return Err(ConfigError::InvalidApiRoot { url });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl Default for ApiRoot {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for ApiRoot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
