//! API version path segment.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// The API version segment placed after the store hash in every URL.
///
/// The catalog endpoints live under `v3`. `Custom` exists for other
/// `v<N>` segments without a library release.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiVersion;
///
/// assert_eq!(ApiVersion::default(), ApiVersion::V3);
/// assert_eq!(ApiVersion::V3.to_string(), "v3");
///
/// let version: ApiVersion = "V2".parse().unwrap();
/// assert_eq!(version, ApiVersion::Custom("v2".to_string()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// Version 3, the catalog API.
    #[default]
    V3,
    /// Any other `v<N>` segment.
    Custom(String),
}

impl ApiVersion {
    /// Returns `true` for versions this crate was written against.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::V3)
    }

    fn is_valid_segment(s: &str) -> bool {
        s.strip_prefix('v')
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V3 => f.write_str("v3"),
            Self::Custom(s) => f.write_str(s),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "v3" => Ok(Self::V3),
            _ if Self::is_valid_segment(&s) => Ok(Self::Custom(s)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_version() {
        assert_eq!("v3".parse::<ApiVersion>().unwrap(), ApiVersion::V3);
        assert_eq!(" V3 ".parse::<ApiVersion>().unwrap(), ApiVersion::V3);
    }

    #[test]
    fn test_parse_custom_version() {
        let version: ApiVersion = "v2".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("v2".to_string()));
        assert!(!version.is_known());
        assert_eq!(version.to_string(), "v2");
    }

    #[test]
    fn test_parse_rejects_malformed_segments() {
        for bad in ["", "v", "3", "v3/", "version3", "v3.1"] {
            assert!(
                matches!(
                    bad.parse::<ApiVersion>(),
                    Err(ConfigError::InvalidApiVersion { .. })
                ),
                "expected {bad:?} to be rejected"
            );
        }
    }
}
