//! Types shared by several catalog records.

use serde::{Deserialize, Serialize};

/// A storefront URL for a product, category, or brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomUrl {
    /// Path relative to the storefront root, e.g. `/toys/`.
    pub url: String,
    /// `false` when the store generated the URL itself.
    #[serde(default)]
    pub is_customized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_custom_url_defaults_is_customized() {
        let url: CustomUrl = serde_json::from_value(json!({"url": "/toys/"})).unwrap();
        assert_eq!(url.url, "/toys/");
        assert!(!url.is_customized);
    }
}
