//! The `{data, meta}` response envelope.
//!
//! Every catalog endpoint wraps its payload as `{"data": ..., "meta": ...}`.
//! [`Envelope<T>`] decodes that shape and implements `Deref<Target = T>`, so
//! the payload can be used directly:
//!
//! ```rust
//! use bigcommerce_api::rest::Envelope;
//!
//! let envelope: Envelope<Vec<u32>> = serde_json::from_str(
//!     r#"{"data":[1,2,3],"meta":{"pagination":{"total":9,"count":3,"per_page":3,"current_page":1,"total_pages":3}}}"#,
//! ).unwrap();
//!
//! assert_eq!(envelope.len(), 3);
//! assert_eq!(envelope.next_page(), Some(2));
//! ```
//!
//! Pagination is left to the caller: read [`Envelope::next_page_query`] and
//! issue the next request.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::rest::QueryParams;

/// Links to neighbouring pages, as query strings (e.g. `?page=2&limit=50`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationLinks {
    /// Link to the current page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    /// Link to the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    /// Link to the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Pagination counters for collection responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Total number of items across all pages.
    pub total: u64,
    /// Number of items on this page.
    pub count: u64,
    /// Page size.
    pub per_page: u32,
    /// 1-based page number.
    pub current_page: u32,
    /// Number of pages.
    pub total_pages: u32,
    /// Page links.
    pub links: PaginationLinks,
}

/// Response metadata. Missing fields decode to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    /// Pagination counters; all zero for single-record responses.
    pub pagination: Pagination,
}

/// A decoded `{data, meta}` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The payload.
    pub data: T,
    /// Response metadata.
    #[serde(default)]
    pub meta: Meta,
}

impl<T> Envelope<T> {
    /// Wraps `data` with empty metadata.
    #[must_use]
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Meta::default(),
        }
    }

    /// Consumes the envelope and returns the payload.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns the pagination counters.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.meta.pagination
    }

    /// Returns `true` if the server reports another page after this one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        let pagination = self.pagination();
        pagination
            .links
            .next
            .as_deref()
            .is_some_and(|next| !next.is_empty())
            || pagination.current_page < pagination.total_pages
    }

    /// Returns the number of the next page, if there is one.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.has_next_page()
            .then(|| self.pagination().current_page.saturating_add(1))
    }

    /// Returns query parameters for the next page with the same page size.
    #[must_use]
    pub fn next_page_query(&self) -> Option<QueryParams> {
        self.next_page()
            .map(|page| QueryParams::paged(page, self.pagination().per_page))
    }

    /// Maps the payload to a new type, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        Envelope {
            data: f(self.data),
            meta: self.meta,
        }
    }
}

impl<T> Deref for Envelope<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for Envelope<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Envelope<Vec<String>>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_meta_decodes_to_defaults() {
        let envelope: Envelope<String> = serde_json::from_value(json!({"data": "x"})).unwrap();
        assert_eq!(envelope.meta, Meta::default());
        assert!(!envelope.has_next_page());
        assert_eq!(envelope.next_page(), None);
    }

    #[test]
    fn test_empty_pagination_decodes_to_defaults() {
        let envelope: Envelope<u8> =
            serde_json::from_value(json!({"data": 1, "meta": {"pagination": {}}})).unwrap();
        assert_eq!(envelope.pagination(), &Pagination::default());
    }

    #[test]
    fn test_next_page_from_counters() {
        let envelope: Envelope<Vec<u8>> = serde_json::from_value(json!({
            "data": [],
            "meta": {"pagination": {"total": 120, "count": 50, "per_page": 50, "current_page": 2, "total_pages": 3}}
        }))
        .unwrap();

        assert!(envelope.has_next_page());
        assert_eq!(envelope.next_page(), Some(3));
        assert_eq!(envelope.next_page_query(), Some(QueryParams::paged(3, 50)));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let envelope: Envelope<Vec<u8>> = serde_json::from_value(json!({
            "data": [],
            "meta": {"pagination": {"per_page": 50, "current_page": 3, "total_pages": 3,
                     "links": {"previous": "?page=2&limit=50", "current": "?page=3&limit=50"}}}
        }))
        .unwrap();

        assert!(!envelope.has_next_page());
        assert_eq!(
            envelope.pagination().links.previous.as_deref(),
            Some("?page=2&limit=50")
        );
    }

    #[test]
    fn test_next_link_alone_signals_more_pages() {
        let envelope: Envelope<Vec<u8>> = serde_json::from_value(json!({
            "data": [],
            "meta": {"pagination": {"current_page": 1, "links": {"next": "?page=2&limit=10"}}}
        }))
        .unwrap();
        assert_eq!(envelope.next_page(), Some(2));
    }

    #[test]
    fn test_deref_and_map() {
        let mut envelope = Envelope::new(vec![1, 2]);
        envelope.push(3);
        assert_eq!(envelope.len(), 3);

        let total = envelope.map(|v| v.iter().sum::<i32>());
        assert_eq!(total.into_inner(), 6);
    }
}
