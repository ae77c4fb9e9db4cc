//! HTTP request types.
//!
//! Requests are created by [`HttpClient::build_request`](super::HttpClient::build_request),
//! which resolves the path against the store's base URL, so an [`HttpRequest`]
//! always carries an absolute URL.

use std::fmt;

use url::Url;

use crate::rest::QueryParams;

/// HTTP methods used by the catalog API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A fully resolved request, ready to be executed by [`HttpClient`](super::HttpClient).
///
/// The body, when present, is already serialized JSON.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::clients::HttpMethod;
/// use bigcommerce_api::rest::QueryParams;
///
/// let params = QueryParams { limit: 50, ..Default::default() };
/// let request = client
///     .build_request(HttpMethod::Get, "catalog/products")?
///     .with_query(&params);
///
/// assert_eq!(request.url().query(), Some("limit=50"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    method: HttpMethod,
    url: Url,
    body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub(crate) const fn new(method: HttpMethod, url: Url, body: Option<Vec<u8>>) -> Self {
        Self { method, url, body }
    }

    /// Replaces the URL query with the encoded parameters.
    ///
    /// When no parameter encodes to anything, the URL has no query at all.
    #[must_use]
    pub fn with_query(mut self, params: &QueryParams) -> Self {
        let encoded = params.encode();
        if encoded.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.set_query(Some(&encoded));
        }
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the absolute request URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the serialized JSON body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub(crate) fn into_parts(self) -> (HttpMethod, Url, Option<Vec<u8>>) {
        (self.method, self.url, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> HttpRequest {
        let url = Url::parse("https://api.bigcommerce.com/stores/abc/v3/catalog/products?stale=1")
            .unwrap();
        HttpRequest::new(HttpMethod::Get, url, None)
    }

    #[test]
    fn test_method_display_is_uppercase() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_with_query_replaces_existing_query() {
        let params = QueryParams {
            page: 2,
            ..Default::default()
        };
        let request = request().with_query(&params);
        assert_eq!(request.url().query(), Some("page=2"));
    }

    #[test]
    fn test_with_empty_query_clears_query() {
        let request = request().with_query(&QueryParams::default());
        assert_eq!(request.url().query(), None);
        assert!(!request.url().as_str().contains('?'));
    }

    #[test]
    fn test_with_query_keeps_encoded_operators() {
        let params = QueryParams {
            id_in: vec![1, 2],
            ..Default::default()
        };
        let request = request().with_query(&params);
        assert_eq!(request.url().query(), Some("id%3Ain=1&id%3Ain=2"));
    }

    #[test]
    fn test_http_method_converts_to_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
    }
}
