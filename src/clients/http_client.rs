//! Authenticated HTTP transport for a single store.
//!
//! [`HttpClient`] owns the resolved base URL, the default headers, and a
//! pooled `reqwest` client. Every service call goes through exactly one of
//! [`decode_into`](HttpClient::decode_into), [`copy_raw_bytes`](HttpClient::copy_raw_bytes),
//! or [`execute`](HttpClient::execute).

use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::clients::errors::{ApiError, HttpError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::config::BigCommerceConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

const JSON: &str = "application/json";

/// HTTP client for one store's API.
///
/// The base URL is `<api root>/stores/<store hash>/<version>/` and is fixed
/// at construction. Every request carries `X-Auth-Token`, `User-Agent`,
/// `Content-Type: application/json`, and `Accept: application/json`.
///
/// There is no retry or rate-limit handling: each call is one exchange.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and can be shared across tasks without locking.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{BigCommerceConfig, StoreHash, AuthToken};
/// use bigcommerce_api::clients::HttpClient;
///
/// let config = BigCommerceConfig::builder()
///     .store_hash(StoreHash::new("abc123").unwrap())
///     .auth_token(AuthToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config).unwrap();
/// assert_eq!(
///     client.base_url().as_str(),
///     "https://api.bigcommerce.com/stores/abc123/v3/"
/// );
/// ```
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
    default_headers: HashMap<String, String>,
}

// Headers carry the auth token.
impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for the configured store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Url`] if the base URL cannot be assembled and
    /// [`HttpError::Transport`] if the TLS backend fails to initialize.
    pub fn new(config: &BigCommerceConfig) -> Result<Self, HttpError> {
        let base = format!(
            "{}/stores/{}/{}/",
            config.api_root().as_ref(),
            config.store_hash(),
            config.api_version()
        );
        let base_url = Url::parse(&base).map_err(|source| HttpError::Url { path: base, source })?;

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}bigcommerce-api-rust/{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert(
            "X-Auth-Token".to_string(),
            config.auth_token().as_ref().to_string(),
        );
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Content-Type".to_string(), JSON.to_string());
        default_headers.insert("Accept".to_string(), JSON.to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url,
            default_headers,
        })
    }

    /// Returns the versioned base URL all paths are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds a body-less request for `path` relative to the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Url`] if the path cannot be resolved.
    pub fn build_request(&self, method: HttpMethod, path: &str) -> Result<HttpRequest, HttpError> {
        Ok(HttpRequest::new(method, self.resolve(path)?, None))
    }

    /// Builds a request whose body is `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Url`] if the path cannot be resolved and
    /// [`HttpError::Encoding`] if the body cannot be serialized.
    pub fn build_request_with_body<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<HttpRequest, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.resolve(path)?;
        let body = serde_json::to_vec(body).map_err(HttpError::Encoding)?;
        Ok(HttpRequest::new(method, url, Some(body)))
    }

    /// Sends `request` and decodes a 2xx JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] for non-2xx responses, [`HttpError::Decoding`]
    /// when a body does not match `T` or is not a valid error object, and
    /// [`HttpError::Transport`] for network failures.
    pub async fn decode_into<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<T, HttpError> {
        let method = request.method();
        let url = request.url().to_string();
        let response = self.send(request).await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(|source| HttpError::Decoding {
            method,
            url,
            status,
            source,
        })
    }

    /// Sends `request` and copies a 2xx body into `sink` without decoding it.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// As [`decode_into`](Self::decode_into), plus [`HttpError::Sink`] when
    /// writing to `sink` fails.
    pub async fn copy_raw_bytes<W>(&self, request: HttpRequest, sink: &mut W) -> Result<u64, HttpError>
    where
        W: Write + ?Sized,
    {
        let mut response = self.send(request).await?;
        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await? {
            sink.write_all(&chunk)?;
            written += chunk.len() as u64;
        }
        sink.flush()?;
        Ok(written)
    }

    /// Sends `request` and discards a 2xx body.
    ///
    /// # Errors
    ///
    /// As [`decode_into`](Self::decode_into), without the body decoding step.
    pub async fn execute(&self, request: HttpRequest) -> Result<(), HttpError> {
        let response = self.send(request).await?;
        response.bytes().await?;
        Ok(())
    }

    fn resolve(&self, path: &str) -> Result<Url, HttpError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| HttpError::Url {
                path: path.to_string(),
                source,
            })
    }

    /// Dispatches the request, turning any non-2xx status into an error.
    async fn send(&self, request: HttpRequest) -> Result<reqwest::Response, HttpError> {
        let (method, url, body) = request.into_parts();
        tracing::debug!(%method, %url, "sending request");

        let mut req_builder = self.client.request(method.into(), url.clone());
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = body {
            req_builder = req_builder.body(body);
        }

        let response = req_builder.send().await?;
        let status = response.status();
        tracing::debug!(%method, %url, status = status.as_u16(), "received response");

        if status.is_success() {
            return Ok(response);
        }

        let bytes = response.bytes().await?;
        let url = url.to_string();
        let status = status.as_u16();
        match ApiError::from_body(method, url.clone(), status, &bytes) {
            Ok(api_error) => Err(HttpError::Api(api_error)),
            Err(source) => Err(HttpError::Decoding {
                method,
                url,
                status,
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiRoot, AuthToken, StoreHash};

    fn config() -> BigCommerceConfig {
        BigCommerceConfig::builder()
            .store_hash(StoreHash::new("abc123").unwrap())
            .auth_token(AuthToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_base_url_is_derived_from_config() {
        let client = HttpClient::new(&config()).unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://api.bigcommerce.com/stores/abc123/v3/"
        );
    }

    #[test]
    fn test_base_url_honours_api_root_override() {
        let config = BigCommerceConfig::builder()
            .store_hash(StoreHash::new("abc123").unwrap())
            .auth_token(AuthToken::new("test-token").unwrap())
            .api_root(ApiRoot::new("http://127.0.0.1:4010/").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "http://127.0.0.1:4010/stores/abc123/v3/"
        );
    }

    #[test]
    fn test_default_headers() {
        let client = HttpClient::new(&config()).unwrap();
        let headers = client.default_headers();

        assert_eq!(headers.get("X-Auth-Token"), Some(&"test-token".to_string()));
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert!(headers
            .get("User-Agent")
            .unwrap()
            .starts_with("bigcommerce-api-rust/"));
    }

    #[test]
    fn test_debug_hides_auth_token() {
        let client = HttpClient::new(&config()).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("stores/abc123/v3"));
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = BigCommerceConfig::builder()
            .store_hash(StoreHash::new("abc123").unwrap())
            .auth_token(AuthToken::new("test-token").unwrap())
            .user_agent_prefix("Seeder/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert_eq!(user_agent, &format!("Seeder/1.0 | bigcommerce-api-rust/{SDK_VERSION}"));
    }

    #[test]
    fn test_build_request_resolves_relative_path() {
        let client = HttpClient::new(&config()).unwrap();
        let request = client
            .build_request(HttpMethod::Get, "catalog/products/7/variants")
            .unwrap();

        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(
            request.url().as_str(),
            "https://api.bigcommerce.com/stores/abc123/v3/catalog/products/7/variants"
        );
        assert!(request.body().is_none());
    }

    #[test]
    fn test_build_request_ignores_leading_slash() {
        let client = HttpClient::new(&config()).unwrap();
        let request = client.build_request(HttpMethod::Get, "/channels").unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://api.bigcommerce.com/stores/abc123/v3/channels"
        );
    }

    #[test]
    fn test_build_request_with_body_serializes_json() {
        let client = HttpClient::new(&config()).unwrap();
        let request = client
            .build_request_with_body(
                HttpMethod::Post,
                "catalog/categories",
                &serde_json::json!({"name": "Toys", "parent_id": 0}),
            )
            .unwrap();

        let body: serde_json::Value = serde_json::from_slice(request.body().unwrap()).unwrap();
        assert_eq!(body["name"], "Toys");
        assert_eq!(body["parent_id"], 0);
    }

    #[test]
    fn test_build_request_with_unserializable_body_fails() {
        let client = HttpClient::new(&config()).unwrap();
        let mut bad = HashMap::new();
        bad.insert(vec![1u8], "non-string keys are not valid JSON");

        let result = client.build_request_with_body(HttpMethod::Post, "catalog/products", &bad);
        assert!(matches!(result, Err(HttpError::Encoding(_))));
    }
}
