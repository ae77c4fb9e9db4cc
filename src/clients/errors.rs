//! Transport-level error types.
//!
//! - [`ApiError`]: the store answered with a non-2xx status
//! - [`HttpError`]: every way a single request/response exchange can fail
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::HttpError;
//!
//! match client.decode_into::<Envelope<Product>>(request).await {
//!     Ok(envelope) => println!("{}", envelope.data.name),
//!     Err(HttpError::Api(e)) if e.status == 404 => println!("no such product"),
//!     Err(HttpError::Transport(e)) => println!("network error, try again: {e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use crate::clients::http_request::HttpMethod;

/// A non-2xx response from the API.
///
/// `status` is the HTTP status of the response. `title`, `error_type`, and
/// `errors` come from the JSON error body and are empty when the body was
/// empty.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{method} {url}: {status} {title} - {errors:?}")]
pub struct ApiError {
    /// Method of the failed request.
    pub method: HttpMethod,
    /// Full URL of the failed request, including the query string.
    pub url: String,
    /// HTTP status code.
    pub status: u16,
    /// Short summary, e.g. `"Validation Failed"`.
    pub title: String,
    /// Documentation link or error category reported by the API.
    pub error_type: String,
    /// Detail messages, one per problem.
    pub errors: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    title: String,
    #[serde(rename = "type")]
    error_type: String,
    #[serde(deserialize_with = "flatten_error_details")]
    errors: Vec<String>,
}

/// Accepts `errors` as a list of strings, a map of field to message(s), or a
/// bare string.
fn flatten_error_details<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    fn text(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    let details = match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(text).collect(),
        Value::Object(fields) => fields
            .iter()
            .flat_map(|(field, messages)| match messages {
                Value::Array(items) => items
                    .iter()
                    .map(|m| format!("{field}: {}", text(m)))
                    .collect::<Vec<_>>(),
                other => vec![format!("{field}: {}", text(other))],
            })
            .collect(),
        other => vec![text(&other)],
    };
    Ok(details)
}

impl ApiError {
    /// Builds an `ApiError` from a raw error body.
    ///
    /// A blank body yields an error with empty title and details.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when a non-blank body is not a valid error object.
    pub(crate) fn from_body(
        method: HttpMethod,
        url: String,
        status: u16,
        body: &[u8],
    ) -> Result<Self, serde_json::Error> {
        let parsed = if body.iter().all(u8::is_ascii_whitespace) {
            ErrorBody::default()
        } else {
            serde_json::from_slice::<ErrorBody>(body)?
        };

        Ok(Self {
            method,
            url,
            status,
            title: parsed.title,
            error_type: parsed.error_type,
            errors: parsed.errors,
        })
    }
}

/// Every way a request can fail.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The relative path could not be joined onto the base URL.
    #[error("invalid request path '{path}': {source}")]
    Url {
        /// The offending path.
        path: String,
        /// Parser error.
        source: url::ParseError,
    },

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Connection, TLS, timeout, or body read failure.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A response body did not have the expected shape.
    #[error("failed to decode {method} {url} response (status {status}): {source}")]
    Decoding {
        /// Method of the request.
        method: HttpMethod,
        /// Full URL of the request.
        url: String,
        /// HTTP status of the response.
        status: u16,
        /// JSON error.
        source: serde_json::Error,
    },

    /// Writing raw response bytes to the caller's sink failed.
    #[error("failed to write response body: {0}")]
    Sink(#[from] std::io::Error),
}

impl HttpError {
    /// Returns the API error, if the server rejected the request.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            Self::Decoding { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://api.bigcommerce.com/stores/abc/v3/catalog/products";

    fn from_body(body: &str) -> Result<ApiError, serde_json::Error> {
        ApiError::from_body(HttpMethod::Post, URL.to_string(), 422, body.as_bytes())
    }

    #[test]
    fn test_error_body_with_list_of_details() {
        let error = from_body(
            r#"{"status":422,"title":"Validation Failed","type":"https://developer.bigcommerce.com/api-docs/getting-started/api-status-codes","errors":["price is required"]}"#,
        )
        .unwrap();

        assert_eq!(error.status, 422);
        assert_eq!(error.method, HttpMethod::Post);
        assert_eq!(error.url, URL);
        assert_eq!(error.title, "Validation Failed");
        assert!(error.error_type.contains("api-status-codes"));
        assert_eq!(error.errors, vec!["price is required".to_string()]);
    }

    #[test]
    fn test_error_body_with_field_map_is_flattened_in_key_order() {
        let error = from_body(
            r#"{"title":"Invalid","errors":{"price":"must be positive","name":["is required","is too short"]}}"#,
        )
        .unwrap();

        assert_eq!(
            error.errors,
            vec![
                "name: is required".to_string(),
                "name: is too short".to_string(),
                "price: must be positive".to_string(),
            ]
        );
    }

    #[test]
    fn test_error_body_with_bare_string() {
        let error = from_body(r#"{"errors":"boom"}"#).unwrap();
        assert_eq!(error.errors, vec!["boom".to_string()]);
        assert!(error.title.is_empty());
    }

    #[test]
    fn test_blank_error_body_gives_empty_fields() {
        let error = from_body("  \n").unwrap();
        assert_eq!(error.status, 422);
        assert!(error.title.is_empty());
        assert!(error.error_type.is_empty());
        assert!(error.errors.is_empty());
    }

    #[test]
    fn test_malformed_error_body_is_rejected() {
        assert!(from_body("<html>Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_api_error_display_includes_request_and_details() {
        let error = from_body(r#"{"title":"Validation Failed","errors":["price is required"]}"#)
            .unwrap();
        let message = error.to_string();
        assert!(message.starts_with("POST https://"));
        assert!(message.contains("422 Validation Failed"));
        assert!(message.contains("price is required"));
    }

    #[test]
    fn test_http_error_status_helpers() {
        let api: HttpError = from_body("").unwrap().into();
        assert_eq!(api.status(), Some(422));
        assert!(api.api_error().is_some());

        let sink: HttpError = std::io::Error::other("disk full").into();
        assert_eq!(sink.status(), None);
        assert!(sink.api_error().is_none());
    }
}
