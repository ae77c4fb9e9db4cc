//! The [`RestResource`] trait.
//!
//! A record type implements `RestResource` by naming itself and listing its
//! path templates. It then gets `list`, `get`, `create`, `update`, and
//! `delete` for free, each performing exactly one request through
//! [`HttpClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{crud_paths, RestResource, ResourcePath};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! pub struct Brand {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<u64>,
//!     pub name: String,
//! }
//!
//! impl RestResource for Brand {
//!     const NAME: &'static str = "Brand";
//!     const PATHS: &'static [ResourcePath] =
//!         &crud_paths(&[], "catalog/brands", &["id"], "catalog/brands/{id}");
//! }
//!
//! let brands = Brand::list(&client, &HashMap::new(), None).await?;
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

use crate::clients::{HttpClient, HttpMethod};
use crate::rest::{
    build_path, get_path, Envelope, QueryParams, ResourceError, ResourceOperation, ResourcePath,
};

/// Identifier values keyed by placeholder name, e.g. `{"product_id": "77"}`.
pub type PathIds<'a> = HashMap<&'a str, String>;

/// A record served by the catalog API under a fixed set of path templates.
///
/// Every default method resolves its template with [`get_path`], so a call
/// that lacks a required identifier fails with
/// [`ResourceError::PathResolutionFailed`] before anything is sent.
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Send + Sync + Sized {
    /// The resource name used in error messages (e.g. "Product").
    const NAME: &'static str;

    /// Path templates, one per supported operation and identifier set.
    const PATHS: &'static [ResourcePath];

    /// Resolves the method and relative path for `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no template matches.
    fn resolve(
        operation: ResourceOperation,
        ids: &PathIds<'_>,
    ) -> Result<(HttpMethod, String), ResourceError> {
        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, operation, &available_ids).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: operation.as_str(),
            },
        )?;
        Ok((path.http_method, build_path(path.template, ids)))
    }

    /// Lists the collection, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the path cannot be resolved or the request fails.
    async fn list(
        client: &HttpClient,
        ids: &PathIds<'_>,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<Self>>, ResourceError> {
        let (method, path) = Self::resolve(ResourceOperation::List, ids)?;
        let mut request = client.build_request(method, &path)?;
        if let Some(params) = params {
            request = request.with_query(params);
        }
        Ok(client.decode_into(request).await?)
    }

    /// Fetches one record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the path cannot be resolved or the request fails.
    async fn get(
        client: &HttpClient,
        ids: &PathIds<'_>,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Self>, ResourceError> {
        let (method, path) = Self::resolve(ResourceOperation::Get, ids)?;
        let mut request = client.build_request(method, &path)?;
        if let Some(params) = params {
            request = request.with_query(params);
        }
        Ok(client.decode_into(request).await?)
    }

    /// Creates a record and returns the server's copy.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the path cannot be resolved or the request fails.
    async fn create(
        client: &HttpClient,
        ids: &PathIds<'_>,
        record: &Self,
    ) -> Result<Envelope<Self>, ResourceError> {
        let (method, path) = Self::resolve(ResourceOperation::Create, ids)?;
        let request = client.build_request_with_body(method, &path, record)?;
        Ok(client.decode_into(request).await?)
    }

    /// Replaces the fields present in `record` and returns the server's copy.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the path cannot be resolved or the request fails.
    async fn update(
        client: &HttpClient,
        ids: &PathIds<'_>,
        record: &Self,
    ) -> Result<Envelope<Self>, ResourceError> {
        let (method, path) = Self::resolve(ResourceOperation::Update, ids)?;
        let request = client.build_request_with_body(method, &path, record)?;
        Ok(client.decode_into(request).await?)
    }

    /// Deletes the record, or the whole collection when the resource
    /// declares a collection-level delete and `ids` names only the parents.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the path cannot be resolved or the request fails.
    async fn delete(client: &HttpClient, ids: &PathIds<'_>) -> Result<(), ResourceError> {
        let (method, path) = Self::resolve(ResourceOperation::Delete, ids)?;
        let request = client.build_request(method, &path)?;
        Ok(client.execute(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::crud_paths;
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Widget {
        id: Option<u64>,
    }

    impl RestResource for Widget {
        const NAME: &'static str = "Widget";
        const PATHS: &'static [ResourcePath] = &crud_paths(
            &["shop_id"],
            "shops/{shop_id}/widgets",
            &["shop_id", "id"],
            "shops/{shop_id}/widgets/{id}",
        );
    }

    #[test]
    fn test_resolve_interpolates_ids() {
        let ids = PathIds::from([("shop_id", "3".to_string()), ("id", "9".to_string())]);
        let (method, path) = Widget::resolve(ResourceOperation::Update, &ids).unwrap();
        assert_eq!(method, HttpMethod::Put);
        assert_eq!(path, "shops/3/widgets/9");
    }

    #[test]
    fn test_resolve_collection() {
        let ids = PathIds::from([("shop_id", "3".to_string())]);
        let (method, path) = Widget::resolve(ResourceOperation::Create, &ids).unwrap();
        assert_eq!(method, HttpMethod::Post);
        assert_eq!(path, "shops/3/widgets");
    }

    #[test]
    fn test_resolve_without_parent_fails() {
        let ids = PathIds::from([("id", "9".to_string())]);
        let error = Widget::resolve(ResourceOperation::Get, &ids).unwrap_err();
        assert!(matches!(
            error,
            ResourceError::PathResolutionFailed {
                resource: "Widget",
                operation: "get"
            }
        ));
    }
}
