//! Path templates for resource operations.
//!
//! Most catalog resources hang off a parent, e.g. variants live under
//! `catalog/products/{product_id}/variants`. A resource declares one
//! [`ResourcePath`] per operation and identifier set, and [`get_path`] picks
//! the most specific template the caller can fill.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use bigcommerce_api::clients::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &["product_id"], "catalog/products/{product_id}/variants"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Get, &["product_id", "id"], "catalog/products/{product_id}/variants/{id}"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Get, &["product_id", "id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("product_id", "77");
//! ids.insert("id", "5");
//! assert_eq!(build_path(path.template, &ids), "catalog/products/77/variants/5");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations a resource can support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// GET the collection.
    List,
    /// GET one member.
    Get,
    /// POST to the collection.
    Create,
    /// PUT one member.
    Update,
    /// DELETE one member.
    Delete,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::List | Self::Get => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// A path template for one resource operation.
///
/// Templates use `{name}` placeholders, one per entry in `ids`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Identifiers the template needs, outermost first.
    pub ids: &'static [&'static str],
    /// The template, relative to the versioned base URL.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of identifiers this path needs.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if every identifier this path needs is available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// The five paths of a plain collection: list and create on `collection`,
/// get, update, and delete on `member`.
#[must_use]
pub const fn crud_paths(
    collection_ids: &'static [&'static str],
    collection: &'static str,
    member_ids: &'static [&'static str],
    member: &'static str,
) -> [ResourcePath; 5] {
    [
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, collection_ids, collection),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, collection_ids, collection),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Get, member_ids, member),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, member_ids, member),
        ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, member_ids, member),
    ]
}

/// Selects the most specific path for `operation` whose identifiers are all available.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Fills `{name}` placeholders in `template` from `ids`.
///
/// Values are percent-encoded, so a string identifier can never add a path
/// segment. Placeholders without a value are left untouched.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let value = value.to_string();
        result = result.replace(&placeholder, &urlencoding::encode(&value));
    }

    result
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANT_PATHS: &[ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &["product_id"],
            "catalog/products/{product_id}/variants",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["product_id", "id"],
            "catalog/products/{product_id}/variants/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["product_id", "id"],
            "catalog/products/{product_id}/variants/{id}",
        ),
    ];

    #[test]
    fn test_build_path_with_nested_ids() {
        let mut ids = HashMap::new();
        ids.insert("product_id", 77u64);
        ids.insert("id", 5u64);

        assert_eq!(
            build_path("catalog/products/{product_id}/variants/{id}", &ids),
            "catalog/products/77/variants/5"
        );
    }

    #[test]
    fn test_build_path_escapes_string_segments() {
        let mut ids = HashMap::new();
        ids.insert("resource_type", "products/../orders".to_string());
        ids.insert("resource_id", "12".to_string());

        assert_eq!(
            build_path("catalog/{resource_type}/{resource_id}/metafields", &ids),
            "catalog/products%2F..%2Forders/12/metafields"
        );
    }

    #[test]
    fn test_build_path_leaves_missing_placeholders() {
        let ids: HashMap<&str, &str> = HashMap::new();
        assert_eq!(build_path("channels/{id}", &ids), "channels/{id}");
    }

    #[test]
    fn test_get_path_filters_by_operation_and_ids() {
        let list = get_path(VARIANT_PATHS, ResourceOperation::List, &["product_id"]).unwrap();
        assert_eq!(list.template, "catalog/products/{product_id}/variants");

        let delete =
            get_path(VARIANT_PATHS, ResourceOperation::Delete, &["product_id", "id"]).unwrap();
        assert_eq!(delete.http_method, HttpMethod::Delete);

        assert!(get_path(VARIANT_PATHS, ResourceOperation::Get, &["id"]).is_none());
        assert!(get_path(VARIANT_PATHS, ResourceOperation::Create, &["product_id"]).is_none());
    }

    #[test]
    fn test_get_path_prefers_most_specific_match() {
        const PATHS: &[ResourcePath] = &[
            ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["product_id"], "catalog/products/{product_id}/related"),
            ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["product_id", "id"], "catalog/products/{product_id}/related/{id}"),
        ];

        let path = get_path(PATHS, ResourceOperation::Delete, &["product_id", "id"]).unwrap();
        assert_eq!(path.template, "catalog/products/{product_id}/related/{id}");

        let path = get_path(PATHS, ResourceOperation::Delete, &["product_id"]).unwrap();
        assert_eq!(path.template, "catalog/products/{product_id}/related");
    }

    #[test]
    fn test_resource_operation_default_http_method() {
        assert_eq!(ResourceOperation::List.default_http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::Get.default_http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::Create.default_http_method(), HttpMethod::Post);
        assert_eq!(ResourceOperation::Update.default_http_method(), HttpMethod::Put);
        assert_eq!(ResourceOperation::Delete.default_http_method(), HttpMethod::Delete);
    }

    #[test]
    fn test_crud_paths_cover_every_operation() {
        const PATHS: [ResourcePath; 5] =
            crud_paths(&[], "catalog/brands", &["id"], "catalog/brands/{id}");

        let create = get_path(&PATHS, ResourceOperation::Create, &[]).unwrap();
        assert_eq!(create.http_method, HttpMethod::Post);
        assert_eq!(create.template, "catalog/brands");

        let update = get_path(&PATHS, ResourceOperation::Update, &["id"]).unwrap();
        assert_eq!(update.http_method, HttpMethod::Put);
        assert_eq!(update.template, "catalog/brands/{id}");

        assert!(get_path(&PATHS, ResourceOperation::Delete, &[]).is_none());
    }

    #[test]
    fn test_resource_path_id_count() {
        assert_eq!(VARIANT_PATHS[0].id_count(), 1);
        assert_eq!(VARIANT_PATHS[1].id_count(), 2);
    }
}
