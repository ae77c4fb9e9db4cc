//! Metafield resource and service.
//!
//! Metafields attach namespaced key/value data to any catalog record. The
//! owner is addressed by a resource type segment (`products`, `categories`,
//! `brands`, `variants`) and its numeric ID.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::{crud_paths, Envelope, PathIds, QueryParams, ResourceError, ResourcePath, RestResource};

/// Namespaced key/value data attached to a catalog record.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Metafield {
    /// Read-only metafield ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Key, unique within the namespace.
    #[serde(default)]
    pub key: String,
    /// Stored value.
    #[serde(default)]
    pub value: String,
    /// Owner type: `product`, `category`, `brand`, or `variant`.
    #[serde(default)]
    pub resource_type: String,
    /// Owner ID.
    #[serde(default)]
    pub resource_id: u64,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Groups related keys.
    #[serde(default)]
    pub namespace: String,
    /// `app_only`, `read`, `write`, `read_and_sf_access`, or `write_and_sf_access`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    /// When the metafield was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the metafield was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,
}

impl RestResource for Metafield {
    const NAME: &'static str = "Metafield";
    const PATHS: &'static [ResourcePath] = &crud_paths(
        &["resource_type", "resource_id"],
        "catalog/{resource_type}/{resource_id}/metafields",
        &["resource_type", "resource_id", "id"],
        "catalog/{resource_type}/{resource_id}/metafields/{id}",
    );
}

fn owner_ids(resource_type: &str, resource_id: u64) -> PathIds<'static> {
    PathIds::from([
        ("resource_type", resource_type.to_string()),
        ("resource_id", resource_id.to_string()),
    ])
}

fn member_ids(resource_type: &str, resource_id: u64, id: u64) -> PathIds<'static> {
    let mut ids = owner_ids(resource_type, resource_id);
    ids.insert("id", id.to_string());
    ids
}

/// Metafields of any catalog record.
#[derive(Debug, Clone, Copy)]
pub struct MetafieldService<'a> {
    client: &'a HttpClient,
}

impl<'a> MetafieldService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the metafields of `resource_type`/`resource_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        resource_type: &str,
        resource_id: u64,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<Metafield>>, ResourceError> {
        Metafield::list(self.client, &owner_ids(resource_type, resource_id), params).await
    }

    /// Fetches metafield `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(
        &self,
        resource_type: &str,
        resource_id: u64,
        id: u64,
    ) -> Result<Envelope<Metafield>, ResourceError> {
        Metafield::get(self.client, &member_ids(resource_type, resource_id, id), None).await
    }

    /// Creates a metafield on `resource_type`/`resource_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(
        &self,
        resource_type: &str,
        resource_id: u64,
        metafield: &Metafield,
    ) -> Result<Envelope<Metafield>, ResourceError> {
        Metafield::create(self.client, &owner_ids(resource_type, resource_id), metafield).await
    }

    /// Updates metafield `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update(
        &self,
        resource_type: &str,
        resource_id: u64,
        id: u64,
        metafield: &Metafield,
    ) -> Result<Envelope<Metafield>, ResourceError> {
        let ids = member_ids(resource_type, resource_id, id);
        Metafield::update(self.client, &ids, metafield).await
    }

    /// Deletes metafield `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(
        &self,
        resource_type: &str,
        resource_id: u64,
        id: u64,
    ) -> Result<(), ResourceError> {
        Metafield::delete(self.client, &member_ids(resource_type, resource_id, id)).await
    }
}
