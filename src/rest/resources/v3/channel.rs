//! Channel resource and service.
//!
//! Channels are storefronts and marketplaces a store sells through. They sit
//! outside `catalog/` at `channels`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::resources::path_ids;
use crate::rest::{crud_paths, Envelope, QueryParams, ResourceError, ResourcePath, RestResource};

/// A storefront or marketplace the store sells through.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Channel {
    /// Read-only channel ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Channel name.
    #[serde(default)]
    pub name: String,
    /// `storefront`, `marketplace`, `pos`, or `marketing`.
    #[serde(rename = "type", default)]
    pub channel_type: String,
    /// Platform behind the channel, e.g. `bigcommerce` or `amazon`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// `active`, `prelaunch`, `inactive`, `connected`, `disconnected`, or `archived`.
    #[serde(default)]
    pub status: String,
    /// Whether products can be listed on the channel.
    #[serde(default)]
    pub is_listable: bool,
    /// Whether the channel shows in the control panel.
    #[serde(default)]
    pub is_visible: bool,
    /// ID of the channel on its own platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Whether another system owns the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_externally_managed: Option<bool>,
    /// When the record was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the record was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,
}

impl RestResource for Channel {
    const NAME: &'static str = "Channel";
    const PATHS: &'static [ResourcePath] = &crud_paths(&[], "channels", &["id"], "channels/{id}");
}

/// Sales channels.
#[derive(Debug, Clone, Copy)]
pub struct ChannelService<'a> {
    client: &'a HttpClient,
}

impl<'a> ChannelService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists channels.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<Channel>>, ResourceError> {
        Channel::list(self.client, &path_ids([]), params).await
    }

    /// Fetches channel `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(&self, id: u64) -> Result<Envelope<Channel>, ResourceError> {
        Channel::get(self.client, &path_ids([("id", id)]), None).await
    }

    /// Creates a channel.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(&self, channel: &Channel) -> Result<Envelope<Channel>, ResourceError> {
        Channel::create(self.client, &path_ids([]), channel).await
    }

    /// Updates channel `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update(
        &self,
        id: u64,
        channel: &Channel,
    ) -> Result<Envelope<Channel>, ResourceError> {
        Channel::update(self.client, &path_ids([("id", id)]), channel).await
    }

    /// Deletes channel `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        Channel::delete(self.client, &path_ids([("id", id)])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::ResourceOperation;
    use serde_json::json;

    #[test]
    fn test_channel_type_is_renamed() {
        let channel = Channel {
            name: "Amazon".to_string(),
            channel_type: "marketplace".to_string(),
            platform: Some("amazon".to_string()),
            status: "active".to_string(),
            is_listable: true,
            ..Default::default()
        };

        let json = serde_json::to_value(&channel).unwrap();
        assert_eq!(json["type"], "marketplace");
        assert!(json.get("channel_type").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_channel_paths_are_outside_catalog() {
        let (_, path) = Channel::resolve(ResourceOperation::List, &path_ids([])).unwrap();
        assert_eq!(path, "channels");

        let channel: Channel =
            serde_json::from_value(json!({"id": 1, "name": "Storefront", "type": "storefront"}))
                .unwrap();
        assert_eq!(channel.channel_type, "storefront");
    }
}
