//! Custom field resource and service.

use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::rest::resources::path_ids;
use crate::rest::{crud_paths, Envelope, QueryParams, ResourceError, ResourcePath, RestResource};

/// A name/value pair shown on the product page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomField {
    /// Read-only field ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Label shown to shoppers.
    #[serde(default)]
    pub name: String,
    /// Text shown to shoppers.
    #[serde(default)]
    pub value: String,
    /// Owning product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
}

impl RestResource for CustomField {
    const NAME: &'static str = "CustomField";
    const PATHS: &'static [ResourcePath] = &crud_paths(
        &["product_id"],
        "catalog/products/{product_id}/custom-fields",
        &["product_id", "id"],
        "catalog/products/{product_id}/custom-fields/{id}",
    );
}

/// Custom fields of one product.
#[derive(Debug, Clone, Copy)]
pub struct CustomFieldService<'a> {
    client: &'a HttpClient,
}

impl<'a> CustomFieldService<'a> {
    /// Creates a service over `client`.
    #[must_use]
    pub const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the custom fields of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn list(
        &self,
        product_id: u64,
        params: Option<&QueryParams>,
    ) -> Result<Envelope<Vec<CustomField>>, ResourceError> {
        CustomField::list(self.client, &path_ids([("product_id", product_id)]), params).await
    }

    /// Fetches field `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn get(
        &self,
        product_id: u64,
        id: u64,
    ) -> Result<Envelope<CustomField>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        CustomField::get(self.client, &ids, None).await
    }

    /// Adds a field to `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn create(
        &self,
        product_id: u64,
        field: &CustomField,
    ) -> Result<Envelope<CustomField>, ResourceError> {
        CustomField::create(self.client, &path_ids([("product_id", product_id)]), field).await
    }

    /// Updates field `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn update(
        &self,
        product_id: u64,
        id: u64,
        field: &CustomField,
    ) -> Result<Envelope<CustomField>, ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        CustomField::update(self.client, &ids, field).await
    }

    /// Deletes field `id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn delete(&self, product_id: u64, id: u64) -> Result<(), ResourceError> {
        let ids = path_ids([("product_id", product_id), ("id", id)]);
        CustomField::delete(self.client, &ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::ResourceOperation;

    #[test]
    fn test_custom_field_serialization() {
        let field = CustomField {
            name: "Material".to_string(),
            value: "Beech wood".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&field).unwrap(),
            r#"{"name":"Material","value":"Beech wood"}"#
        );
    }

    #[test]
    fn test_custom_field_update_path() {
        let ids = path_ids([("product_id", 77), ("id", 3)]);
        let (_, path) = CustomField::resolve(ResourceOperation::Update, &ids).unwrap();
        assert_eq!(path, "catalog/products/77/custom-fields/3");
    }
}
