//! Permission catalog
//!
//! Permissions are checkin/checkout-capable access grants defined per
//! resource type, optionally carrying a file attachment (e.g. a
//! credential bundle or script). Create and update are dual-mode: with
//! file bytes the request goes out as multipart form data, without them
//! as plain JSON. The presence of the file is the sole discriminator.

use crate::client::encode_segment;
use crate::error::Result;
use crate::http::ApiTransport;
use crate::payload::Payload;
use reqwest::Method;
use serde_json::Value;

/// Optional metadata fields accepted by permission create/update.
///
/// Every field follows the presence rule: `None` is omitted from the
/// request, `Some` is sent even when empty.
#[derive(Debug, Clone, Default)]
pub struct PermissionFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub version: Option<String>,
    pub checkin_url: Option<String>,
    pub checkout_url: Option<String>,
    pub checkin_file_name: Option<String>,
    pub checkout_file_name: Option<String>,
    pub checkin_time_limit: Option<u64>,
    pub checkout_time_limit: Option<u64>,
    /// Ordered variable descriptors
    pub variables: Option<Vec<Value>>,
}

impl PermissionFields {
    /// Fold the supplied fields into a payload, mapping to the server's
    /// camelCase wire names
    fn apply(self, payload: Payload) -> Payload {
        payload
            .opt("name", self.name)
            .opt("description", self.description)
            .opt("createdBy", self.created_by)
            .opt("updatedBy", self.updated_by)
            .opt("version", self.version)
            .opt("checkinURL", self.checkin_url)
            .opt("checkoutURL", self.checkout_url)
            .opt("checkinFileName", self.checkin_file_name)
            .opt("checkoutFileName", self.checkout_file_name)
            .opt("checkinTimeLimit", self.checkin_time_limit)
            .opt("checkoutTimeLimit", self.checkout_time_limit)
            .opt("variables", self.variables)
    }
}

/// Client for the permission catalog
#[derive(Clone)]
pub struct Permissions {
    transport: ApiTransport,
    base_url: String,
    resource_types_url: String,
}

impl Permissions {
    pub(crate) fn new(
        transport: ApiTransport,
        base_url: String,
        resource_types_url: String,
    ) -> Self {
        Self { transport, base_url, resource_types_url }
    }

    /// Retrieve all permissions defined for a resource type.
    ///
    /// Returns the raw array; this endpoint has no `data` envelope.
    pub async fn list(&self, resource_type_id: &str) -> Result<Vec<Value>> {
        let url = format!(
            "{}/{}/permissions",
            self.resource_types_url,
            encode_segment(resource_type_id)
        );
        let response = self.transport.get(&url).await?;

        Ok(response.as_array().cloned().unwrap_or_default())
    }

    /// Create a new permission for a resource type.
    ///
    /// With `file` bytes the request is multipart (one `file` part plus
    /// the fields as form text parts); without, a plain JSON POST.
    pub async fn create(
        &self,
        resource_type_id: &str,
        file: Option<Vec<u8>>,
        fields: PermissionFields,
    ) -> Result<Value> {
        let payload = fields.apply(
            Payload::new()
                .field("resourceTypeId", resource_type_id)
                .field("isDraft", false),
        );

        match file {
            Some(bytes) => {
                self.transport
                    .send_multipart(Method::POST, &self.base_url, payload, bytes)
                    .await
            },
            None => self.transport.post(&self.base_url, Some(&payload.into_value())).await,
        }
    }

    /// Update a permission, with the same dual-mode file handling as
    /// [`create`](Self::create)
    pub async fn update(
        &self,
        permission_id: &str,
        file: Option<Vec<u8>>,
        fields: PermissionFields,
    ) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, encode_segment(permission_id));
        let payload = fields.apply(Payload::new());

        match file {
            Some(bytes) => {
                self.transport.send_multipart(Method::PUT, &url, payload, bytes).await
            },
            None => self.transport.put(&url, Some(&payload.into_value())).await,
        }
    }

    /// Retrieve a permission by ID, optionally pinned to a version
    pub async fn get(&self, permission_id: &str, version_id: Option<&str>) -> Result<Value> {
        self.transport.get(&self.versioned_url(permission_id, version_id)).await
    }

    /// Delete a permission, optionally a single version.
    ///
    /// Not idempotent: deleting an already-vanished ID fails with
    /// [`Error::NotFound`](crate::Error::NotFound).
    pub async fn delete(&self, permission_id: &str, version_id: Option<&str>) -> Result<Value> {
        self.transport.delete(&self.versioned_url(permission_id, version_id)).await
    }

    /// Retrieve the checkin/checkout URLs for a permission
    pub async fn get_urls(&self, permission_id: &str) -> Result<Value> {
        let url = format!("{}/get-urls/{}", self.base_url, encode_segment(permission_id));
        self.transport.get(&url).await
    }

    fn versioned_url(&self, permission_id: &str, version_id: Option<&str>) -> String {
        match version_id {
            Some(version) => format!(
                "{}/{}/{}",
                self.base_url,
                encode_segment(permission_id),
                encode_segment(version)
            ),
            None => format!("{}/{}", self.base_url, encode_segment(permission_id)),
        }
    }
}
