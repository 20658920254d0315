//! Profile-permission bindings
//!
//! Attach, list, and detach catalog permissions on a profile, and patch
//! the variables of an existing binding.

use crate::client::encode_segment;
use crate::error::Result;
use crate::http::ApiTransport;
use crate::payload::Payload;
use serde_json::Value;

/// Client for permissions bound to resource profiles
#[derive(Clone)]
pub struct ProfilePermissions {
    transport: ApiTransport,
    base_url: String,
}

impl ProfilePermissions {
    pub(crate) fn new(transport: ApiTransport, base_url: String) -> Self {
        Self { transport, base_url }
    }

    /// Add a permission to a resource profile.
    ///
    /// `variables` is always serialized, including when empty - the
    /// server treats the body field as the full variable set for the
    /// binding.
    pub async fn add_permissions(
        &self,
        profile_id: &str,
        permission_id: &str,
        version: &str,
        resource_type_id: &str,
        variables: Vec<Value>,
    ) -> Result<Value> {
        let body = Payload::new()
            .field("permissionId", permission_id)
            .field("version", version)
            .field("resourceTypeId", resource_type_id)
            .field("variables", variables)
            .into_value();

        let url = format!("{}/{}/permissions", self.base_url, encode_segment(profile_id));
        self.transport.post(&url, Some(&body)).await
    }

    /// Retrieve all permissions bound to a resource profile
    pub async fn list_permissions(&self, profile_id: &str) -> Result<Vec<Value>> {
        let url = format!("{}/{}/permissions", self.base_url, encode_segment(profile_id));
        let response = self.transport.get(&url).await?;

        Ok(response.as_array().cloned().unwrap_or_default())
    }

    /// Retrieve the permissions available to bind to a resource profile
    pub async fn list_available_permissions(&self, profile_id: &str) -> Result<Vec<Value>> {
        let url = format!(
            "{}/{}/available-permissions",
            self.base_url,
            encode_segment(profile_id)
        );
        let response = self.transport.get(&url).await?;

        Ok(response.as_array().cloned().unwrap_or_default())
    }

    /// Replace the variables of an existing binding
    pub async fn update_permission_variables(
        &self,
        profile_id: &str,
        permission_id: &str,
        variables: Vec<Value>,
    ) -> Result<Value> {
        let body = Payload::new().field("variables", variables).into_value();

        let url = format!(
            "{}/{}/permissions/{}",
            self.base_url,
            encode_segment(profile_id),
            encode_segment(permission_id)
        );
        self.transport.patch(&url, &body).await
    }

    /// Detach a permission from a resource profile
    pub async fn delete_permission(&self, profile_id: &str, permission_id: &str) -> Result<Value> {
        let url = format!(
            "{}/{}/permissions/{}",
            self.base_url,
            encode_segment(profile_id),
            encode_segment(permission_id)
        );
        self.transport.delete(&url).await
    }
}
