//! Resource types
//!
//! A resource type categorizes resources and defines which permissions
//! and variables apply to them. Types must exist before resources that
//! reference them can be created.

use crate::client::encode_segment;
use crate::error::Result;
use crate::http::ApiTransport;
use crate::payload::Payload;
use serde_json::Value;

/// Client for resource types
#[derive(Clone)]
pub struct ResourceTypes {
    transport: ApiTransport,
    base_url: String,
}

impl ResourceTypes {
    pub(crate) fn new(transport: ApiTransport, base_url: String) -> Self {
        Self { transport, base_url }
    }

    /// Create a new resource type
    pub async fn create(&self, name: &str, description: &str) -> Result<Value> {
        let body = Payload::new()
            .field("name", name)
            .field("description", description)
            .into_value();

        self.transport.post(&self.base_url, Some(&body)).await
    }

    /// Retrieve all resource types.
    ///
    /// Unwraps the `data` envelope, matching the labels endpoint family.
    pub async fn list(&self) -> Result<Vec<Value>> {
        let response = self.transport.get(&self.base_url).await?;

        Ok(response
            .get("data")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default())
    }

    /// Retrieve a resource type by ID
    pub async fn get(&self, resource_type_id: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, encode_segment(resource_type_id));
        self.transport.get(&url).await
    }

    /// Update a resource type; `None` fields are left unchanged server-side
    pub async fn update(
        &self,
        resource_type_id: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Value> {
        let body = Payload::new()
            .opt("name", name)
            .opt("description", description)
            .into_value();

        let url = format!("{}/{}", self.base_url, encode_segment(resource_type_id));
        self.transport.put(&url, Some(&body)).await
    }

    /// Delete a resource type
    pub async fn delete(&self, resource_type_id: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, encode_segment(resource_type_id));
        self.transport.delete(&url).await
    }
}
