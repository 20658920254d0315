//! Resource records
//!
//! A resource is a managed target (server, database, ...) owning a
//! resource type reference, label associations, and broker-pool
//! associations. This client aggregates the label, type, and permission
//! sub-clients the way callers typically reach them.

use crate::client::{encode_segment, with_query, ResourceManager};
use crate::error::Result;
use crate::http::ApiTransport;
use crate::labels::Labels;
use crate::payload::Payload;
use crate::permissions::Permissions;
use crate::resource_types::ResourceTypes;
use serde_json::{json, Value};

/// Client for resource records
#[derive(Clone)]
pub struct Resources {
    transport: ApiTransport,
    base_url: String,
    /// Label registry, shared transport
    pub labels: Labels,
    /// Resource types, shared transport
    pub types: ResourceTypes,
    /// Permission catalog, shared transport
    pub permissions: Permissions,
}

impl Resources {
    pub(crate) fn new(client: &ResourceManager) -> Self {
        Self {
            transport: client.transport().clone(),
            base_url: client.resource_manager_url("resources"),
            labels: client.labels(),
            types: client.resource_types(),
            permissions: client.permissions(),
        }
    }

    /// Retrieve all resources.
    ///
    /// `filter_expression` filters by name (e.g. `name eq profile1`);
    /// `search_text` free-text searches. Absent arguments produce no
    /// query parameters at all. Returns the raw array (no envelope).
    pub async fn list(
        &self,
        filter_expression: Option<&str>,
        search_text: Option<&str>,
    ) -> Result<Vec<Value>> {
        let url = with_query(
            &self.base_url,
            &[("filter", filter_expression), ("searchText", search_text)],
        );
        let response = self.transport.get(&url).await?;

        Ok(response.as_array().cloned().unwrap_or_default())
    }

    /// Create a new resource. The referenced resource type must already exist.
    pub async fn create(
        &self,
        name: &str,
        resource_type_id: &str,
        description: &str,
    ) -> Result<Value> {
        let body = Payload::new()
            .field("name", name)
            .field("description", description)
            .field("resourceType", json!({"id": resource_type_id}))
            .into_value();

        self.transport.post(&self.base_url, Some(&body)).await
    }

    /// Retrieve a resource by ID
    pub async fn get(&self, resource_id: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, encode_segment(resource_id));
        self.transport.get(&url).await
    }

    /// Update a resource.
    ///
    /// The server demands `name` and `resourceType.id` on every PUT even
    /// when unchanged, so the current record is fetched once and those
    /// fields carried over. Optional arguments follow the presence rule.
    pub async fn update(
        &self,
        resource_id: &str,
        description: Option<&str>,
        resource_labels: Option<Vec<Value>>,
    ) -> Result<Value> {
        let current = self.get(resource_id).await?;

        let body = Payload::new()
            .field("name", current.get("name").cloned().unwrap_or(Value::Null))
            .field(
                "resourceType",
                json!({"id": current.pointer("/resourceType/id").cloned().unwrap_or(Value::Null)}),
            )
            .opt("description", description)
            .opt("resourceLabels", resource_labels)
            .into_value();

        let url = format!("{}/{}", self.base_url, encode_segment(resource_id));
        self.transport.put(&url, Some(&body)).await
    }

    /// Delete a resource
    pub async fn delete(&self, resource_id: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, encode_segment(resource_id));
        self.transport.delete(&url).await
    }

    /// Associate broker pools with a resource.
    ///
    /// The pool array is the request body itself, not wrapped in an object.
    pub async fn add_broker_pools(&self, resource_id: &str, pools: Vec<Value>) -> Result<Value> {
        let url = format!("{}/{}/broker-pools", self.base_url, encode_segment(resource_id));
        self.transport.post(&url, Some(&Value::Array(pools))).await
    }
}
