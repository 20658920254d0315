//! Label registry
//!
//! CRUD over named label definitions. Labels are key/value tags attached
//! to resources for grouping and filtering.

use crate::client::encode_segment;
use crate::error::Result;
use crate::http::ApiTransport;
use crate::payload::Payload;
use serde_json::Value;

/// Client for the label registry
#[derive(Clone)]
pub struct Labels {
    transport: ApiTransport,
    base_url: String,
}

impl Labels {
    pub(crate) fn new(transport: ApiTransport, base_url: String) -> Self {
        Self { transport, base_url }
    }

    /// Create a new label.
    ///
    /// `values` is a list of key/value objects, e.g. `[{"env": "prod"}]`.
    /// The wire field for `name` is `keyName`.
    pub async fn create(&self, name: &str, description: &str, values: Vec<Value>) -> Result<Value> {
        let body = Payload::new()
            .field("keyName", name)
            .field("description", description)
            .field("values", values)
            .into_value();

        self.transport.post(&self.base_url, Some(&body)).await
    }

    /// Retrieve all labels.
    ///
    /// This endpoint wraps its results in a top-level `data` envelope,
    /// unlike the resource and permission list endpoints.
    pub async fn list(&self) -> Result<Vec<Value>> {
        let response = self.transport.get(&self.base_url).await?;

        Ok(response
            .get("data")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default())
    }

    /// Retrieve a label by ID
    pub async fn get(&self, label_id: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, encode_segment(label_id));
        self.transport.get(&url).await
    }

    /// Update a label.
    ///
    /// Only supplied fields go on the wire; `None` leaves the field
    /// unchanged server-side.
    pub async fn update(
        &self,
        label_id: &str,
        name: Option<&str>,
        description: Option<&str>,
        values: Option<Vec<Value>>,
    ) -> Result<Value> {
        let body = Payload::new()
            .opt("keyName", name)
            .opt("description", description)
            .opt("values", values)
            .into_value();

        let url = format!("{}/{}", self.base_url, encode_segment(label_id));
        self.transport.put(&url, Some(&body)).await
    }

    /// Delete a label
    pub async fn delete(&self, label_id: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, encode_segment(label_id));
        self.transport.delete(&url).await
    }
}
