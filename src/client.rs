//! Resource-manager client
//!
//! Main entry point for the SDK, combining the authenticated transport
//! with URL composition for every collection and handing out sub-clients.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::http::ApiTransport;
use crate::labels::Labels;
use crate::permissions::Permissions;
use crate::profiles::ProfilePermissions;
use crate::resource_types::ResourceTypes;
use crate::resources::Resources;
use url::Url;

/// Main resource-manager client
///
/// Stateless aside from the shared transport and the precomputed base
/// URL, so cloning and concurrent use are both fine.
#[derive(Debug, Clone)]
pub struct ResourceManager {
    transport: ApiTransport,
    base_url: String,
}

impl ResourceManager {
    /// Create a new client against `base_url` (e.g. `https://tenant.example.com/api`),
    /// authenticating every request with the given bearer token
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        Url::parse(base_url)
            .map_err(|e| Error::Validation(format!("invalid base URL '{base_url}': {e}")))?;
        if token.is_empty() {
            return Err(Error::Validation("API token must not be empty".to_string()));
        }

        let transport = ApiTransport::new(token)?;

        Ok(Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from resolved configuration (env vars / config file)
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = config
            .effective_base_url()
            .ok_or_else(|| Error::Validation("no tenant or base URL configured".to_string()))?;
        let token = config
            .effective_token()
            .ok_or_else(|| Error::Validation("no API token configured".to_string()))?;

        Self::new(&base_url, &token)
    }

    /// Build a resource-manager API URL
    pub fn resource_manager_url(&self, path: &str) -> String {
        format!("{}/resource-manager/{}", self.base_url, path)
    }

    /// Label registry client
    pub fn labels(&self) -> Labels {
        Labels::new(self.transport.clone(), self.resource_manager_url("labels"))
    }

    /// Permission catalog client
    pub fn permissions(&self) -> Permissions {
        Permissions::new(
            self.transport.clone(),
            self.resource_manager_url("permissions"),
            self.resource_manager_url("resource-types"),
        )
    }

    /// Profile-permission binding client
    pub fn profiles(&self) -> ProfilePermissions {
        ProfilePermissions::new(self.transport.clone(), self.resource_manager_url("profiles"))
    }

    /// Resource client (aggregates label, type, and permission sub-clients)
    pub fn resources(&self) -> Resources {
        Resources::new(self)
    }

    /// Resource type client
    pub fn resource_types(&self) -> ResourceTypes {
        ResourceTypes::new(self.transport.clone(), self.resource_manager_url("resource-types"))
    }

    pub(crate) fn transport(&self) -> &ApiTransport {
        &self.transport
    }
}

/// Percent-encode an identifier for use as a URL path segment
pub(crate) fn encode_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Append query parameters to a URL, skipping `None` values.
///
/// Returns the URL untouched when every parameter is absent, so list
/// endpoints called without filters produce no query string at all.
pub(crate) fn with_query(url: &str, params: &[(&str, Option<&str>)]) -> String {
    let query_parts: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            value.map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect();

    if query_parts.is_empty() {
        url.to_string()
    } else if url.contains('?') {
        format!("{}&{}", url, query_parts.join("&"))
    } else {
        format!("{}?{}", url, query_parts.join("&"))
    }
}
