//! Configuration Management
//!
//! Resolves the tenant base URL and API token from the environment and a
//! persistent config file, for callers that do not want to wire those
//! explicitly. Environment variables win over the file: `RESMAN_BASE_URL`,
//! `RESMAN_TENANT`, `RESMAN_API_TOKEN`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Tenant host, e.g. `acme.broker.example.com`
    #[serde(default)]
    pub tenant: Option<String>,
    /// Full API base URL; takes precedence over `tenant` when set
    #[serde(default)]
    pub base_url: Option<String>,
    /// API bearer token
    #[serde(default)]
    pub api_token: Option<String>,
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("resman").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| crate::Error::Validation(format!("cannot create config dir: {e}")))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| crate::Error::Validation(format!("cannot serialize config: {e}")))?;
        std::fs::write(&path, content)
            .map_err(|e| crate::Error::Validation(format!("cannot write config: {e}")))?;

        Ok(())
    }

    /// Get effective base URL (env > explicit base_url > tenant-derived)
    pub fn effective_base_url(&self) -> Option<String> {
        if let Ok(url) = std::env::var("RESMAN_BASE_URL") {
            if !url.is_empty() {
                return Some(url);
            }
        }

        if let Some(url) = &self.base_url {
            return Some(url.clone());
        }

        self.effective_tenant().map(|tenant| format!("https://{tenant}/api"))
    }

    /// Get effective API token (env > config)
    pub fn effective_token(&self) -> Option<String> {
        match std::env::var("RESMAN_API_TOKEN") {
            Ok(token) if !token.is_empty() => Some(token),
            _ => self.api_token.clone(),
        }
    }

    fn effective_tenant(&self) -> Option<String> {
        match std::env::var("RESMAN_TENANT") {
            Ok(tenant) if !tenant.is_empty() => Some(tenant),
            _ => self.tenant.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_derives_base_url() {
        let config = Config {
            tenant: Some("acme.broker.example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.effective_base_url().as_deref(),
            Some("https://acme.broker.example.com/api")
        );
    }

    #[test]
    fn explicit_base_url_wins_over_tenant() {
        let config = Config {
            tenant: Some("acme.broker.example.com".to_string()),
            base_url: Some("https://staging.example.com/api".to_string()),
            api_token: None,
        };
        assert_eq!(
            config.effective_base_url().as_deref(),
            Some("https://staging.example.com/api")
        );
    }

    #[test]
    fn empty_config_resolves_nothing() {
        let config = Config::default();
        // Only assert the file-backed fallbacks when no RESMAN_* env vars
        // are set in the test environment.
        if std::env::var("RESMAN_TENANT").is_err() && std::env::var("RESMAN_BASE_URL").is_err() {
            assert!(config.effective_base_url().is_none());
        }
        if std::env::var("RESMAN_API_TOKEN").is_err() {
            assert!(config.effective_token().is_none());
        }
    }
}
