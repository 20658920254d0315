//! Client SDK for resource-broker management APIs
//!
//! Thin async wrappers over the `resource-manager` REST endpoints:
//! labels, the permission catalog, resource types, resource records, and
//! profile-permission bindings. Every method is a single HTTP call; the
//! decoded response is returned unmodified (list endpoints unwrap their
//! `data` envelope where the server uses one). There is no retry logic,
//! no caching, and no client-side state beyond the shared transport.
//!
//! # Module Structure
//!
//! - [`client`] - main [`ResourceManager`] entry point and URL composition
//! - [`config`] - tenant/token resolution from env and config file
//! - [`error`] - typed error taxonomy
//! - [`http`] - authenticated transport over reqwest
//! - [`payload`] - presence-based request-body assembly
//! - [`labels`], [`permissions`], [`profiles`], [`resources`],
//!   [`resource_types`] - one sub-client per collection
//!
//! # Example
//!
//! ```ignore
//! use resman::ResourceManager;
//!
//! async fn example() -> resman::Result<()> {
//!     let client = ResourceManager::new("https://acme.example.com/api", "token")?;
//!     let labels = client.labels().list().await?;
//!     let resource = client
//!         .resources()
//!         .create("db-prod-1", "postgres", "Primary database")
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod labels;
pub mod payload;
pub mod permissions;
pub mod profiles;
pub mod resource_types;
pub mod resources;

pub use client::ResourceManager;
pub use config::Config;
pub use error::{Error, Result};
pub use payload::Payload;
pub use permissions::PermissionFields;
