//! shakenfist - client for the Shaken Fist HTTP API
//!
//! Every call flows through a [`Dispatcher`] that fetches a bearer token on
//! first use, reuses it for later calls, and re-authenticates once when the
//! server answers 401. Resource groups (instances, networks, namespaces,
//! artifacts, metadata, ...) are thin methods on [`Client`].
//!
//! # Example
//!
//! ```no_run
//! use shakenfist::{Client, ClientConfig, Credentials, ResourceKind};
//!
//! # async fn example() -> Result<(), shakenfist::Error> {
//! let config = ClientConfig::from_url(
//!     "http://localhost:13000",
//!     Credentials::new("system", "secret"),
//! )?;
//! let client = Client::new(config)?;
//!
//! let instances = client.get_instances().await?;
//! if let Some(first) = instances.first() {
//!     client.set_metadata(ResourceKind::Instance, &first.uuid, "person", "old man").await?;
//!     client.reboot_instance(&first.uuid).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod transport;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{AccessToken, Credentials};
pub use client::Client;
pub use config::ClientConfig;
pub use dispatcher::Dispatcher;
pub use error::Error;
pub use transport::{ApiRequest, HttpTransport, Method, ResponseBody, Transport};
pub use types::{BaseUrl, ResourceKind};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
