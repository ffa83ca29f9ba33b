//! Public client facade.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::dispatcher::Dispatcher;
use crate::error::Error;
use crate::transport::Transport;

/// A client for the Shaken Fist API.
///
/// Resource calls live in the [`api`](crate::api) modules as methods on this
/// type. All of them go through one [`Dispatcher`], so a token obtained by
/// any call is reused by every other call on the same client or its clones.
///
/// # Example
///
/// ```no_run
/// use shakenfist::{Client, ClientConfig, Credentials};
///
/// # async fn example() -> Result<(), shakenfist::Error> {
/// let config = ClientConfig::from_url("http://localhost:13000", Credentials::new("system", "key"))?;
/// let client = Client::new(config)?;
///
/// for instance in client.get_instances().await? {
///     println!("{} {}", instance.uuid, instance.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    dispatcher: Dispatcher,
}

impl Client {
    /// Create a client using the default HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Ok(Self {
            dispatcher: Dispatcher::new(config)?,
        })
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            dispatcher: Dispatcher::with_transport(config, transport),
        }
    }

    /// The dispatcher behind this client, for calls without a typed wrapper.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn config(&self) -> &ClientConfig {
        self.dispatcher.config()
    }

    /// Fetch a fresh token now instead of on first use.
    pub async fn authenticate(&self) -> Result<(), Error> {
        self.dispatcher.authenticate().await
    }
}
