//! Client configuration.

use std::time::Duration;

use crate::auth::Credentials;
use crate::error::Error;
use crate::types::BaseUrl;

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("shakenfist-rs/", env!("CARGO_PKG_VERSION"));

/// Everything needed to reach and authenticate against a Shaken Fist API.
///
/// Immutable once handed to a [`Client`](crate::Client).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use shakenfist::{ClientConfig, Credentials};
///
/// let config = ClientConfig::from_url("http://sf-1:13000", Credentials::new("system", "key"))
///     .unwrap()
///     .with_timeout(Duration::from_secs(30));
/// assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: BaseUrl,
    credentials: Credentials,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ClientConfig {
    /// Create a configuration from an already validated base URL.
    pub fn new(base_url: BaseUrl, credentials: Credentials) -> Self {
        Self {
            base_url,
            credentials,
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Create a configuration from a base URL string.
    pub fn from_url(url: &str, credentials: Credentials) -> Result<Self, Error> {
        Ok(Self::new(BaseUrl::new(url)?, credentials))
    }

    /// Create a configuration from a host and port pair.
    pub fn from_host_port(host: &str, port: u16, credentials: Credentials) -> Result<Self, Error> {
        Ok(Self::new(BaseUrl::from_host_port(host, port)?, credentials))
    }

    /// Bound every HTTP request by `timeout`. Without one, requests wait
    /// as long as the HTTP stack allows.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn namespace(&self) -> &str {
        self.credentials.namespace()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
