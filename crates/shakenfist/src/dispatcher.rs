//! Authenticated request dispatch.
//!
//! The [`Dispatcher`] owns the cached bearer token. Every call goes through
//! [`Dispatcher::request`], which:
//!
//! 1. authenticates if no token is cached,
//! 2. sends the request,
//! 3. on a 401, refreshes the token once and resends,
//! 4. returns whatever the final attempt produced.
//!
//! A second 401 within the same call is returned to the caller as
//! [`Error::UnexpectedStatus`].
//!
//! # Concurrency
//!
//! Refreshes are serialized. Each cached token carries a generation number;
//! a caller whose token was rejected only calls `/auth` if nobody refreshed
//! past that generation while it waited for the refresh lock, so a burst of
//! concurrent 401s produces a single authentication request.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, instrument};

use crate::auth::{AccessToken, AuthResponse};
use crate::config::ClientConfig;
use crate::error::{AuthError, Error};
use crate::transport::{ApiRequest, HttpTransport, Method, ResponseBody, Transport};

/// Path of the token endpoint.
pub const AUTH_PATH: &str = "auth";

/// Sends API requests with a valid bearer token.
///
/// Cheap to clone; clones share the token cache.
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<DispatcherInner>,
}

struct DispatcherInner {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    credential: RwLock<Option<CachedCredential>>,
    refresh: Mutex<()>,
}

#[derive(Clone)]
struct CachedCredential {
    token: AccessToken,
    generation: u64,
}

impl Dispatcher {
    /// Create a dispatcher over the default HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a dispatcher over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: Arc::new(DispatcherInner {
                config,
                transport,
                credential: RwLock::new(None),
                refresh: Mutex::new(()),
            }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Whether a token is currently cached.
    pub async fn has_credential(&self) -> bool {
        self.inner.credential.read().await.is_some()
    }

    /// Obtain a new token from `/auth` and cache it, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the request cannot be built, the
    /// server cannot be reached or rejects it, or the response carries no token.
    #[instrument(skip(self), fields(namespace = %self.inner.config.namespace()))]
    pub async fn authenticate(&self) -> Result<(), Error> {
        let _guard = self.inner.refresh.lock().await;
        self.authenticate_locked().await.map(|_| ())
    }

    /// Send a request with the cached token, refreshing it once on a 401.
    #[instrument(skip(self, body))]
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<Vec<u8>>,
    ) -> Result<ResponseBody, Error> {
        let mut request = ApiRequest::new(method, path);
        request.body = body;

        let credential = self.current_credential().await?;

        match self
            .inner
            .transport
            .send(&request, Some(&credential.token))
            .await
        {
            Err(err) if err.is_unauthorized() => {
                debug!("token rejected, re-authenticating");
                let credential = self.refresh_credential(Some(credential.generation)).await?;
                self.inner
                    .transport
                    .send(&request, Some(&credential.token))
                    .await
            }
            outcome => outcome,
        }
    }

    /// Send an optional JSON payload and decode a JSON response.
    ///
    /// # Errors
    ///
    /// [`Error::Marshal`] if `body` cannot be serialized, [`Error::Decoding`]
    /// if the response is not the expected shape, otherwise whatever
    /// [`request`](Self::request) returns.
    pub async fn request_json<B, R>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let payload = body.map(encode).transpose()?;
        self.request(path, method, payload).await?.json().await
    }

    /// Send an optional JSON payload and discard the response body.
    pub async fn send_json<B>(&self, path: &str, method: Method, body: Option<&B>) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        let payload = body.map(encode).transpose()?;
        self.request(path, method, payload).await?.drain().await
    }

    /// `GET resource/id/command`, decoding the JSON response.
    pub async fn get_command<R>(&self, resource: &str, id: &str, command: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let path = command_path(resource, id, command);
        self.request(&path, Method::Get, None).await?.json().await
    }

    /// `POST resource/id/command` with no body and no decoded result.
    pub async fn post_action(&self, resource: &str, id: &str, command: &str) -> Result<(), Error> {
        let path = command_path(resource, id, command);
        self.request(&path, Method::Post, None).await?.drain().await
    }

    async fn current_credential(&self) -> Result<CachedCredential, Error> {
        if let Some(credential) = self.inner.credential.read().await.as_ref() {
            return Ok(credential.clone());
        }
        self.refresh_credential(None).await
    }

    /// Refresh unless someone else already replaced the token generation
    /// `stale` (or, with `None`, already populated an empty cache).
    async fn refresh_credential(&self, stale: Option<u64>) -> Result<CachedCredential, Error> {
        let _guard = self.inner.refresh.lock().await;

        if let Some(current) = self.inner.credential.read().await.as_ref() {
            let superseded = stale.is_none_or(|generation| current.generation != generation);
            if superseded {
                debug!(generation = current.generation, "reusing token refreshed by another call");
                return Ok(current.clone());
            }
        }

        self.authenticate_locked().await
    }

    /// Caller must hold the refresh lock.
    async fn authenticate_locked(&self) -> Result<CachedCredential, Error> {
        let body = serde_json::to_vec(&self.inner.config.credentials().auth_request())
            .map_err(AuthError::Marshal)?;
        let request = ApiRequest::new(Method::Post, AUTH_PATH).with_body(body);

        let response = self
            .inner
            .transport
            .send(&request, None)
            .await
            .map_err(|e| AuthError::Request(Box::new(e)))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AuthError::Request(Box::new(e)))?;
        let response: AuthResponse = serde_json::from_slice(&bytes).map_err(AuthError::Decode)?;

        let mut slot = self.inner.credential.write().await;
        let generation = slot.as_ref().map_or(1, |c| c.generation + 1);
        let credential = CachedCredential {
            token: AccessToken::new(response.access_token),
            generation,
        };
        *slot = Some(credential.clone());

        debug!(generation, "token cached");
        Ok(credential)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.inner.config)
            .field("credential", &"[REDACTED]")
            .finish()
    }
}

/// Serialize a request payload.
pub(crate) fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(body).map_err(Error::Marshal)
}

fn command_path(resource: &str, id: &str, command: &str) -> String {
    format!("{}/{}/{}", resource, id, command)
}
