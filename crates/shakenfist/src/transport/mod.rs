//! Single HTTP exchanges with the API.
//!
//! A [`Transport`] performs exactly one request and classifies the outcome:
//! a 2xx yields an unread [`ResponseBody`], anything else becomes an
//! [`Error`]. It never retries; retry policy lives in the
//! [`Dispatcher`](crate::Dispatcher).

mod http;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::fmt;

use crate::auth::AccessToken;
use crate::error::Error;

pub use http::HttpTransport;

/// HTTP method for an API request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One API request: method, path relative to the base URL, optional JSON body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attach an already serialized JSON body.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// The unread body of a successful response.
///
/// Consuming methods take `self`; a body can be read once.
pub struct ResponseBody(BodyInner);

enum BodyInner {
    Http(reqwest::Response),
    Buffered(Vec<u8>),
}

impl ResponseBody {
    /// Wrap bytes that are already in memory.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(BodyInner::Buffered(bytes.into()))
    }

    pub(crate) fn from_response(response: reqwest::Response) -> Self {
        Self(BodyInner::Http(response))
    }

    /// Read the whole body.
    pub async fn bytes(self) -> Result<Vec<u8>, Error> {
        match self.0 {
            BodyInner::Http(response) => Ok(response.bytes().await?.to_vec()),
            BodyInner::Buffered(bytes) => Ok(bytes),
        }
    }

    /// Read the whole body as text. Invalid UTF-8 is replaced rather than
    /// rejected.
    pub async fn text(self) -> Result<String, Error> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Decode the body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, Error> {
        let bytes = self.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Error::Decoding)
    }

    /// Read and discard the body.
    pub async fn drain(self) -> Result<(), Error> {
        self.bytes().await.map(|_| ())
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            BodyInner::Http(response) => f
                .debug_tuple("ResponseBody")
                .field(&response.status())
                .finish(),
            BodyInner::Buffered(bytes) => f
                .debug_tuple("ResponseBody")
                .field(&format_args!("{} buffered bytes", bytes.len()))
                .finish(),
        }
    }
}

/// Performs one HTTP exchange.
///
/// Implementations must:
/// - send `Content-Type: application/json` on every request
/// - send `Authorization: Bearer <token>` when `credential` is present
/// - map unreachable servers to [`Error::Connection`]
/// - read the body of any non-2xx response and return
///   [`Error::UnexpectedStatus`] carrying it
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: &ApiRequest,
        credential: Option<&AccessToken>,
    ) -> Result<ResponseBody, Error>;
}
