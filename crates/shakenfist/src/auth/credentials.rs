//! Login credentials type.

use serde::Serialize;
use std::fmt;

/// Namespace and access key used to obtain a bearer token.
///
/// # Security
///
/// The key is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use shakenfist::Credentials;
///
/// let creds = Credentials::new("system", "oisoSe7T");
/// assert_eq!(creds.namespace(), "system");
/// assert!(!format!("{:?}", creds).contains("oisoSe7T"));
/// ```
#[derive(Clone)]
pub struct Credentials {
    namespace: String,
    key: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }

    /// Returns the namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Body of the `/auth` request.
    pub(crate) fn auth_request(&self) -> AuthRequest<'_> {
        AuthRequest {
            namespace: &self.namespace,
            key: &self.key,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("namespace", &self.namespace)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Request body for `POST /auth`.
#[derive(Serialize)]
pub(crate) struct AuthRequest<'a> {
    pub namespace: &'a str,
    pub key: &'a str,
}
