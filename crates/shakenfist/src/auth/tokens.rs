//! Bearer token type.

use serde::Deserialize;
use std::fmt;

/// A bearer token returned by `POST /auth`.
///
/// The server decides when a token expires; the client only learns about it
/// through a 401 response.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the value for an `Authorization` header.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// Response body of `POST /auth`.
#[derive(Deserialize)]
pub(crate) struct AuthResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_hides_value_in_debug() {
        let token = AccessToken::new("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("eyJ"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn bearer_header_value() {
        let token = AccessToken::new("ABC123");
        assert_eq!(token.bearer(), "Bearer ABC123");
    }

    #[test]
    fn auth_response_ignores_extra_fields() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"access_token":"ABC123","token_type":"Bearer"}"#).unwrap();
        assert_eq!(resp.access_token, "ABC123");
    }
}
