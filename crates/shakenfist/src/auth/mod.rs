//! Authentication primitives.
//!
//! [`Credentials`] name the namespace and key the client logs in with;
//! [`AccessToken`] is the bearer token the server hands back.

mod credentials;
mod tokens;

pub use credentials::Credentials;
pub use tokens::AccessToken;
pub(crate) use tokens::AuthResponse;
