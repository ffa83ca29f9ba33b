//! Validated value types.

mod base_url;
mod resource;

pub use base_url::BaseUrl;
pub use resource::ResourceKind;
