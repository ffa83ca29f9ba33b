//! Blob calls.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::transport::Method;

use super::{NodeFilter, null_as_default};

/// A stored blob backing one or more artifact versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blob {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Instances currently using this blob.
    #[serde(deserialize_with = "null_as_default")]
    pub instances: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub size: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub reference_count: i64,
    /// Parent blob for layered images.
    pub depends_on: Option<String>,
}

impl Client {
    /// List blobs, optionally only those stored on `node`.
    pub async fn get_blobs(&self, node: Option<&str>) -> Result<Vec<Blob>, Error> {
        let filter = node.map(|node| NodeFilter { node });
        self.dispatcher()
            .request_json("blobs", Method::Get, filter.as_ref())
            .await
    }
}
