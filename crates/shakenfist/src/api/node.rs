//! Node calls.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::transport::Method;

use super::null_as_default;

/// A hypervisor or network node in the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ip: String,
    /// Unix time of the last heartbeat, as a decimal string.
    #[serde(rename = "lastseen", deserialize_with = "null_as_default")]
    pub last_seen: String,
}

impl Client {
    pub async fn get_nodes(&self) -> Result<Vec<Node>, Error> {
        self.dispatcher()
            .request_json::<(), _>("nodes", Method::Get, None)
            .await
    }
}
