//! Cluster administration calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Error;
use crate::transport::Method;

use super::null_as_default;

/// Holder of a cluster lock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub node: String,
    /// What the holder is doing; the server omits this for some lock types.
    pub operation: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub pid: i64,
}

/// Locks keyed by their lock path (e.g. `/sflocks/sf/queue/sf-2`).
pub type Locks = BTreeMap<String, LockMetadata>;

impl Client {
    pub async fn get_locks(&self) -> Result<Locks, Error> {
        self.dispatcher()
            .request_json::<(), _>("admin/locks", Method::Get, None)
            .await
    }
}
