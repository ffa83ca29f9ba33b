//! Instance calls.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::client::Client;
use crate::error::Error;
use crate::transport::Method;

use super::network::NetworkSpec;
use super::{DeleteAllRequest, Event, null_as_default};

const INSTANCES: &str = "instances";

/// A disk attached to an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskSpec {
    /// Image URL or artifact reference the disk is built from.
    #[serde(deserialize_with = "null_as_default")]
    pub base: String,
    /// Size in GB.
    #[serde(deserialize_with = "null_as_default")]
    pub size: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub bus: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub disk_type: String,
}

/// An instance as reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instance {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub namespace: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cpus: i64,
    /// Memory in MB.
    #[serde(deserialize_with = "null_as_default")]
    pub memory: i64,
    #[serde(rename = "disk_spec", deserialize_with = "null_as_default")]
    pub disk_specs: Vec<DiskSpec>,
    #[serde(deserialize_with = "null_as_default")]
    pub ssh_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub node: String,
    #[serde(deserialize_with = "null_as_default")]
    pub console_port: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub vdi_port: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub user_data: String,
    /// Free-form block device layout; its shape varies between server releases.
    #[serde(deserialize_with = "null_as_default")]
    pub block_devices: Map<String, Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state_updated: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub power_state: String,
}

/// Request body for creating an instance.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateInstance {
    pub name: String,
    pub cpus: i64,
    pub memory: i64,
    pub network: Vec<NetworkSpec>,
    pub disk: Vec<DiskSpec>,
    pub ssh_key: String,
    pub user_data: String,
    /// Create in this namespace instead of the caller's (admin only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// A snapshot of one instance disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub device: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: i64,
}

#[derive(Serialize)]
struct SnapshotRequest {
    all: bool,
}

#[derive(Serialize)]
struct ConsoleDataRequest {
    length: u64,
}

impl Client {
    /// List instances visible to the authenticated namespace.
    pub async fn get_instances(&self) -> Result<Vec<Instance>, Error> {
        self.dispatcher()
            .request_json::<(), _>(INSTANCES, Method::Get, None)
            .await
    }

    pub async fn get_instance(&self, uuid: &str) -> Result<Instance, Error> {
        self.dispatcher()
            .request_json::<(), _>(&format!("{INSTANCES}/{uuid}"), Method::Get, None)
            .await
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_instance(&self, request: &CreateInstance) -> Result<Instance, Error> {
        debug!("Creating instance");
        self.dispatcher()
            .request_json(INSTANCES, Method::Post, Some(request))
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_instance(&self, uuid: &str) -> Result<(), Error> {
        self.dispatcher()
            .send_json::<()>(&format!("{INSTANCES}/{uuid}"), Method::Delete, None)
            .await
    }

    /// Delete every instance in `namespace`; `system` targets the whole
    /// cluster. Returns the UUIDs that were deleted.
    #[instrument(skip(self))]
    pub async fn delete_all_instances(&self, namespace: &str) -> Result<Vec<String>, Error> {
        let request = DeleteAllRequest {
            namespace,
            confirm: true,
        };
        self.dispatcher()
            .request_json(INSTANCES, Method::Delete, Some(&request))
            .await
    }

    pub async fn reboot_instance(&self, uuid: &str) -> Result<(), Error> {
        self.dispatcher().post_action(INSTANCES, uuid, "reboot").await
    }

    pub async fn power_off_instance(&self, uuid: &str) -> Result<(), Error> {
        self.dispatcher().post_action(INSTANCES, uuid, "poweroff").await
    }

    pub async fn power_on_instance(&self, uuid: &str) -> Result<(), Error> {
        self.dispatcher().post_action(INSTANCES, uuid, "poweron").await
    }

    pub async fn pause_instance(&self, uuid: &str) -> Result<(), Error> {
        self.dispatcher().post_action(INSTANCES, uuid, "pause").await
    }

    pub async fn unpause_instance(&self, uuid: &str) -> Result<(), Error> {
        self.dispatcher().post_action(INSTANCES, uuid, "unpause").await
    }

    pub async fn get_instance_events(&self, uuid: &str) -> Result<Vec<Event>, Error> {
        self.dispatcher().get_command(INSTANCES, uuid, "events").await
    }

    /// Snapshot the instance's first disk, or every disk when `all` is set.
    #[instrument(skip(self))]
    pub async fn snapshot_instance(&self, uuid: &str, all: bool) -> Result<(), Error> {
        self.dispatcher()
            .send_json(
                &format!("{INSTANCES}/{uuid}/snapshot"),
                Method::Post,
                Some(&SnapshotRequest { all }),
            )
            .await
    }

    pub async fn get_instance_snapshots(&self, uuid: &str) -> Result<Vec<Snapshot>, Error> {
        self.dispatcher().get_command(INSTANCES, uuid, "snapshot").await
    }

    /// Fetch the last `length` bytes of serial console output.
    pub async fn get_console_data(&self, uuid: &str, length: u64) -> Result<String, Error> {
        let body = crate::dispatcher::encode(&ConsoleDataRequest { length })?;
        self.dispatcher()
            .request(
                &format!("{INSTANCES}/{uuid}/consoledata"),
                Method::Get,
                Some(body),
            )
            .await?
            .text()
            .await
    }
}
