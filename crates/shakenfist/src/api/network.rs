//! Network and interface calls.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::client::Client;
use crate::error::Error;
use crate::transport::Method;

use super::{DeleteAllRequest, Event, UuidRequest, null_as_default};

const NETWORKS: &str = "networks";
const INTERFACES: &str = "interfaces";

/// A virtual network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub namespace: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vxid: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub netblock: String,
    #[serde(deserialize_with = "null_as_default")]
    pub provide_dhcp: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub provide_nat: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub owner: String,
    #[serde(deserialize_with = "null_as_default")]
    pub floating_gateway: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state_updated: f64,
}

/// Request body for creating a network.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateNetwork {
    pub name: String,
    /// IPv4 CIDR block, e.g. `192.168.50.0/24`.
    pub netblock: String,
    pub provide_dhcp: bool,
    pub provide_nat: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// How an instance attaches to a network at creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub network_uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(rename = "macaddress", deserialize_with = "null_as_default")]
    pub mac_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
}

impl NetworkSpec {
    /// Attach to `network_uuid` with server-chosen address and model.
    pub fn new(network_uuid: impl Into<String>) -> Self {
        Self {
            network_uuid: network_uuid.into(),
            ..Default::default()
        }
    }
}

/// An instance's interface on a network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkInterface {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub network_uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub instance_uuid: String,
    #[serde(rename = "macaddr", deserialize_with = "null_as_default")]
    pub mac_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ipv4: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i64,
    /// Floating address, empty when not floated.
    #[serde(deserialize_with = "null_as_default")]
    pub floating: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state_updated: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
}

impl Client {
    pub async fn get_networks(&self) -> Result<Vec<Network>, Error> {
        self.dispatcher()
            .request_json::<(), _>(NETWORKS, Method::Get, None)
            .await
    }

    pub async fn get_network(&self, uuid: &str) -> Result<Network, Error> {
        self.dispatcher()
            .request_json::<(), _>(&format!("{NETWORKS}/{uuid}"), Method::Get, None)
            .await
    }

    #[instrument(skip(self, request), fields(name = %request.name, netblock = %request.netblock))]
    pub async fn create_network(&self, request: &CreateNetwork) -> Result<Network, Error> {
        self.dispatcher()
            .request_json(NETWORKS, Method::Post, Some(request))
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_network(&self, uuid: &str) -> Result<(), Error> {
        self.dispatcher()
            .send_json::<()>(&format!("{NETWORKS}/{uuid}"), Method::Delete, None)
            .await
    }

    /// Delete every network in `namespace`; `system` targets the whole
    /// cluster. Returns the UUIDs that were deleted.
    #[instrument(skip(self))]
    pub async fn delete_all_networks(&self, namespace: &str) -> Result<Vec<String>, Error> {
        let request = DeleteAllRequest {
            namespace,
            confirm: true,
        };
        self.dispatcher()
            .request_json(NETWORKS, Method::Delete, Some(&request))
            .await
    }

    pub async fn get_network_interfaces(&self, uuid: &str) -> Result<Vec<NetworkInterface>, Error> {
        self.dispatcher().get_command(NETWORKS, uuid, "interfaces").await
    }

    pub async fn get_network_events(&self, uuid: &str) -> Result<Vec<Event>, Error> {
        self.dispatcher().get_command(NETWORKS, uuid, "events").await
    }

    pub async fn get_instance_interfaces(&self, uuid: &str) -> Result<Vec<NetworkInterface>, Error> {
        self.dispatcher().get_command("instances", uuid, "interfaces").await
    }

    pub async fn get_interface(&self, uuid: &str) -> Result<NetworkInterface, Error> {
        self.dispatcher()
            .request_json::<(), _>(&format!("{INTERFACES}/{uuid}"), Method::Get, None)
            .await
    }

    /// Attach a floating address to an interface.
    pub async fn float_interface(&self, uuid: &str) -> Result<(), Error> {
        self.dispatcher().post_action(INTERFACES, uuid, "float").await
    }

    /// Remove the floating address from an interface.
    pub async fn defloat_interface(&self, uuid: &str) -> Result<(), Error> {
        self.dispatcher().post_action(INTERFACES, uuid, "defloat").await
    }

    // Node-level network maintenance, admin only.

    pub async fn deploy_network_node(&self, uuid: &str) -> Result<(), Error> {
        self.put_uuid("deploy_network_node", uuid).await
    }

    pub async fn update_dhcp(&self, uuid: &str) -> Result<(), Error> {
        self.put_uuid("update_dhcp", uuid).await
    }

    pub async fn remove_dhcp(&self, uuid: &str) -> Result<(), Error> {
        self.put_uuid("remove_dhcp", uuid).await
    }

    async fn put_uuid(&self, path: &str, uuid: &str) -> Result<(), Error> {
        self.dispatcher()
            .send_json(path, Method::Put, Some(&UuidRequest { uuid }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_matches_server_expectation() {
        let request = CreateNetwork {
            name: "nowherenet".to_string(),
            netblock: "10.0.1.0/24".to_string(),
            provide_dhcp: true,
            provide_nat: true,
            namespace: None,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"name":"nowherenet","netblock":"10.0.1.0/24","provide_dhcp":true,"provide_nat":true}"#
        );
    }

    #[test]
    fn interface_field_names() {
        let iface: NetworkInterface = serde_json::from_str(
            r#"{"uuid":"i1","network_uuid":"n1","instance_uuid":"x1","macaddr":"02:00:00:aa:bb:cc",
                "ipv4":"10.0.1.5","order":0,"floating":null,"state":"created","model":"virtio"}"#,
        )
        .unwrap();
        assert_eq!(iface.mac_address, "02:00:00:aa:bb:cc");
        assert_eq!(iface.floating, "");
    }

    #[test]
    fn records_tolerate_null_scalars() {
        let network: Network = serde_json::from_str(
            r#"{"uuid":"n1","name":null,"vxid":null,"netblock":null,"provide_dhcp":null,"provide_nat":true}"#,
        )
        .unwrap();
        assert_eq!(network.vxid, 0);
        assert!(!network.provide_dhcp);
        assert!(network.provide_nat);

        let iface: NetworkInterface =
            serde_json::from_str(r#"{"uuid":null,"macaddr":null,"order":null}"#).unwrap();
        assert_eq!(iface, NetworkInterface::default());
    }

    #[test]
    fn network_spec_uses_macaddress_key() {
        let spec = NetworkSpec::new("n1");
        let body = serde_json::to_value(&spec).unwrap();
        assert_eq!(body["network_uuid"], "n1");
        assert!(body.get("macaddress").is_some());
    }
}
