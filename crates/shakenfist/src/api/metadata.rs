//! Key-value metadata on namespaces, instances and networks.
//!
//! The same three calls work on every [`ResourceKind`]; the per-kind methods
//! are shorthands.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::instrument;

use crate::client::Client;
use crate::error::Error;
use crate::transport::Method;
use crate::types::ResourceKind;

/// Metadata attached to a resource.
pub type Metadata = BTreeMap<String, String>;

#[derive(Serialize)]
struct MetadataValue<'a> {
    value: &'a str,
}

fn item_path(kind: ResourceKind, id: &str, key: &str) -> String {
    format!("{}/{}/metadata/{}", kind.path_prefix(), id, key)
}

impl Client {
    /// Fetch all metadata on a resource.
    pub async fn get_metadata(&self, kind: ResourceKind, id: &str) -> Result<Metadata, Error> {
        self.dispatcher()
            .get_command(kind.path_prefix(), id, "metadata")
            .await
    }

    /// Set one metadata item, creating or replacing it.
    #[instrument(skip(self, value))]
    pub async fn set_metadata(
        &self,
        kind: ResourceKind,
        id: &str,
        key: &str,
        value: &str,
    ) -> Result<(), Error> {
        self.dispatcher()
            .send_json(
                &item_path(kind, id, key),
                Method::Put,
                Some(&MetadataValue { value }),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_metadata(&self, kind: ResourceKind, id: &str, key: &str) -> Result<(), Error> {
        self.dispatcher()
            .send_json::<()>(&item_path(kind, id, key), Method::Delete, None)
            .await
    }

    pub async fn get_instance_metadata(&self, uuid: &str) -> Result<Metadata, Error> {
        self.get_metadata(ResourceKind::Instance, uuid).await
    }

    pub async fn set_instance_metadata_item(
        &self,
        uuid: &str,
        key: &str,
        value: &str,
    ) -> Result<(), Error> {
        self.set_metadata(ResourceKind::Instance, uuid, key, value)
            .await
    }

    pub async fn delete_instance_metadata(&self, uuid: &str, key: &str) -> Result<(), Error> {
        self.delete_metadata(ResourceKind::Instance, uuid, key).await
    }

    pub async fn get_network_metadata(&self, uuid: &str) -> Result<Metadata, Error> {
        self.get_metadata(ResourceKind::Network, uuid).await
    }

    pub async fn set_network_metadata(&self, uuid: &str, key: &str, value: &str) -> Result<(), Error> {
        self.set_metadata(ResourceKind::Network, uuid, key, value)
            .await
    }

    pub async fn delete_network_metadata(&self, uuid: &str, key: &str) -> Result<(), Error> {
        self.delete_metadata(ResourceKind::Network, uuid, key).await
    }

    pub async fn get_namespace_metadata(&self, namespace: &str) -> Result<Metadata, Error> {
        self.get_metadata(ResourceKind::Namespace, namespace).await
    }

    pub async fn set_namespace_metadata(
        &self,
        namespace: &str,
        key: &str,
        value: &str,
    ) -> Result<(), Error> {
        self.set_metadata(ResourceKind::Namespace, namespace, key, value)
            .await
    }

    pub async fn delete_namespace_metadata(&self, namespace: &str, key: &str) -> Result<(), Error> {
        self.delete_metadata(ResourceKind::Namespace, namespace, key)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_paths_per_kind() {
        assert_eq!(
            item_path(ResourceKind::Namespace, "testspace", "name"),
            "auth/namespaces/testspace/metadata/name"
        );
        assert_eq!(
            item_path(ResourceKind::Instance, "abc", "k"),
            "instances/abc/metadata/k"
        );
        assert_eq!(
            item_path(ResourceKind::Network, "1234-5678", "name"),
            "networks/1234-5678/metadata/name"
        );
    }
}
