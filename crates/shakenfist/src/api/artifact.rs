//! Artifact calls.
//!
//! Artifacts are versioned images cached by the cluster; each version is
//! stored as a [`Blob`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::client::Client;
use crate::error::Error;
use crate::transport::Method;

use super::blob::Blob;
use super::{Event, NodeFilter, UrlRequest, null_as_default};

const ARTIFACTS: &str = "artifacts";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artifact {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artifact_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_versions: i64,
    /// Index of the most recent version.
    #[serde(rename = "index", deserialize_with = "null_as_default")]
    pub most_recent_index: i64,
    /// Versions keyed by index.
    #[serde(deserialize_with = "null_as_default")]
    pub blobs: BTreeMap<u64, Blob>,
}

#[derive(Serialize)]
struct MaxVersionsRequest {
    max_versions: u32,
}

impl Client {
    /// Ask the cluster to fetch and cache the image at `url`.
    #[instrument(skip(self))]
    pub async fn cache_artifact(&self, url: &str) -> Result<(), Error> {
        self.dispatcher()
            .send_json(ARTIFACTS, Method::Post, Some(&UrlRequest { url }))
            .await
    }

    pub async fn get_artifact(&self, uuid: &str) -> Result<Artifact, Error> {
        self.dispatcher()
            .request_json::<(), _>(&format!("{ARTIFACTS}/{uuid}"), Method::Get, None)
            .await
    }

    /// List artifacts, optionally only those present on `node`.
    pub async fn get_artifacts(&self, node: Option<&str>) -> Result<Vec<Artifact>, Error> {
        let filter = node.map(|node| NodeFilter { node });
        self.dispatcher()
            .request_json(ARTIFACTS, Method::Get, filter.as_ref())
            .await
    }

    pub async fn get_artifact_events(&self, uuid: &str) -> Result<Vec<Event>, Error> {
        self.dispatcher().get_command(ARTIFACTS, uuid, "events").await
    }

    pub async fn get_artifact_versions(&self, uuid: &str) -> Result<Vec<Blob>, Error> {
        self.dispatcher().get_command(ARTIFACTS, uuid, "versions").await
    }

    /// Cap how many versions of an artifact the cluster retains.
    #[instrument(skip(self))]
    pub async fn set_artifact_max_versions(&self, uuid: &str, max_versions: u32) -> Result<(), Error> {
        self.dispatcher()
            .send_json(
                &format!("{ARTIFACTS}/{uuid}/versions"),
                Method::Post,
                Some(&MaxVersionsRequest { max_versions }),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_artifact(&self, uuid: &str) -> Result<(), Error> {
        self.dispatcher()
            .send_json::<()>(&format!("{ARTIFACTS}/{uuid}"), Method::Delete, None)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_artifact_version(&self, uuid: &str, version: u64) -> Result<(), Error> {
        self.dispatcher()
            .send_json::<()>(
                &format!("{ARTIFACTS}/{uuid}/versions/{version}"),
                Method::Delete,
                None,
            )
            .await
    }
}
