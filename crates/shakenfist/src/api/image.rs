//! Image cache calls.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::client::Client;
use crate::error::Error;
use crate::transport::Method;

use super::{UrlRequest, null_as_default};

/// Metadata for one cached image on one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub checksum: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fetched: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_version: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub modified: String,
    #[serde(deserialize_with = "null_as_default")]
    pub node: String,
    #[serde(rename = "ref", deserialize_with = "null_as_default")]
    pub reference: String,
    /// Size in bytes, as the server reports it (a decimal string).
    #[serde(deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

impl Client {
    /// Ask the cluster to download `url` into its image cache.
    #[instrument(skip(self))]
    pub async fn cache_image(&self, url: &str) -> Result<(), Error> {
        self.dispatcher()
            .send_json("images", Method::Post, Some(&UrlRequest { url }))
            .await
    }

    pub async fn get_image_meta(&self) -> Result<Vec<ImageMeta>, Error> {
        self.dispatcher()
            .request_json::<(), _>("images", Method::Get, None)
            .await
    }
}
