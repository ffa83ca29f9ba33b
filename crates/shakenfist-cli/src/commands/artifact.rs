//! Artifact subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use shakenfist::Client;
use shakenfist::api::artifact::Artifact;

use super::{blob, print_events};
use crate::output::{self, Format};

#[derive(Args, Debug)]
pub struct ArtifactCommand {
    #[command(subcommand)]
    pub command: ArtifactSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ArtifactSubcommand {
    /// List artifacts
    List {
        /// Only artifacts present on this node
        #[arg(long)]
        node: Option<String>,
    },

    /// Show one artifact
    Show { uuid: String },

    /// Fetch an image URL into the artifact cache
    Cache { source: String },

    /// Show events recorded against an artifact
    Events { uuid: String },

    /// List stored versions of an artifact
    Versions { uuid: String },

    /// Limit how many versions are kept
    MaxVersions { uuid: String, max_versions: u32 },

    /// Delete an artifact, or one version of it
    Delete {
        uuid: String,

        /// Delete only this version index
        #[arg(long)]
        version: Option<u64>,
    },
}

pub async fn handle(cmd: ArtifactCommand, client: &Client, format: Format) -> Result<()> {
    match cmd.command {
        ArtifactSubcommand::List { node } => {
            let artifacts = client
                .get_artifacts(node.as_deref())
                .await
                .context("Failed to list artifacts")?;
            output::emit(format, &artifacts, |artifacts| {
                if artifacts.is_empty() {
                    output::note("No artifacts found.");
                }
                for artifact in artifacts {
                    println!(
                        "{}  {}  {}  {}",
                        artifact.uuid,
                        artifact.artifact_type,
                        artifact.source_url.bold(),
                        artifact.state.dimmed()
                    );
                }
            })
        }
        ArtifactSubcommand::Show { uuid } => {
            let artifact = client
                .get_artifact(&uuid)
                .await
                .context("Failed to fetch artifact")?;
            output::emit(format, &artifact, print_artifact)
        }
        ArtifactSubcommand::Cache { source } => {
            client
                .cache_artifact(&source)
                .await
                .context("Failed to cache artifact")?;
            output::success(format, &format!("Requested caching of {source}"));
            Ok(())
        }
        ArtifactSubcommand::Events { uuid } => {
            let events = client
                .get_artifact_events(&uuid)
                .await
                .context("Failed to fetch artifact events")?;
            output::emit(format, &events, |events| print_events(events))
        }
        ArtifactSubcommand::Versions { uuid } => {
            let versions = client
                .get_artifact_versions(&uuid)
                .await
                .context("Failed to list artifact versions")?;
            output::emit(format, &versions, |versions| blob::print_blobs(versions))
        }
        ArtifactSubcommand::MaxVersions { uuid, max_versions } => {
            client
                .set_artifact_max_versions(&uuid, max_versions)
                .await
                .context("Failed to set max versions")?;
            output::success(
                format,
                &format!("Artifact {uuid} keeps at most {max_versions} versions"),
            );
            Ok(())
        }
        ArtifactSubcommand::Delete { uuid, version } => {
            match version {
                Some(version) => {
                    client
                        .delete_artifact_version(&uuid, version)
                        .await
                        .context("Failed to delete artifact version")?;
                    output::success(format, &format!("Deleted version {version} of {uuid}"));
                }
                None => {
                    client
                        .delete_artifact(&uuid)
                        .await
                        .context("Failed to delete artifact")?;
                    output::success(format, &format!("Deleted artifact {uuid}"));
                }
            }
            Ok(())
        }
    }
}

fn print_artifact(artifact: &Artifact) {
    output::field("UUID", &artifact.uuid);
    output::field("Type", &artifact.artifact_type);
    output::field("Source", &artifact.source_url);
    output::field("State", &artifact.state);
    output::field("Version", &artifact.version.to_string());
    output::field("Max versions", &artifact.max_versions.to_string());
    output::field("Latest index", &artifact.most_recent_index.to_string());
    for (index, blob) in &artifact.blobs {
        output::field(&format!("Blob {index}"), &blob.uuid);
    }
}
