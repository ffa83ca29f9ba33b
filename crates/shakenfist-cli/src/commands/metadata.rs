//! Metadata subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use shakenfist::{Client, ResourceKind};

use crate::output::{self, Format};

#[derive(Args, Debug)]
pub struct MetadataCommand {
    /// Kind of resource: instance, network or namespace
    #[arg(long, default_value = "instance", global = true)]
    pub kind: ResourceKind,

    #[command(subcommand)]
    pub command: MetadataSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MetadataSubcommand {
    /// Print all metadata on a resource
    Get { id: String },

    /// Set one metadata item
    Set {
        id: String,
        name: String,
        value: String,
    },

    /// Delete one metadata item
    Delete { id: String, name: String },
}

pub async fn handle(cmd: MetadataCommand, client: &Client, format: Format) -> Result<()> {
    let kind = cmd.kind;
    match cmd.command {
        MetadataSubcommand::Get { id } => {
            let metadata = client
                .get_metadata(kind, &id)
                .await
                .with_context(|| format!("Failed to fetch {kind} metadata"))?;
            output::emit(format, &metadata, |metadata| {
                if metadata.is_empty() {
                    output::note("No metadata.");
                }
                for (key, value) in metadata {
                    output::field(key, value);
                }
            })
        }
        MetadataSubcommand::Set { id, name, value } => {
            client
                .set_metadata(kind, &id, &name, &value)
                .await
                .with_context(|| format!("Failed to set {kind} metadata"))?;
            output::success(format, &format!("Set {name} on {kind} {id}"));
            Ok(())
        }
        MetadataSubcommand::Delete { id, name } => {
            client
                .delete_metadata(kind, &id, &name)
                .await
                .with_context(|| format!("Failed to delete {kind} metadata"))?;
            output::success(format, &format!("Deleted {name} from {kind} {id}"));
            Ok(())
        }
    }
}
