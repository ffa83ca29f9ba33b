//! Namespace subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use shakenfist::Client;

use crate::output::{self, Format};

#[derive(Args, Debug)]
pub struct NamespaceCommand {
    #[command(subcommand)]
    pub command: NamespaceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum NamespaceSubcommand {
    /// List namespaces
    List,

    /// Create a namespace
    Create { name: String },

    /// Delete a namespace
    Delete { name: String },

    /// Add or replace an access key
    AddKey {
        name: String,
        key_name: String,
        secret: String,
    },

    /// Remove an access key
    DeleteKey { name: String, key_name: String },
}

pub async fn handle(cmd: NamespaceCommand, client: &Client, format: Format) -> Result<()> {
    match cmd.command {
        NamespaceSubcommand::List => {
            let namespaces = client
                .get_namespaces()
                .await
                .context("Failed to list namespaces")?;
            output::emit(format, &namespaces, |namespaces| {
                for namespace in namespaces {
                    println!("{namespace}");
                }
            })
        }
        NamespaceSubcommand::Create { name } => {
            client
                .create_namespace(&name)
                .await
                .context("Failed to create namespace")?;
            output::success(format, &format!("Created namespace {name}"));
            Ok(())
        }
        NamespaceSubcommand::Delete { name } => {
            client
                .delete_namespace(&name)
                .await
                .context("Failed to delete namespace")?;
            output::success(format, &format!("Deleted namespace {name}"));
            Ok(())
        }
        NamespaceSubcommand::AddKey {
            name,
            key_name,
            secret,
        } => {
            client
                .create_namespace_key(&name, &key_name, &secret)
                .await
                .context("Failed to add key")?;
            output::success(format, &format!("Set key {key_name} on {name}"));
            Ok(())
        }
        NamespaceSubcommand::DeleteKey { name, key_name } => {
            client
                .delete_namespace_key(&name, &key_name)
                .await
                .context("Failed to delete key")?;
            output::success(format, &format!("Deleted key {key_name} from {name}"));
            Ok(())
        }
    }
}
