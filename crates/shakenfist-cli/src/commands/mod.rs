//! Subcommand implementations, one module per resource group.

mod artifact;
mod blob;
mod image;
mod instance;
mod interface;
mod lock;
mod metadata;
mod namespace;
mod network;
mod node;

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use shakenfist::Client;
use shakenfist::api::Event;

use crate::output::{self, Format};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage instances
    Instance(instance::InstanceCommand),

    /// Manage networks
    Network(network::NetworkCommand),

    /// Manage network interfaces
    Interface(interface::InterfaceCommand),

    /// Manage namespaces and their keys
    Namespace(namespace::NamespaceCommand),

    /// Read and write resource metadata
    Metadata(metadata::MetadataCommand),

    /// Manage cached artifacts
    Artifact(artifact::ArtifactCommand),

    /// Inspect stored blobs
    Blob(blob::BlobCommand),

    /// Manage the image cache
    Image(image::ImageCommand),

    /// Inspect cluster nodes
    Node(node::NodeCommand),

    /// Inspect cluster locks
    Lock(lock::LockCommand),
}

pub async fn handle(cmd: Commands, client: &Client, format: Format) -> Result<()> {
    match cmd {
        Commands::Instance(cmd) => instance::handle(cmd, client, format).await,
        Commands::Network(cmd) => network::handle(cmd, client, format).await,
        Commands::Interface(cmd) => interface::handle(cmd, client, format).await,
        Commands::Namespace(cmd) => namespace::handle(cmd, client, format).await,
        Commands::Metadata(cmd) => metadata::handle(cmd, client, format).await,
        Commands::Artifact(cmd) => artifact::handle(cmd, client, format).await,
        Commands::Blob(cmd) => blob::handle(cmd, client, format).await,
        Commands::Image(cmd) => image::handle(cmd, client, format).await,
        Commands::Node(cmd) => node::handle(cmd, client, format).await,
        Commands::Lock(cmd) => lock::handle(cmd, client, format).await,
    }
}

/// Print one event per line.
fn print_events(events: &[Event]) {
    if events.is_empty() {
        output::note("No events.");
    }
    for event in events {
        println!(
            "{}  {}  {} {}  {}",
            output::timestamp(event.timestamp).dimmed(),
            event.fqdn,
            event.operation,
            event.phase,
            event.message
        );
    }
}
