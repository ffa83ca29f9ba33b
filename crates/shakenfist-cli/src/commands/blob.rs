//! Blob subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use shakenfist::Client;
use shakenfist::api::blob::Blob;

use crate::output::{self, Format};

#[derive(Args, Debug)]
pub struct BlobCommand {
    #[command(subcommand)]
    pub command: BlobSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BlobSubcommand {
    /// List blobs
    List {
        /// Only blobs stored on this node
        #[arg(long)]
        node: Option<String>,
    },
}

pub async fn handle(cmd: BlobCommand, client: &Client, format: Format) -> Result<()> {
    match cmd.command {
        BlobSubcommand::List { node } => {
            let blobs = client
                .get_blobs(node.as_deref())
                .await
                .context("Failed to list blobs")?;
            output::emit(format, &blobs, |blobs| print_blobs(blobs))
        }
    }
}

pub(super) fn print_blobs(blobs: &[Blob]) {
    if blobs.is_empty() {
        output::note("No blobs.");
    }
    for blob in blobs {
        let parent = blob.depends_on.as_deref().unwrap_or("-");
        println!(
            "{}  {} bytes  refs={}  parent={}",
            blob.uuid,
            blob.size,
            blob.reference_count,
            parent.dimmed()
        );
    }
}
