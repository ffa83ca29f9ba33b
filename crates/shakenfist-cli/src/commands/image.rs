//! Image cache subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use shakenfist::Client;

use crate::output::{self, Format};

#[derive(Args, Debug)]
pub struct ImageCommand {
    #[command(subcommand)]
    pub command: ImageSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ImageSubcommand {
    /// List cached images on every node
    List,

    /// Fetch an image URL into the cache
    Cache { source: String },
}

pub async fn handle(cmd: ImageCommand, client: &Client, format: Format) -> Result<()> {
    match cmd.command {
        ImageSubcommand::List => {
            let images = client
                .get_image_meta()
                .await
                .context("Failed to list images")?;
            output::emit(format, &images, |images| {
                if images.is_empty() {
                    output::note("No cached images.");
                }
                for image in images {
                    println!(
                        "{}  {}  {}  {}",
                        image.node.dimmed(),
                        image.url.bold(),
                        image.size,
                        image.fetched
                    );
                }
            })
        }
        ImageSubcommand::Cache { source } => {
            client
                .cache_image(&source)
                .await
                .context("Failed to cache image")?;
            output::success(format, &format!("Requested caching of {source}"));
            Ok(())
        }
    }
}
