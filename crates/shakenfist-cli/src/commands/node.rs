//! Node subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use shakenfist::Client;

use crate::output::{self, Format};

#[derive(Args, Debug)]
pub struct NodeCommand {
    #[command(subcommand)]
    pub command: NodeSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum NodeSubcommand {
    /// List nodes and when they last checked in
    List,
}

pub async fn handle(cmd: NodeCommand, client: &Client, format: Format) -> Result<()> {
    match cmd.command {
        NodeSubcommand::List => {
            let nodes = client.get_nodes().await.context("Failed to list nodes")?;
            output::emit(format, &nodes, |nodes| {
                for node in nodes {
                    println!(
                        "{}  {}  {}",
                        node.name.bold(),
                        node.ip,
                        output::timestamp_str(&node.last_seen).dimmed()
                    );
                }
            })
        }
    }
}
