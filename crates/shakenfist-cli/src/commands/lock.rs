//! Lock subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use shakenfist::Client;

use crate::output::{self, Format};

#[derive(Args, Debug)]
pub struct LockCommand {
    #[command(subcommand)]
    pub command: LockSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum LockSubcommand {
    /// List held cluster locks
    List,
}

pub async fn handle(cmd: LockCommand, client: &Client, format: Format) -> Result<()> {
    match cmd.command {
        LockSubcommand::List => {
            let locks = client.get_locks().await.context("Failed to list locks")?;
            output::emit(format, &locks, |locks| {
                if locks.is_empty() {
                    output::note("No locks held.");
                }
                for (path, holder) in locks {
                    println!(
                        "{}  {} pid {}  {}",
                        path,
                        holder.node.bold(),
                        holder.pid,
                        holder.operation.as_deref().unwrap_or("-").dimmed()
                    );
                }
            })
        }
    }
}
