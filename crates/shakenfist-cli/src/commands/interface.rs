//! Network interface subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use shakenfist::Client;
use shakenfist::api::network::NetworkInterface;

use crate::output::{self, Format};

#[derive(Args, Debug)]
pub struct InterfaceCommand {
    #[command(subcommand)]
    pub command: InterfaceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum InterfaceSubcommand {
    /// Show one interface
    Show { uuid: String },

    /// Attach a floating address
    Float { uuid: String },

    /// Release the floating address
    Defloat { uuid: String },
}

pub async fn handle(cmd: InterfaceCommand, client: &Client, format: Format) -> Result<()> {
    match cmd.command {
        InterfaceSubcommand::Show { uuid } => {
            let iface = client
                .get_interface(&uuid)
                .await
                .context("Failed to fetch interface")?;
            output::emit(format, &iface, |iface| {
                output::field("UUID", &iface.uuid);
                output::field("Network", &iface.network_uuid);
                output::field("Instance", &iface.instance_uuid);
                output::field("MAC", &iface.mac_address);
                output::field("IPv4", &iface.ipv4);
                output::field("Floating", &iface.floating);
                output::field("Model", &iface.model);
                output::field("State", &iface.state);
            })
        }
        InterfaceSubcommand::Float { uuid } => {
            client
                .float_interface(&uuid)
                .await
                .context("Failed to float interface")?;
            output::success(format, &format!("Floated interface {uuid}"));
            Ok(())
        }
        InterfaceSubcommand::Defloat { uuid } => {
            client
                .defloat_interface(&uuid)
                .await
                .context("Failed to defloat interface")?;
            output::success(format, &format!("Defloated interface {uuid}"));
            Ok(())
        }
    }
}

pub(super) fn print_interfaces(interfaces: &[NetworkInterface]) {
    if interfaces.is_empty() {
        output::note("No interfaces.");
    }
    for iface in interfaces {
        let floating = if iface.floating.is_empty() {
            String::new()
        } else {
            format!(" -> {}", iface.floating.green())
        };
        println!(
            "{}  {}  {}{}  {}",
            iface.uuid,
            iface.mac_address,
            iface.ipv4,
            floating,
            iface.state.dimmed()
        );
    }
}
