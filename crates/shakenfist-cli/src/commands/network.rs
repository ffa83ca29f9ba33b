//! Network subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use shakenfist::Client;
use shakenfist::api::network::{CreateNetwork, Network};

use super::{interface, print_events};
use crate::output::{self, Format};

#[derive(Args, Debug)]
pub struct NetworkCommand {
    #[command(subcommand)]
    pub command: NetworkSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum NetworkSubcommand {
    /// List networks
    List,

    /// Show one network
    Show { uuid: String },

    /// Create a network
    Create {
        name: String,

        /// IPv4 block, e.g. 192.168.50.0/24
        netblock: String,

        /// Do not run DHCP on the network
        #[arg(long)]
        no_dhcp: bool,

        /// Do not NAT outbound traffic
        #[arg(long)]
        no_nat: bool,

        /// Create in another namespace (admin only)
        #[arg(long)]
        owner: Option<String>,
    },

    /// Delete a network
    Delete { uuid: String },

    /// Delete every network in a namespace
    DeleteAll {
        /// Namespace to clear; `system` clears the whole cluster
        owner: String,
    },

    /// Show events recorded against a network
    Events { uuid: String },

    /// List interfaces on a network
    Interfaces { uuid: String },

    /// Redeploy a network on its network node (admin only)
    DeployNode { uuid: String },

    /// Regenerate a network's DHCP configuration (admin only)
    UpdateDhcp { uuid: String },

    /// Stop DHCP for a network (admin only)
    RemoveDhcp { uuid: String },
}

pub async fn handle(cmd: NetworkCommand, client: &Client, format: Format) -> Result<()> {
    match cmd.command {
        NetworkSubcommand::List => {
            let networks = client
                .get_networks()
                .await
                .context("Failed to list networks")?;
            output::emit(format, &networks, |networks| {
                if networks.is_empty() {
                    output::note("No networks found.");
                }
                for network in networks {
                    println!(
                        "{}  {}  {}  {}",
                        network.uuid,
                        network.name.bold(),
                        network.netblock,
                        network.state.dimmed()
                    );
                }
            })
        }
        NetworkSubcommand::Show { uuid } => {
            let network = client
                .get_network(&uuid)
                .await
                .context("Failed to fetch network")?;
            output::emit(format, &network, print_network)
        }
        NetworkSubcommand::Create {
            name,
            netblock,
            no_dhcp,
            no_nat,
            owner,
        } => {
            let request = CreateNetwork {
                name,
                netblock,
                provide_dhcp: !no_dhcp,
                provide_nat: !no_nat,
                namespace: owner,
            };
            let network = client
                .create_network(&request)
                .await
                .context("Failed to create network")?;
            output::emit(format, &network, |network| {
                output::success(format, &format!("Created network {}", network.uuid));
                print_network(network);
            })
        }
        NetworkSubcommand::Delete { uuid } => {
            client
                .delete_network(&uuid)
                .await
                .context("Failed to delete network")?;
            output::success(format, &format!("Deleted network {uuid}"));
            Ok(())
        }
        NetworkSubcommand::DeleteAll { owner } => {
            let deleted = client
                .delete_all_networks(&owner)
                .await
                .context("Failed to delete networks")?;
            output::emit(format, &deleted, |deleted| {
                for uuid in deleted {
                    println!("{uuid}");
                }
                output::success(format, &format!("Deleted {} networks", deleted.len()));
            })
        }
        NetworkSubcommand::Events { uuid } => {
            let events = client
                .get_network_events(&uuid)
                .await
                .context("Failed to fetch network events")?;
            output::emit(format, &events, |events| print_events(events))
        }
        NetworkSubcommand::Interfaces { uuid } => {
            let interfaces = client
                .get_network_interfaces(&uuid)
                .await
                .context("Failed to list network interfaces")?;
            output::emit(format, &interfaces, |interfaces| {
                interface::print_interfaces(interfaces)
            })
        }
        NetworkSubcommand::DeployNode { uuid } => {
            client
                .deploy_network_node(&uuid)
                .await
                .context("Failed to deploy network node")?;
            output::success(format, &format!("Redeployed network {uuid}"));
            Ok(())
        }
        NetworkSubcommand::UpdateDhcp { uuid } => {
            client
                .update_dhcp(&uuid)
                .await
                .context("Failed to update DHCP")?;
            output::success(format, &format!("Updated DHCP for network {uuid}"));
            Ok(())
        }
        NetworkSubcommand::RemoveDhcp { uuid } => {
            client
                .remove_dhcp(&uuid)
                .await
                .context("Failed to remove DHCP")?;
            output::success(format, &format!("Removed DHCP for network {uuid}"));
            Ok(())
        }
    }
}

fn print_network(network: &Network) {
    output::field("UUID", &network.uuid);
    output::field("Name", &network.name);
    output::field("Namespace", &network.namespace);
    output::field("VXID", &network.vxid.to_string());
    output::field("Netblock", &network.netblock);
    output::field("DHCP", &network.provide_dhcp.to_string());
    output::field("NAT", &network.provide_nat.to_string());
    output::field("Floating gateway", &network.floating_gateway);
    output::field("State", &network.state);
    output::field("Updated", &output::timestamp(network.state_updated));
}
