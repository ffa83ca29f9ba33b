//! Instance subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use shakenfist::Client;
use shakenfist::api::instance::{CreateInstance, DiskSpec, Instance};
use shakenfist::api::network::NetworkSpec;

use super::{interface, print_events};
use crate::output::{self, Format};

#[derive(Args, Debug)]
pub struct InstanceCommand {
    #[command(subcommand)]
    pub command: InstanceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum InstanceSubcommand {
    /// List instances
    List,

    /// Show one instance
    Show { uuid: String },

    /// Create an instance
    Create(CreateArgs),

    /// Delete an instance
    Delete { uuid: String },

    /// Reboot an instance
    Reboot { uuid: String },

    /// Power off an instance
    Poweroff { uuid: String },

    /// Power on an instance
    Poweron { uuid: String },

    /// Pause an instance
    Pause { uuid: String },

    /// Resume a paused instance
    Unpause { uuid: String },

    /// Show events recorded against an instance
    Events { uuid: String },

    /// Print recent serial console output
    Console {
        uuid: String,

        /// Number of bytes to fetch
        #[arg(long, default_value_t = 10240)]
        length: u64,
    },

    /// Snapshot an instance's disks
    Snapshot {
        uuid: String,

        /// Snapshot every disk, not just the first
        #[arg(long)]
        all: bool,
    },

    /// List snapshots of an instance
    Snapshots { uuid: String },

    /// List an instance's network interfaces
    Interfaces { uuid: String },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Instance name
    pub name: String,

    /// Number of virtual CPUs
    #[arg(long, default_value_t = 1)]
    pub cpus: i64,

    /// Memory in MB
    #[arg(long, default_value_t = 1024)]
    pub memory: i64,

    /// Network UUID to attach to (repeatable)
    #[arg(long = "network", short = 'n')]
    pub networks: Vec<String>,

    /// Disk as SIZE@BASE, e.g. 8@cirros (repeatable)
    #[arg(long = "disk", short = 'd', value_parser = parse_disk)]
    pub disks: Vec<DiskSpec>,

    /// SSH public key to inject
    #[arg(long, default_value = "")]
    pub ssh_key: String,

    /// Cloud-init user data
    #[arg(long, default_value = "")]
    pub user_data: String,

    /// Create in another namespace (admin only)
    #[arg(long)]
    pub owner: Option<String>,
}

impl From<CreateArgs> for CreateInstance {
    fn from(args: CreateArgs) -> Self {
        CreateInstance {
            name: args.name,
            cpus: args.cpus,
            memory: args.memory,
            network: args.networks.into_iter().map(NetworkSpec::new).collect(),
            disk: args.disks,
            ssh_key: args.ssh_key,
            user_data: args.user_data,
            namespace: args.owner,
        }
    }
}

/// Parse SIZE[@BASE]. A disk without a base is blank.
fn parse_disk(s: &str) -> Result<DiskSpec, String> {
    let (size, base) = match s.split_once('@') {
        Some((size, base)) => (size, base),
        None => (s, ""),
    };
    let size = size
        .parse::<i64>()
        .map_err(|_| format!("invalid disk size '{size}'"))?;
    if size <= 0 {
        return Err(format!("disk size must be positive, got {size}"));
    }

    Ok(DiskSpec {
        base: base.to_string(),
        size,
        bus: String::new(),
        disk_type: "disk".to_string(),
    })
}

pub async fn handle(cmd: InstanceCommand, client: &Client, format: Format) -> Result<()> {
    match cmd.command {
        InstanceSubcommand::List => {
            let instances = client
                .get_instances()
                .await
                .context("Failed to list instances")?;
            output::emit(format, &instances, |instances| {
                if instances.is_empty() {
                    output::note("No instances found.");
                }
                for instance in instances {
                    println!(
                        "{}  {}  {}  {}",
                        instance.uuid,
                        instance.name.bold(),
                        instance.state,
                        instance.node.dimmed()
                    );
                }
            })
        }
        InstanceSubcommand::Show { uuid } => {
            let instance = client
                .get_instance(&uuid)
                .await
                .context("Failed to fetch instance")?;
            output::emit(format, &instance, print_instance)
        }
        InstanceSubcommand::Create(args) => {
            let request = CreateInstance::from(args);
            let instance = client
                .create_instance(&request)
                .await
                .context("Failed to create instance")?;
            output::emit(format, &instance, |instance| {
                output::success(format, &format!("Created instance {}", instance.uuid));
                print_instance(instance);
            })
        }
        InstanceSubcommand::Delete { uuid } => {
            client
                .delete_instance(&uuid)
                .await
                .context("Failed to delete instance")?;
            output::success(format, &format!("Deleted instance {uuid}"));
            Ok(())
        }
        InstanceSubcommand::Reboot { uuid } => {
            client
                .reboot_instance(&uuid)
                .await
                .context("Failed to reboot instance")?;
            output::success(format, &format!("Rebooted instance {uuid}"));
            Ok(())
        }
        InstanceSubcommand::Poweroff { uuid } => {
            client
                .power_off_instance(&uuid)
                .await
                .context("Failed to power off instance")?;
            output::success(format, &format!("Powered off instance {uuid}"));
            Ok(())
        }
        InstanceSubcommand::Poweron { uuid } => {
            client
                .power_on_instance(&uuid)
                .await
                .context("Failed to power on instance")?;
            output::success(format, &format!("Powered on instance {uuid}"));
            Ok(())
        }
        InstanceSubcommand::Pause { uuid } => {
            client
                .pause_instance(&uuid)
                .await
                .context("Failed to pause instance")?;
            output::success(format, &format!("Paused instance {uuid}"));
            Ok(())
        }
        InstanceSubcommand::Unpause { uuid } => {
            client
                .unpause_instance(&uuid)
                .await
                .context("Failed to unpause instance")?;
            output::success(format, &format!("Unpaused instance {uuid}"));
            Ok(())
        }
        InstanceSubcommand::Events { uuid } => {
            let events = client
                .get_instance_events(&uuid)
                .await
                .context("Failed to fetch instance events")?;
            output::emit(format, &events, |events| print_events(events))
        }
        InstanceSubcommand::Console { uuid, length } => {
            let data = client
                .get_console_data(&uuid, length)
                .await
                .context("Failed to fetch console data")?;
            output::emit(format, &data, |data| print!("{data}"))
        }
        InstanceSubcommand::Snapshot { uuid, all } => {
            client
                .snapshot_instance(&uuid, all)
                .await
                .context("Failed to snapshot instance")?;
            output::success(format, &format!("Requested snapshot of instance {uuid}"));
            Ok(())
        }
        InstanceSubcommand::Snapshots { uuid } => {
            let snapshots = client
                .get_instance_snapshots(&uuid)
                .await
                .context("Failed to list snapshots")?;
            output::emit(format, &snapshots, |snapshots| {
                if snapshots.is_empty() {
                    output::note("No snapshots.");
                }
                for snapshot in snapshots {
                    println!(
                        "{}  {}  {}",
                        snapshot.uuid,
                        snapshot.device,
                        output::timestamp(snapshot.created as f64).dimmed()
                    );
                }
            })
        }
        InstanceSubcommand::Interfaces { uuid } => {
            let interfaces = client
                .get_instance_interfaces(&uuid)
                .await
                .context("Failed to list instance interfaces")?;
            output::emit(format, &interfaces, |interfaces| {
                interface::print_interfaces(interfaces)
            })
        }
    }
}

fn print_instance(instance: &Instance) {
    output::field("UUID", &instance.uuid);
    output::field("Name", &instance.name);
    output::field("Namespace", &instance.namespace);
    output::field("CPUs", &instance.cpus.to_string());
    output::field("Memory", &format!("{} MB", instance.memory));
    output::field("Node", &instance.node);
    output::field("State", &instance.state);
    output::field("Updated", &output::timestamp(instance.state_updated));
    output::field("Power", &instance.power_state);
    output::field("Console port", &instance.console_port.to_string());
    output::field("VDI port", &instance.vdi_port.to_string());
    for disk in &instance.disk_specs {
        output::field(
            "Disk",
            &format!("{} GB {} {} {}", disk.size, disk.disk_type, disk.bus, disk.base),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_with_base() {
        let disk = parse_disk("8@cirros").unwrap();
        assert_eq!(disk.size, 8);
        assert_eq!(disk.base, "cirros");
        assert_eq!(disk.disk_type, "disk");
    }

    #[test]
    fn blank_disk() {
        let disk = parse_disk("20").unwrap();
        assert_eq!(disk.size, 20);
        assert!(disk.base.is_empty());
    }

    #[test]
    fn bad_disk_sizes() {
        assert!(parse_disk("big@cirros").is_err());
        assert!(parse_disk("0@cirros").is_err());
    }

    #[test]
    fn create_args_to_request() {
        let args = CreateArgs {
            name: "web".to_string(),
            cpus: 2,
            memory: 2048,
            networks: vec!["n1".to_string()],
            disks: vec![parse_disk("8@cirros").unwrap()],
            ssh_key: String::new(),
            user_data: String::new(),
            owner: None,
        };
        let request = CreateInstance::from(args);
        assert_eq!(request.network, vec![NetworkSpec::new("n1")]);
        assert_eq!(request.disk[0].base, "cirros");
        assert!(request.namespace.is_none());
    }
}
