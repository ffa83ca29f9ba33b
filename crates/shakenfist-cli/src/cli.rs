//! CLI argument definitions.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use shakenfist::{Client, ClientConfig, Credentials};
use tracing::debug;

use crate::commands::Commands;
use crate::output::Format;

/// Command line client for the Shaken Fist API.
#[derive(Parser, Debug)]
#[command(name = "sf")]
#[command(author, version = env!("SF_VERSION"), about, long_about = None)]
pub struct Cli {
    /// API server URL
    #[arg(
        long,
        env = "SHAKENFIST_API_URL",
        default_value = "http://localhost:13000",
        global = true
    )]
    pub url: String,

    /// Namespace to authenticate as
    #[arg(long, env = "SHAKENFIST_NAMESPACE", default_value = "system", global = true)]
    pub namespace: String,

    /// Access key for the namespace
    #[arg(long, env = "SHAKENFIST_KEY", hide_env_values = true, global = true)]
    pub key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "SHAKENFIST_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn format(&self) -> Format {
        if self.json { Format::Json } else { Format::Human }
    }

    pub fn client_config(&self) -> Result<ClientConfig> {
        let key = self
            .key
            .as_deref()
            .context("No access key. Pass --key or set SHAKENFIST_KEY.")?;

        let mut config = ClientConfig::from_url(&self.url, Credentials::new(&self.namespace, key))
            .context("Invalid API URL")?
            .with_user_agent(concat!("sf/", env!("SF_VERSION")));

        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn client(&self) -> Result<Client> {
        let config = self.client_config()?;
        debug!(url = %config.base_url(), namespace = config.namespace(), "Using API server");
        Client::new(config).context("Failed to create API client")
    }
}
