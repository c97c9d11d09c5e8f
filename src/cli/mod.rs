//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the daizy binary.

use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::config::{ClientConfig, ClientOption};
use crate::error::Result;

/// Daizy API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "daizy", about = "Daizy API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Identity and endpoint settings shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Organisation ID.
    #[arg(long, global = true, env = "DAIZY_ORGANISATION")]
    pub organisation: Option<String>,

    /// Bearer token.
    #[arg(long, global = true, env = "DAIZY_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API host (e.g. https://api-test.daizy.io).
    #[arg(long, global = true, env = "DAIZY_API_URL")]
    pub base_url: Option<String>,

    /// API path prefix; pass an empty string for none.
    #[arg(long, global = true, env = "DAIZY_API_PATH")]
    pub base_path: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "DAIZY_TIMEOUT_SECS")]
    pub timeout: Option<u64>,
}

impl ConnectionArgs {
    /// Options for every flag that was given, in a fixed order.
    pub fn options(&self) -> Vec<ClientOption> {
        let mut options = Vec::new();
        if let Some(url) = &self.base_url {
            options.push(ClientOption::BaseUrl(url.clone()));
        }
        if let Some(path) = &self.base_path {
            options.push(ClientOption::BasePath(path.clone()));
        }
        if let Some(secs) = self.timeout {
            options.push(ClientOption::Timeout(Duration::from_secs(secs)));
        }
        options
    }

    /// Build a client configuration from the flags.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the organisation or token is missing.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let organisation = self.organisation.as_deref().unwrap_or_default();
        let token = self.token.as_deref().unwrap_or_default();
        Ok(ClientConfig::new(organisation, token)?.with_options(self.options()))
    }
}

/// Log filter for the binary.
///
/// Uses `directives` (normally `RUST_LOG`) when given and valid; otherwise
/// only errors are logged.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("error"))
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single entity by ID.
    Get {
        /// The type of entity to get.
        entity: Entity,

        /// The entity ID.
        id: i64,
    },

    /// List every entity of a type.
    List {
        /// The type of entity to list.
        entity: Entity,
    },

    /// Create an entity.
    Create {
        /// The type of entity to create.
        entity: Entity,

        /// Name of the new entity.
        #[arg(long)]
        name: String,

        /// ID of the owning user.
        #[arg(long)]
        user_id: i64,
    },

    /// Update an entity.
    Update {
        /// The type of entity to update.
        entity: Entity,

        /// The ID of the entity to update.
        id: i64,

        /// New name.
        #[arg(long)]
        name: String,

        /// New owning user ID.
        #[arg(long)]
        user_id: i64,
    },

    /// Delete an entity.
    Delete {
        /// The type of entity to delete.
        entity: Entity,

        /// The ID of the entity to delete.
        id: i64,
    },
}

/// Entity types that can be operated on.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A Daizy project.
    #[value(alias = "projects")]
    Project,
}
