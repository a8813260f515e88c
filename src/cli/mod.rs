//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod firewalls;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

use crate::client::FirewallRuleSpec;

/// dbctl - manage trusted sources on managed database clusters
#[derive(Parser, Debug)]
#[command(name = "dbctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// API access token
    #[arg(
        short = 't',
        long,
        global = true,
        env = "DBCTL_ACCESS_TOKEN",
        hide_env_values = true
    )]
    pub access_token: Option<String>,

    /// Override the API base URL
    #[arg(short = 'u', long, global = true, env = "DBCTL_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(
        short = 'o',
        long,
        global = true,
        env = "DBCTL_OUTPUT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub output: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "DBCTL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "DBCTL_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage database clusters
    #[command(subcommand, visible_alias = "db")]
    Databases(DatabasesCommands),
}

/// Database cluster subcommands
#[derive(Subcommand, Debug)]
pub enum DatabasesCommands {
    /// Manage a cluster's firewall rules (trusted sources)
    #[command(subcommand, visible_alias = "fw")]
    Firewalls(FirewallCommands),
}

/// Firewall rule subcommands
#[derive(Subcommand, Debug)]
pub enum FirewallCommands {
    /// List the firewall rules of a cluster
    #[command(visible_alias = "ls")]
    List {
        /// Database cluster ID
        cluster_id: String,
    },

    /// Add firewall rules to a cluster
    #[command(after_help = "EXAMPLES:\n  \
        dbctl databases firewalls add <cluster-id> --rule tag:backend\n  \
        dbctl databases firewalls add <cluster-id> --rule ip_addr:192.168.1.1 --rule k8s:<cluster-uuid>")]
    Add {
        /// Database cluster ID
        cluster_id: String,

        /// Rule as type:value (types: ip_addr, droplet, k8s, tag, app)
        #[arg(long = "rule", required = true, value_parser = firewalls::parse_rule)]
        rules: Vec<FirewallRuleSpec>,
    },
}
