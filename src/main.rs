//! dbctl - manage firewall rules on managed database clusters

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{Cli, CommandContext, Commands, DatabasesCommands, FirewallCommands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `--debug`
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    let output = match cli.command {
        Commands::Databases(DatabasesCommands::Firewalls(fw_cmd)) => {
            let ctx = CommandContext::new(&opts)?;
            match fw_cmd {
                FirewallCommands::List { cluster_id } => {
                    cli::firewalls::list(&ctx, &cluster_id).await?
                }
                FirewallCommands::Add { cluster_id, rules } => {
                    cli::firewalls::add(&ctx, &cluster_id, rules).await?
                }
            }
        }
    };

    println!("{}", output);
    Ok(())
}
