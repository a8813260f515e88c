//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged later in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Access token override
    pub access_token: Option<String>,

    /// API base URL override
    pub api_url: Option<String>,

    /// Output format override
    pub output: Option<OutputFormat>,

    /// Custom config file path (defaults to `<config dir>/dbctl/config.yaml`)
    pub config: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            access_token: cli.access_token.clone(),
            api_url: cli.api_url.clone(),
            output: cli.output,
            config: cli.config.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
