//! Command execution context
//!
//! Resolves configuration and builds the API client once per run.

use std::sync::Arc;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{CloudClient, DatabasesApi};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing the client and output options.
pub struct CommandContext {
    /// API client
    pub client: Arc<dyn DatabasesApi>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads the config file (or its default location), layers the CLI/env
    /// overrides on top, and creates the API client.
    ///
    /// # Errors
    /// Returns error if the config file cannot be parsed, no access token is
    /// available, or the API URL is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let settings = config.resolve(
            opts.access_token.as_deref(),
            opts.api_url.as_deref(),
            opts.output,
        )?;

        log::debug!("Using API at {}", settings.api_url);
        let client = CloudClient::new(settings.api_url, settings.access_token)?;

        Ok(Self {
            client: Arc::new(client),
            format: settings.format,
        })
    }

    /// Create a context around an existing client.
    #[cfg(test)]
    pub fn with_client(client: Arc<dyn DatabasesApi>, format: OutputFormat) -> Self {
        Self { client, format }
    }
}
