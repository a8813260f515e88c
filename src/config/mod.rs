//! Configuration management for dbctl
//!
//! Settings are layered: CLI flag > environment variable > config file > default.
//! Clap resolves the first two layers (see `cli::Cli`); this module loads the
//! YAML file and merges the result.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::error::{ConfigError, Result};

/// Public API endpoint used when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://api.digitalocean.com";

/// Contents of the YAML config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API access token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// API base URL override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Default output format (table, json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Fully resolved settings for one command run
#[derive(Debug, Clone)]
pub struct Settings {
    pub access_token: String,
    pub api_url: String,
    pub format: OutputFormat,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::Invalid(
            "Could not determine config directory".to_string(),
        ))?;

        Ok(base.join("dbctl").join("config.yaml"))
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file yields the default (empty) config.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_path()?,
        };
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        // An empty file deserializes to unit, not a mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        log::debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Merge CLI/env overrides on top of this file config.
    pub fn resolve(
        self,
        access_token: Option<&str>,
        api_url: Option<&str>,
        format: Option<OutputFormat>,
    ) -> Result<Settings> {
        let access_token = access_token
            .map(str::to_string)
            .or(self.access_token)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingAccessToken)?;

        let api_url = api_url
            .map(str::to_string)
            .or(self.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = normalize_api_url(&api_url)?;

        let format = match format {
            Some(f) => f,
            None => match self.output.as_deref() {
                Some(raw) => <OutputFormat as clap::ValueEnum>::from_str(raw, true).map_err(
                    |_| ConfigError::Invalid(format!("unknown output format '{}'", raw)),
                )?,
                None => OutputFormat::default(),
            },
        };

        Ok(Settings {
            access_token,
            api_url,
            format,
        })
    }
}

/// Validate an API base URL and strip any trailing slash
fn normalize_api_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::Invalid(format!("invalid API URL '{}': {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
        other => Err(ConfigError::Invalid(format!(
            "unsupported API URL scheme '{}' (expected http or https)",
            other
        ))
        .into()),
    }
}
