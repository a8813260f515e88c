//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - aligned columns, one row per entry (default)
    #[default]
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}
