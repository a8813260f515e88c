//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Utc};

/// Format a rule creation time the way the table shows it.
///
/// Returns an empty string when the API omitted the timestamp.
///
/// # Example output
/// `2021-02-01 20:07:53 +0000 UTC`
pub fn format_created_at(created_at: Option<&DateTime<Utc>>) -> String {
    match created_at {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S %z UTC").to_string(),
        None => String::new(),
    }
}
