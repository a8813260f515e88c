//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Render rows in the requested format.
///
/// `rows` feeds the table; `raw` is serialized for JSON so scripts see the API
/// field names rather than column headers.
pub fn render<T: Tabled, R: Serialize + ?Sized>(
    format: OutputFormat,
    rows: &[T],
    raw: &R,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table::format_table(rows)),
        OutputFormat::Json => Ok(json::format_json(raw)?),
    }
}
