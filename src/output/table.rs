//! Table output formatting
//!
//! Tables are borderless and left-aligned; every column except the last is
//! padded to its widest cell plus [`COLUMN_GAP`] spaces.

use tabled::{
    Table, Tabled,
    settings::{Padding, Style},
};

/// Spaces between columns
pub const COLUMN_GAP: usize = 4;

/// Format data as a plain whitespace-aligned table.
///
/// An empty slice renders the header line alone.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return T::headers().join(&" ".repeat(COLUMN_GAP));
    }

    let mut table = Table::new(data);
    table
        .with(Style::empty())
        .with(Padding::new(0, COLUMN_GAP, 0, 0));

    // The last column carries padding too; no line keeps trailing spaces
    table
        .to_string()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
