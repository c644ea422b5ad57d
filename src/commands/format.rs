//! Shared output formatting helpers for commands

use serde::Serialize;

use gradelite_core::catalog::Selection;
use gradelite_core::error::Result;
use gradelite_core::format::{escape_quotes, records_header};

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the records header line for a command bound to one selection
///
/// Produces e.g. `H gradelite=1 records=1 mode=gpa year=E1 semester="Sem - 1" branch=CSE`
/// followed by any extra `key=value` fields.
pub fn print_records_header(mode: &str, selection: &Selection, extra: &[(&str, String)]) {
    let mut line = format!(
        "{} year={} semester=\"{}\" branch={}",
        records_header(mode),
        selection.year,
        escape_quotes(selection.semester.label()),
        selection.branch
    );
    for (key, value) in extra {
        line.push_str(&format!(" {}={}", key, value));
    }
    println!("{}", line);
}

/// Round a value to `precision` decimal places for display
pub fn format_decimal(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}
