//! Output formatting functions.

pub mod pretty;

use serde::Serialize;

use crate::cli::OutputFormat;

/// Serialize a response body for printing.
///
/// `Json` yields a single line suitable for piping into other tools; `Pretty`
/// falls back to indented JSON for types without a dedicated formatter.
pub fn format_output<T: Serialize>(value: &T, format: OutputFormat) -> String {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    };
    rendered.unwrap_or_default()
}
