//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod status;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        let output = self.format(format)?;
        println!("{}", output);
        Ok(())
    }
}

/// Render rows under a heading; the heading is only shown in pretty mode
pub fn render_section<T: Tabled + Serialize>(
    title: &str,
    rows: &[T],
    format: OutputFormat,
) -> Result<String> {
    let body = rows.format(format)?;
    if format == OutputFormat::Pretty {
        return Ok(format!("\n{}\n{}", status::heading_text(title), body));
    }
    Ok(body)
}

/// Report a completed change: a JSON document in JSON mode, a success line
/// otherwise
pub fn report_change(format: OutputFormat, data: serde_json::Value, message: String) -> Result<()> {
    match format {
        OutputFormat::Json => json::print_result(data)?,
        _ => status::success(message),
    }
    Ok(())
}

impl<T: Tabled + Serialize> Formattable for [T] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(table::format_table(self)),
            OutputFormat::Table => Ok(table::format_plain_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}
