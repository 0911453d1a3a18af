//! JSON output formatting
//!
//! Every JSON document printed by octop has the same envelope:
//! `{"data": ..., "meta": {"timestamp": ..., "version": ...}}`.

use chrono::Utc;
use serde::Serialize;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// RFC 3339 timestamp of the response
    pub timestamp: String,
    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside the envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

/// Print the result of a mutating command (`{"data": {...}}`) to stdout
pub fn print_result(data: serde_json::Value) -> Result<(), serde_json::Error> {
    println!("{}", format_json(&data)?);
    Ok(())
}
