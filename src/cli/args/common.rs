//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - rounded tables grouped under headings (default)
    #[default]
    Pretty,
    /// Table format - borderless, one row per entry
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}
