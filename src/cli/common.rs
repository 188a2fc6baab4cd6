//! Common utilities shared by CLI commands

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Output format for command results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors and symbols.
    #[default]
    Text,

    /// Machine-parseable JSON.
    Json,
}

/// Serialize `value` as JSON, pretty-printed unless `compact`.
pub fn to_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.context("Failed to serialize output as JSON")
}

/// Write `contents` to `path`, followed by a trailing newline.
pub async fn write_output(path: &Path, contents: &str) -> Result<()> {
    tokio::fs::write(path, format!("{contents}\n"))
        .await
        .with_context(|| format!("Failed to write output to {}", path.display()))
}
