//! Check an emoji pack and report what the pipeline would discard.
//!
//! Runs the full pipeline and prints:
//! - how many manifest records there were and how many were dropped as
//!   malformed
//! - every entry removed by alias resolution, with the reason
//! - the number of emoji in the resolved set
//!
//! Without `--strict` the command succeeds as long as the pack can be fetched
//! and is a list. With `--strict`, any dropped record or unresolved alias is
//! an error, which makes the command usable as a CI gate for pack authors.
//!
//! # Examples
//!
//! ```bash
//! emojipack validate default
//! emojipack validate https://example.com/pack.json --format json
//! emojipack validate team --strict
//! ```

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::common::{OutputFormat, to_json};
use crate::fetch::JsonFetcher;
use crate::pack::{LoadedPack, PackLoader, ResolveFailure};

/// Command to validate a pack.
#[derive(Args)]
pub struct ValidateCommand {
    /// Pack name, `default`, or an http(s) manifest URL
    #[arg(value_name = "LOCATION")]
    pub location: String,

    /// Output format: text or json
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Fail if any record was dropped or any alias could not be resolved
    #[arg(long)]
    pub strict: bool,
}

/// Report printed by `validate`.
#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    /// No records dropped and no aliases unresolved
    valid: bool,
    location: &'a str,
    endpoint: &'a str,
    total_records: usize,
    dropped_records: usize,
    emoji: usize,
    failures: &'a [ResolveFailure],
}

impl<'a> ValidationReport<'a> {
    fn from_pack(pack: &'a LoadedPack) -> Self {
        Self {
            valid: pack.dropped_records == 0 && pack.failures.is_empty(),
            location: &pack.location,
            endpoint: &pack.endpoint,
            total_records: pack.total_records,
            dropped_records: pack.dropped_records,
            emoji: pack.set.len(),
            failures: &pack.failures,
        }
    }

    fn render_text(&self) -> String {
        let mut lines = vec![format!("Pack {} ({})", self.location.bold(), self.endpoint)];

        if self.dropped_records == 0 {
            lines.push(format!("{} {} records, all well-formed", "✓".green(), self.total_records));
        } else {
            lines.push(format!(
                "{} {} of {} records dropped as malformed",
                "⚠".yellow(),
                self.dropped_records,
                self.total_records
            ));
        }

        if self.failures.is_empty() {
            lines.push(format!("{} All aliases resolved", "✓".green()));
        } else {
            lines.push(format!("{} {} entries could not be resolved:", "✗".red(), self.failures.len()));
            for failure in self.failures {
                lines.push(format!("  {}: {}", failure.name, failure.reason));
            }
        }

        lines.push(format!("{} emoji in resolved set", self.emoji));
        lines.join("\n")
    }
}

impl ValidateCommand {
    pub async fn execute<F: JsonFetcher>(self, loader: &PackLoader<F>) -> Result<()> {
        let pack = loader.load(&self.location).await?;
        let report = ValidationReport::from_pack(&pack);

        match self.format {
            OutputFormat::Json => println!("{}", to_json(&report, false)?),
            OutputFormat::Text => println!("{}", report.render_text()),
        }

        if self.strict && !report.valid {
            bail!(
                "Pack '{}' failed strict validation: {} records dropped, {} aliases unresolved",
                self.location,
                report.dropped_records,
                report.failures.len()
            );
        }

        Ok(())
    }
}
