//! List the registered emoji packs.
//!
//! Shows the built-in packs merged with the ones from the user configuration,
//! and marks the pack the `default` keyword selects.
//!
//! # Examples
//!
//! ```bash
//! emojipack packs
//! emojipack packs --format json
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::common::{OutputFormat, to_json};
use crate::registry::PackRegistry;

/// Command to list registered packs.
#[derive(Args)]
pub struct PacksCommand {
    /// Output format: text or json
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// One row of `packs --format json`.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct PackListing<'a> {
    name: &'a str,
    location: &'a str,
    default: bool,
}

impl PacksCommand {
    pub fn execute(self, registry: &PackRegistry) -> Result<()> {
        println!("{}", self.render(registry)?);
        Ok(())
    }

    fn render(&self, registry: &PackRegistry) -> Result<String> {
        let listings: Vec<PackListing<'_>> = registry
            .iter()
            .map(|(name, location)| PackListing {
                name,
                location,
                default: name == registry.default_pack(),
            })
            .collect();

        if self.format == OutputFormat::Json {
            return to_json(&listings, false);
        }

        let width = listings.iter().map(|l| l.name.len()).max().unwrap_or(0);
        let lines: Vec<String> = listings
            .iter()
            .map(|listing| {
                let marker = if listing.default {
                    "*".green().bold().to_string()
                } else {
                    " ".to_string()
                };
                let name = format!("{:<width$}", listing.name);
                format!("{marker} {}  {}", name.bold(), listing.location.dimmed())
            })
            .collect();

        Ok(lines.join("\n"))
    }
}
