//! Build the resolved emoji set for a pack and print it as JSON.
//!
//! The output is an object keyed by emoji name, sorted, where every value has
//! a direct `reference` and optionally a `backupReference`:
//!
//! ```json
//! {
//!   "party": { "reference": "https://cdn.example.com/party.png" },
//!   "tada": { "reference": "https://cdn.example.com/party.png" }
//! }
//! ```
//!
//! # Examples
//!
//! ```bash
//! emojipack fetch default
//! emojipack fetch https://example.com/pack.json --compact
//! emojipack fetch team --output emoji.json
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::common::{to_json, write_output};
use crate::fetch::JsonFetcher;
use crate::pack::PackLoader;

/// Command to build and print an emoji set.
#[derive(Args)]
pub struct FetchCommand {
    /// Pack name, `default`, or an http(s) manifest URL
    #[arg(value_name = "LOCATION")]
    pub location: String,

    /// Write the set to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

impl FetchCommand {
    pub async fn execute<F: JsonFetcher>(self, loader: &PackLoader<F>) -> Result<()> {
        let set = loader.build_emoji_set(&self.location).await?;
        let json = to_json(&set, self.compact)?;

        match &self.output {
            Some(path) => {
                write_output(path, &json).await?;
                info!("Wrote {} emoji to {}", set.len(), path.display());
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}
