//! Command-line interface for emojipack.
//!
//! # Available Commands
//!
//! - `packs` - List the registered emoji packs
//! - `fetch` - Build the resolved emoji set for a pack and print it as JSON
//! - `validate` - Report dropped records and unresolvable aliases in a pack
//!
//! A location is a registered pack name, the `default` keyword, or an absolute
//! `http(s)://` manifest URL.
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Only log errors
//! - `--config` - Path to a custom config file (also `EMOJIPACK_CONFIG`)
//!
//! Logs go to stderr; command output goes to stdout.
//!
//! # Example
//!
//! ```bash
//! emojipack packs
//! emojipack fetch default > emoji.json
//! emojipack validate https://example.com/pack.json --strict
//! ```

pub mod common;
mod fetch;
mod packs;
mod validate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::GlobalConfig;
use crate::constants::CONFIG_PATH_ENV;
use crate::fetch::HttpFetcher;
use crate::pack::PackLoader;
use crate::registry::PackRegistry;

/// Runtime settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive. `None` falls back to `RUST_LOG`, then `warn`.
    pub log_level: Option<String>,

    /// Explicit config file path.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global `tracing` subscriber. Safe to call more than once.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

#[derive(Parser)]
#[command(
    name = "emojipack",
    about = "Fetch, validate and alias-resolve emoji pack manifests",
    version,
    long_about = "emojipack turns third-party emoji pack manifests into a name -> image URL map, \
                  dropping malformed records and resolving alias: references."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the config file.
    #[arg(short, long, global = true, env = CONFIG_PATH_ENV, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered emoji packs.
    ///
    /// See [`packs::PacksCommand`].
    Packs(packs::PacksCommand),

    /// Build the resolved emoji set for a pack and print it as JSON.
    ///
    /// See [`fetch::FetchCommand`].
    Fetch(fetch::FetchCommand),

    /// Report dropped records and unresolvable aliases in a pack.
    ///
    /// See [`validate::ValidateCommand`].
    Validate(validate::ValidateCommand),
}

impl Cli {
    /// Execute the CLI with configuration built from the parsed flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate the global flags into a [`CliConfig`].
    ///
    /// `--verbose` maps to `debug`, `--quiet` to `error`; otherwise the
    /// level is left to `RUST_LOG`.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Execute the CLI with an externally supplied configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        let global = GlobalConfig::load_with_optional(config.config_path.clone()).await?;
        let registry = PackRegistry::from_config(&global)?;
        debug!("Registry has {} packs, default '{}'", registry.names().len(), registry.default_pack());

        match self.command {
            Commands::Packs(cmd) => cmd.execute(&registry),
            Commands::Fetch(cmd) => cmd.execute(&build_loader(registry, &global)?).await,
            Commands::Validate(cmd) => cmd.execute(&build_loader(registry, &global)?).await,
        }
    }
}

fn build_loader(registry: PackRegistry, config: &GlobalConfig) -> Result<PackLoader<HttpFetcher>> {
    let fetcher = HttpFetcher::from_config(config).context("Failed to initialize HTTP client")?;
    Ok(PackLoader::new(registry, fetcher))
}
