//! Global configuration management for emojipack.
//!
//! This module handles the user configuration file (`~/.emojipack/config.toml`)
//! which registers additional emoji packs and tunes the manifest fetcher.
//!
//! # Configuration File Location
//!
//! - **Unix/macOS**: `~/.emojipack/config.toml`
//! - **Windows**: `%LOCALAPPDATA%\emojipack\config.toml`
//!
//! The location can be overridden with the `EMOJIPACK_CONFIG` environment
//! variable or the `--config` flag. A missing file is not an error; defaults
//! are used.
//!
//! # File Format
//!
//! ```toml
//! # Pack selected by `emojipack fetch default`
//! default_pack = "team"
//!
//! # Request timeout in seconds, and retries for connection failures
//! fetch_timeout_secs = 10
//! fetch_retries = 3
//!
//! [packs]
//! team = "https://cdn.example.com/emoji/team.json"
//! offline = "/srv/emoji/offline.json"
//! ```
//!
//! Pack locations may be `http(s)://` URLs, `file://` URLs, or local paths.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::constants::{CONFIG_PATH_ENV, DEFAULT_FETCH_RETRIES, DEFAULT_FETCH_TIMEOUT_SECS};

const fn default_fetch_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

const fn default_fetch_retries() -> usize {
    DEFAULT_FETCH_RETRIES
}

/// Contents of the user configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Pack selected by the `default` keyword. Built-in default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_pack: Option<String>,

    /// Additional packs by name. Override built-ins with the same name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub packs: BTreeMap<String, String>,

    /// Per-request timeout for remote manifests, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Retries for connection failures and timeouts.
    #[serde(default = "default_fetch_retries")]
    pub fetch_retries: usize,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_pack: None,
            packs: BTreeMap::new(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            fetch_retries: default_fetch_retries(),
        }
    }
}

impl GlobalConfig {
    /// Load from the default location, or defaults if the file does not exist.
    pub async fn load() -> Result<Self> {
        Self::load_with_optional(None).await
    }

    /// Load from `path` if given, otherwise from the default location.
    ///
    /// A missing file yields defaults. An explicitly given path that does not
    /// exist also yields defaults, so a fresh `EMOJIPACK_CONFIG` location can
    /// be pointed at before the file is created.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };

        if path.exists() {
            Self::load_from(&path).await
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        debug!("Loaded config from {} ({} packs)", path.display(), config.packs.len());
        Ok(config)
    }

    /// Default config file location.
    ///
    /// `EMOJIPACK_CONFIG` wins when set.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("emojipack")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".emojipack")
        };

        Ok(config_dir.join("config.toml"))
    }
}
