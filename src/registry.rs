//! Registry of named emoji packs.
//!
//! Maps short pack names to manifest locations. A location handed to the
//! pipeline is either one of these names (or the `default` keyword), or an
//! absolute `http(s)://` URL used as is.
//!
//! The built-in registry knows one pack, `epk-emoji-store`. Entries from the
//! user's configuration are merged on top and override built-ins with the same
//! name.

use std::collections::BTreeMap;
use strsim::levenshtein;

use crate::config::GlobalConfig;
use crate::constants::{
    BUILTIN_DEFAULT_PACK, BUILTIN_DEFAULT_PACK_URL, DEFAULT_PACK_KEYWORD,
    SIMILARITY_THRESHOLD_PERCENT,
};
use crate::core::EmojiPackError;
use crate::fetch::is_remote;

/// Pack name → manifest location, plus which pack `default` means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackRegistry {
    packs: BTreeMap<String, String>,
    default_pack: String,
}

impl Default for PackRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PackRegistry {
    /// The registry compiled into the binary.
    pub fn builtin() -> Self {
        let mut packs = BTreeMap::new();
        packs.insert(BUILTIN_DEFAULT_PACK.to_string(), BUILTIN_DEFAULT_PACK_URL.to_string());

        Self {
            packs,
            default_pack: BUILTIN_DEFAULT_PACK.to_string(),
        }
    }

    /// Built-ins merged with the packs from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`EmojiPackError::ConfigError`] if a configured pack has an empty
    /// name or location, uses the reserved `default` name, or if
    /// `default_pack` names a pack that is not registered.
    pub fn from_config(config: &GlobalConfig) -> Result<Self, EmojiPackError> {
        let mut registry = Self::builtin();

        for (name, location) in &config.packs {
            if name.is_empty() || location.trim().is_empty() {
                return Err(EmojiPackError::ConfigError {
                    message: format!("pack '{name}' must have a non-empty name and location"),
                });
            }
            if name == DEFAULT_PACK_KEYWORD {
                return Err(EmojiPackError::ConfigError {
                    message: format!("'{DEFAULT_PACK_KEYWORD}' is reserved and cannot name a pack"),
                });
            }
            registry.packs.insert(name.clone(), location.clone());
        }

        if let Some(default_pack) = &config.default_pack {
            if !registry.packs.contains_key(default_pack) {
                return Err(EmojiPackError::ConfigError {
                    message: format!("default_pack '{default_pack}' is not a registered pack"),
                });
            }
            registry.default_pack = default_pack.clone();
        }

        Ok(registry)
    }

    /// Register (or replace) a pack.
    #[must_use]
    pub fn with_pack(mut self, name: impl Into<String>, location: impl Into<String>) -> Self {
        self.packs.insert(name.into(), location.into());
        self
    }

    pub fn default_pack(&self) -> &str {
        &self.default_pack
    }

    /// Registered pack names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.packs.keys().map(String::as_str).collect()
    }

    /// Iterate over `(name, location)` pairs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.packs.iter().map(|(name, location)| (name.as_str(), location.as_str()))
    }

    /// Look up a pack by name. `default` resolves to the default pack.
    ///
    /// Returns the canonical pack name and its manifest location.
    pub fn lookup(&self, name: &str) -> Option<(&str, &str)> {
        let name = if name == DEFAULT_PACK_KEYWORD {
            self.default_pack.as_str()
        } else {
            name
        };
        self.packs.get_key_value(name).map(|(name, location)| (name.as_str(), location.as_str()))
    }

    /// Turn a caller-supplied location into the manifest location to fetch.
    ///
    /// Registered names win over URLs, so a pack may be named after a URL
    /// without surprises.
    ///
    /// # Errors
    ///
    /// [`EmojiPackError::InvalidLocation`] when `location` is neither a
    /// registered name nor an absolute `http(s)://` URL. Close registered names
    /// are included as suggestions.
    pub fn endpoint(&self, location: &str) -> Result<String, EmojiPackError> {
        if let Some((_, endpoint)) = self.lookup(location) {
            return Ok(endpoint.to_string());
        }

        if is_remote(location) {
            return Ok(location.to_string());
        }

        Err(EmojiPackError::InvalidLocation {
            location: location.to_string(),
            suggestions: self.suggestions(location),
        })
    }

    /// Registered names within edit distance of `name`, closest first, at
    /// most three.
    pub fn suggestions(&self, name: &str) -> Vec<String> {
        let max_distance = name.chars().count() * SIMILARITY_THRESHOLD_PERCENT / 100;

        let mut scored: Vec<(&String, usize)> =
            self.packs.keys().map(|pack| (pack, levenshtein(name, pack))).collect();
        scored.sort_by_key(|(_, distance)| *distance);

        scored
            .into_iter()
            .filter(|(_, distance)| *distance <= max_distance)
            .take(3)
            .map(|(pack, _)| pack.clone())
            .collect()
    }
}
