//! Emoji pack normalization pipeline.
//!
//! A pack manifest is an untrusted JSON array of records. This module turns it
//! into an [`EmojiSet`]: a mapping from emoji name to a directly usable image
//! reference. The pipeline runs strictly forward:
//!
//! ```text
//! raw JSON list ─▶ validate ─▶ reduce ─▶ resolve ─▶ EmojiSet
//! ```
//!
//! - [`validate`] drops records that are not objects with non-empty string
//!   `name` and `reference` fields
//! - [`reduce`] folds the surviving records into a map, last write wins
//! - [`resolve`] rewrites `alias:` references into the direct URL at the end of
//!   the chain and drops entries whose chain is broken, cyclic, or invalid
//!
//! Per-record problems never fail a run. Only a failed fetch, an unknown
//! location, or a manifest that is not a list does, and those are handled by
//! [`PackLoader`].
//!
//! # Example
//!
//! ```rust,no_run
//! use emojipack::pack::{reduce, resolve, validate_all};
//! use serde_json::json;
//!
//! let raw = vec![
//!     json!({"name": "party", "reference": "https://example.com/party.png"}),
//!     json!({"name": "tada", "reference": "alias:party"}),
//!     json!(null),
//! ];
//!
//! let validated = validate_all(&raw);
//! let set = resolve(&reduce(validated.items));
//! assert_eq!(set["tada"].reference, "https://example.com/party.png");
//! ```

mod loader;
mod reduce;
mod reference;
mod resolve;
mod validate;

pub use loader::{LoadedPack, PackLoader};
pub use reduce::reduce;
pub use reference::ReferenceKind;
pub use resolve::{FailureReason, Resolution, ResolveFailure, resolve, resolve_with_report};
pub use validate::{Validated, validate, validate_all};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A manifest record that passed validation.
///
/// Both `name` and `reference` are guaranteed non-empty. The reference has not
/// been classified yet; it may still be an alias or something unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackItem {
    /// Emoji name, used as the key in the [`EmojiSet`].
    pub name: String,
    /// Image reference: a URL, an `alias:` marker, or garbage.
    pub reference: String,
    /// Optional fallback image location, carried through untouched.
    pub backup_reference: Option<String>,
}

/// The value side of an [`EmojiSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiEntry {
    /// Image reference. Always a direct `http(s)://` URL after resolution.
    pub reference: String,
    /// Optional fallback image location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_reference: Option<String>,
}

impl EmojiEntry {
    /// Create an entry with no backup reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            backup_reference: None,
        }
    }

    /// Set the backup reference.
    #[must_use]
    pub fn with_backup(mut self, backup_reference: impl Into<String>) -> Self {
        self.backup_reference = Some(backup_reference.into());
        self
    }
}

impl PackItem {
    /// Split into the set key and its entry.
    pub fn into_entry(self) -> (String, EmojiEntry) {
        (
            self.name,
            EmojiEntry {
                reference: self.reference,
                backup_reference: self.backup_reference,
            },
        )
    }
}

/// Mapping from emoji name to its entry.
///
/// Ordered so serialized output is stable across runs.
pub type EmojiSet = BTreeMap<String, EmojiEntry>;

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
