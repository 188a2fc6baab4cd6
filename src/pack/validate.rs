//! Record-level validation of raw manifest entries.

use serde_json::{Map, Value};
use tracing::trace;

use super::PackItem;

/// Keys accepted for the reference field, in priority order.
///
/// Older manifests use `url`.
const REFERENCE_KEYS: &[&str] = &["reference", "url"];

/// Keys accepted for the backup reference field, in priority order.
const BACKUP_REFERENCE_KEYS: &[&str] = &["backupReference", "backup_url"];

/// Result of validating a whole manifest list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validated {
    /// Records that passed, in manifest order.
    pub items: Vec<PackItem>,
    /// Number of records that were dropped.
    pub dropped: usize,
}

/// Narrow one raw manifest element to a [`PackItem`].
///
/// Returns `None` unless `raw` is an object with a non-empty string `name` and
/// a non-empty string `reference`. The reference scheme is not checked here,
/// so `alias:` markers pass through to the resolver.
///
/// A backup reference that is present but not a non-empty string is ignored;
/// it does not reject the record.
pub fn validate(raw: &Value) -> Option<PackItem> {
    let record = raw.as_object()?;
    let name = non_empty_str(record.get("name"))?;
    let reference = non_empty_str(first_present(record, REFERENCE_KEYS))?;
    let backup_reference = non_empty_str(first_present(record, BACKUP_REFERENCE_KEYS));

    Some(PackItem {
        name: name.to_string(),
        reference: reference.to_string(),
        backup_reference: backup_reference.map(str::to_string),
    })
}

/// Validate every element of a manifest list, dropping the malformed ones.
pub fn validate_all(raw: &[Value]) -> Validated {
    let mut validated = Validated {
        items: Vec::with_capacity(raw.len()),
        dropped: 0,
    };

    for (index, element) in raw.iter().enumerate() {
        match validate(element) {
            Some(item) => validated.items.push(item),
            None => {
                trace!("Dropping malformed manifest record at index {index}");
                validated.dropped += 1;
            }
        }
    }

    validated
}

fn first_present<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| record.get(*key))
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
