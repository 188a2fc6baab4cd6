//! Folding validated records into an [`EmojiSet`].

use tracing::debug;

use super::{EmojiSet, PackItem};

/// Fold items left to right into a set keyed by name.
///
/// When two items share a name the later one replaces the earlier one
/// entirely; sub-fields are never merged.
pub fn reduce(items: impl IntoIterator<Item = PackItem>) -> EmojiSet {
    items.into_iter().fold(EmojiSet::new(), |mut set, item| {
        let (name, entry) = item.into_entry();
        if let Some(previous) = set.insert(name, entry) {
            debug!("Duplicate emoji name, replacing earlier reference {}", previous.reference);
        }
        set
    })
}
