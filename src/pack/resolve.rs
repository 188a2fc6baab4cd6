//! Alias resolution.
//!
//! An entry whose reference is `alias:<target>` takes its image from another
//! entry in the same set. Resolution follows the chain until it reaches a
//! direct `http(s)://` reference and rewrites the entry to point there, so no
//! entry in the output points through an intermediate alias.
//!
//! # Failure handling
//!
//! A chain fails when it reaches a name that is not in the set, revisits a name
//! it has already walked through (a cycle), or hits a reference that is neither
//! direct nor an alias. Failed entries are removed from the output and
//! reported as [`ResolveFailure`]s; the rest of the set is unaffected.
//!
//! # Ordering
//!
//! Chains are always walked against the input set, which is borrowed
//! immutably, and results are written to a fresh map. The outcome for an entry
//! therefore never depends on the order entries are visited in.
//!
//! The walk is iterative with an explicit visited set, so neither long chains
//! nor cycles can exhaust the stack. Each entry's outcome is memoized, and
//! every name on a walked chain shares the chain's outcome, so each entry is
//! walked at most once.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, warn};

use super::{EmojiEntry, EmojiSet, ReferenceKind};

/// Why an entry could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// The chain reached an alias whose target is not in the set.
    MissingTarget {
        /// The name that was looked up
        target: String,
    },
    /// The chain loops back to a name it already walked through.
    Cycle {
        /// The first name visited twice
        revisited: String,
    },
    /// The chain reached an entry whose reference is neither direct nor an
    /// alias.
    InvalidReference {
        /// Entry holding the unusable reference
        entry: String,
        /// The unusable reference
        reference: String,
    },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget {
                target,
            } => write!(f, "alias target '{target}' does not exist"),
            Self::Cycle {
                revisited,
            } => write!(f, "alias chain loops back to '{revisited}'"),
            Self::InvalidReference {
                entry,
                reference,
            } => write!(f, "entry '{entry}' has unusable reference '{reference}'"),
        }
    }
}

/// A per-entry diagnostic produced by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveFailure {
    /// The entry that was removed
    pub name: String,
    /// Why it was removed
    pub reason: FailureReason,
}

impl fmt::Display for ResolveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.reason)
    }
}

/// Resolved set plus the diagnostics for entries that were removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Entries whose reference is direct
    pub set: EmojiSet,
    /// One failure per removed entry, in name order
    pub failures: Vec<ResolveFailure>,
}

#[derive(Debug, Clone)]
enum Outcome<'a> {
    Direct(&'a str),
    Failed(FailureReason),
}

/// Resolve every alias in `set`, dropping entries that cannot be resolved.
///
/// Every `reference` in the result is direct. Resolving an already resolved
/// set returns it unchanged.
pub fn resolve(set: &EmojiSet) -> EmojiSet {
    resolve_with_report(set).set
}

/// Like [`resolve`], but also returns the per-entry failures.
///
/// Each failure is logged at `warn` level as it is found.
pub fn resolve_with_report(set: &EmojiSet) -> Resolution {
    let mut outcomes: HashMap<&str, Outcome<'_>> = HashMap::with_capacity(set.len());
    let mut resolution = Resolution::default();

    for (name, entry) in set {
        let outcome = match outcomes.get(name.as_str()) {
            Some(outcome) => outcome.clone(),
            None => {
                let (chain, outcome) = walk(set, name, &outcomes);
                for link in chain {
                    outcomes.insert(link, outcome.clone());
                }
                outcome
            }
        };

        match outcome {
            Outcome::Direct(reference) => {
                if reference != entry.reference {
                    debug!("Resolved alias {name} -> {reference}");
                }
                resolution.set.insert(
                    name.clone(),
                    EmojiEntry {
                        reference: reference.to_string(),
                        backup_reference: entry.backup_reference.clone(),
                    },
                );
            }
            Outcome::Failed(reason) => {
                warn!("Dropping emoji '{name}': {reason}");
                resolution.failures.push(ResolveFailure {
                    name: name.clone(),
                    reason,
                });
            }
        }
    }

    resolution
}

/// Follow the chain starting at `start`.
///
/// Returns the names walked through (all of which share the outcome) and the
/// outcome. Stops early on a name whose outcome is already known.
fn walk<'a>(
    set: &'a EmojiSet,
    start: &'a str,
    known: &HashMap<&'a str, Outcome<'a>>,
) -> (Vec<&'a str>, Outcome<'a>) {
    let mut chain: Vec<&'a str> = Vec::new();
    let mut visited: HashSet<&'a str> = HashSet::new();
    let mut current = start;

    let outcome = loop {
        if let Some(outcome) = known.get(current) {
            break outcome.clone();
        }

        if !visited.insert(current) {
            break Outcome::Failed(FailureReason::Cycle {
                revisited: current.to_string(),
            });
        }

        let Some((key, entry)) = set.get_key_value(current) else {
            break Outcome::Failed(FailureReason::MissingTarget {
                target: current.to_string(),
            });
        };
        chain.push(key.as_str());

        match ReferenceKind::classify(&entry.reference) {
            ReferenceKind::Direct(reference) => break Outcome::Direct(reference),
            ReferenceKind::Alias(target) => current = target,
            ReferenceKind::Invalid => {
                break Outcome::Failed(FailureReason::InvalidReference {
                    entry: key.clone(),
                    reference: entry.reference.clone(),
                });
            }
        }
    };

    (chain, outcome)
}
