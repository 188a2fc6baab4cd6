//! Classification of reference strings.

use crate::constants::{ALIAS_PREFIX, DIRECT_SCHEMES};

/// What a reference string points at.
///
/// Every reference is exactly one of these. Only [`ReferenceKind::Direct`]
/// references survive resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind<'a> {
    /// An absolute `http://` or `https://` location.
    Direct(&'a str),
    /// `alias:<name>`; holds the target name.
    Alias(&'a str),
    /// Anything else.
    Invalid,
}

impl<'a> ReferenceKind<'a> {
    /// Classify a reference. Prefix matching is case-sensitive.
    pub fn classify(reference: &'a str) -> Self {
        if DIRECT_SCHEMES.iter().any(|scheme| reference.starts_with(scheme)) {
            Self::Direct(reference)
        } else if let Some(target) = reference.strip_prefix(ALIAS_PREFIX) {
            Self::Alias(target)
        } else {
            Self::Invalid
        }
    }

    pub fn is_direct(&self) -> bool {
        matches!(self, Self::Direct(_))
    }
}
