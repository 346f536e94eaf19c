//! The module contains the `Member` identity value.
use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// A participant in a group.
///
/// `Member` is a pure identity value: two members are equal iff their names
/// are equal. It carries no mutable state, so it can be freely cloned and
/// used as a map key without aliasing hazards.
///
/// Names are canonicalized at construction (NFC normalization, trimmed,
/// inner whitespace collapsed) so the same visual name compares equal
/// regardless of the input encoding.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Member {
    name: String,
}

impl Member {
    /// Creates a member with a canonicalized name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: canonical_name(name),
        }
    }

    /// Returns the member's canonical name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// NFC-normalizes a name and collapses runs of whitespace to single spaces.
fn canonical_name(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for token in input.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(token.nfc());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_name() {
        assert_eq!(Member::new("Alice"), Member::new("Alice"));
        assert_ne!(Member::new("Alice"), Member::new("Bob"));
    }

    #[test]
    fn name_is_canonicalized() {
        assert_eq!(Member::new("  Alice  ").name(), "Alice");
        assert_eq!(Member::new("Mary   Ann").name(), "Mary Ann");
        // "é" composed vs "e" + combining acute
        assert_eq!(Member::new("Jos\u{e9}"), Member::new("Jose\u{301}"));
    }
}
