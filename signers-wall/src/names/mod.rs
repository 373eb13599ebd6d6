//! Turns raw signer CSV text into a [`NameSequence`] ready for looping.
//!
//! The pipeline is parse → shuffle → repeat → duplicate. The duplicated
//! halves are what let the scroll engine jump from the halfway point back
//! to the top without a visible seam.

mod parse;
mod prepare;
mod shuffle;

use std::fmt;
use std::ops::Deref;

pub use parse::parse_names;
pub use prepare::{DEFAULT_REPEAT, prepare_sequence, repeat_for_loop};
pub use shuffle::shuffle;

/// A single trimmed, non-empty display name.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NameEntry(String);

impl NameEntry {
    /// Returns `None` when `raw` is blank after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for NameEntry {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NameEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for NameEntry {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Two back-to-back copies of the same shuffled, repeated base list.
///
/// Only [`repeat_for_loop`] (and therefore [`prepare_sequence`]) can build a
/// non-empty sequence, which keeps the halves identical by construction.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NameSequence {
    entries: Vec<NameEntry>,
}

impl NameSequence {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_halves(half: Vec<NameEntry>) -> Self {
        let mut entries = Vec::with_capacity(half.len() * 2);
        entries.extend_from_slice(&half);
        entries.extend(half);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[NameEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NameEntry> {
        self.entries.iter()
    }

    pub fn first_half(&self) -> &[NameEntry] {
        &self.entries[..self.entries.len() / 2]
    }

    pub fn second_half(&self) -> &[NameEntry] {
        &self.entries[self.entries.len() / 2..]
    }
}

impl<'a> IntoIterator for &'a NameSequence {
    type Item = &'a NameEntry;
    type IntoIter = std::slice::Iter<'a, NameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_entry_trims_and_rejects_blank() {
        assert_eq!(NameEntry::new("  Ada Lovelace \t").unwrap(), "Ada Lovelace");
        assert!(NameEntry::new("").is_none());
        assert!(NameEntry::new("   \t ").is_none());
    }

    #[test]
    fn empty_sequence_has_empty_halves() {
        let sequence = NameSequence::empty();
        assert!(sequence.is_empty());
        assert!(sequence.first_half().is_empty());
        assert!(sequence.second_half().is_empty());
    }

    #[test]
    fn from_halves_duplicates_in_order() {
        let half = vec![
            NameEntry::new("b").unwrap(),
            NameEntry::new("a").unwrap(),
        ];
        let sequence = NameSequence::from_halves(half);
        let names: Vec<&str> = sequence.iter().map(NameEntry::as_str).collect();
        assert_eq!(names, vec!["b", "a", "b", "a"]);
    }
}
