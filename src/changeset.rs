use serde::Serialize;

use crate::error::Result;
use crate::parser;
use crate::types::{StatusEntry, StatusFormat};

/// A snapshot of changed paths in canonical `(kind, path)` order.
///
/// Every constructor sorts its input, so equality is independent of the order
/// in which the raw listing reported the entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChangeSet {
    entries: Vec<StatusEntry>,
}

impl ChangeSet {
    /// Builds the canonical form, sorting entries by `(kind, path)`.
    #[must_use]
    pub fn new(mut entries: Vec<StatusEntry>) -> Self {
        entries.sort();
        Self { entries }
    }

    /// Parses a raw listing in the given format into a canonical change set.
    ///
    /// # Errors
    ///
    /// Returns an error if any line of the listing is malformed.
    pub fn parse(raw: &str, format: StatusFormat) -> Result<Self> {
        parser::parse_snapshot(raw, format.separator()).map(Self::new)
    }

    #[must_use]
    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StatusEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<StatusEntry>> for ChangeSet {
    fn from(entries: Vec<StatusEntry>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<StatusEntry> for ChangeSet {
    fn from_iter<I: IntoIterator<Item = StatusEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a StatusEntry;
    type IntoIter = std::slice::Iter<'a, StatusEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
