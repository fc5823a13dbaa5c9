//! The knowledge base - an ordered collection of entries

use serde::{Deserialize, Serialize};

use crate::entry::KnowledgeEntry;

/// An ordered sequence of knowledge entries.
///
/// Invariant: no two entries share a `keyword` under case-insensitive
/// comparison. The merge engine preserves this across merges; entries
/// are only ever appended, never edited or removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing sequence of entries, preserving order
    pub fn from_entries(entries: Vec<KnowledgeEntry>) -> Self {
        Self { entries }
    }

    /// The entries in insertion order
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KnowledgeEntry> {
        self.entries.iter()
    }

    /// True if any entry's keyword equals `keyword` case-insensitively
    /// (full string, no trimming, synonyms not consulted)
    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.entries.iter().any(|e| e.matches_keyword(keyword))
    }

    /// Append an entry to the end of the collection
    pub fn push(&mut self, entry: KnowledgeEntry) {
        self.entries.push(entry);
    }
}

impl IntoIterator for KnowledgeBase {
    type Item = KnowledgeEntry;
    type IntoIter = std::vec::IntoIter<KnowledgeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a KnowledgeBase {
    type Item = &'a KnowledgeEntry;
    type IntoIter = std::slice::Iter<'a, KnowledgeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
