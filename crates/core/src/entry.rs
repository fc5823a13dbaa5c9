//! Knowledge entries - the atomic units of the knowledge base

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// One answerable FAQ/topic unit.
///
/// The `keyword` is the canonical question phrase and serves as the
/// deduplication identity (case-insensitive, full string). Everything
/// else is carried through unchanged for downstream retrieval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KnowledgeEntry {
    /// Canonical question/topic phrase, the dedup identity
    pub keyword: String,

    /// Response content; may contain embedded line breaks and
    /// bullet-style formatting understood by downstream renderers
    pub answer: String,

    /// Alternate phrasings (insertion order, may be empty)
    #[serde(default)]
    pub synonyms: Vec<String>,

    /// Short classification label
    #[serde(default)]
    pub category: String,

    /// Labels for faceted lookup (duplicates tolerated)
    #[serde(default)]
    pub tags: Vec<String>,

    /// Ranking hint, opaque to this crate
    #[serde(default = "default_priority")]
    pub priority: i64,

    /// Provenance label
    #[serde(default)]
    pub source: String,
}

fn default_priority() -> i64 {
    1
}

impl KnowledgeEntry {
    /// Create a new entry with a keyword and answer
    pub fn new(keyword: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            answer: answer.into(),
            synonyms: Vec::new(),
            category: String::new(),
            tags: Vec::new(),
            priority: 1,
            source: String::new(),
        }
    }

    /// Builder pattern: set synonyms
    pub fn with_synonyms(mut self, synonyms: Vec<String>) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Builder pattern: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder pattern: set tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Builder pattern: set priority
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Builder pattern: set source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Case-insensitive identity check against another keyword.
    ///
    /// Full-string comparison only: no trimming, no partial matching,
    /// and synonyms are never consulted.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.keyword.to_lowercase() == keyword.to_lowercase()
    }

    /// Check that the required fields are present and non-blank.
    ///
    /// A blank keyword would corrupt the key space of the knowledge
    /// base, so callers are expected to fail fast on an error here.
    pub fn validate(&self) -> Result<()> {
        if self.keyword.trim().is_empty() {
            return Err(CoreError::InvalidEntry(
                "entry is missing a keyword".into(),
            ));
        }
        if self.answer.trim().is_empty() {
            return Err(CoreError::InvalidEntry(format!(
                "entry '{}' is missing an answer",
                self.keyword
            )));
        }
        Ok(())
    }
}
