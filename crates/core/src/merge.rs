//! Merge engine - reconciles a candidate batch with the knowledge base
//!
//! Candidates whose keyword already exists (case-insensitively) are
//! skipped; everything else is appended in batch order. Existing
//! entries are never modified. The merge is a pure transformation:
//! it touches no storage and leaves the input collection untouched.

use std::fmt;

use crate::base::KnowledgeBase;
use crate::entry::KnowledgeEntry;
use crate::error::Result;

/// Per-candidate merge outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStatus {
    /// The candidate was appended to the knowledge base
    Added,
    /// An entry with the same keyword already exists
    Skipped,
}

impl fmt::Display for MergeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeStatus::Added => write!(f, "added"),
            MergeStatus::Skipped => write!(f, "skipped"),
        }
    }
}

/// The outcome recorded for one candidate, in batch order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub keyword: String,
    pub status: MergeStatus,
}

/// The result of a merge: the extended knowledge base plus
/// per-candidate outcomes in batch order
#[derive(Debug, Clone)]
pub struct MergeReport {
    pub base: KnowledgeBase,
    pub outcomes: Vec<MergeOutcome>,
}

impl MergeReport {
    /// Number of candidates that were appended
    pub fn added(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == MergeStatus::Added)
            .count()
    }

    /// Number of candidates that were skipped as duplicates
    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.added()
    }
}

/// Merge a candidate batch into the knowledge base.
///
/// For each candidate in order, the keyword is checked against the
/// extended collection - including candidates appended earlier in the
/// same call, so duplicates within the batch are detected and only the
/// first occurrence is kept. Matching is case-insensitive on the full
/// keyword string; synonyms are never consulted, so a candidate with a
/// new keyword but overlapping synonyms is still added.
///
/// A candidate missing a required field fails the whole merge with
/// [`CoreError::InvalidEntry`](crate::CoreError::InvalidEntry) before
/// any outcome is produced.
pub fn merge(existing: &KnowledgeBase, candidates: Vec<KnowledgeEntry>) -> Result<MergeReport> {
    // Validate the whole batch up front so a bad candidate can never
    // leave a partially merged result.
    for candidate in &candidates {
        candidate.validate()?;
    }

    let mut base = existing.clone();
    let mut outcomes = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let status = if base.contains_keyword(&candidate.keyword) {
            MergeStatus::Skipped
        } else {
            MergeStatus::Added
        };
        outcomes.push(MergeOutcome {
            keyword: candidate.keyword.clone(),
            status,
        });
        if status == MergeStatus::Added {
            base.push(candidate);
        }
    }

    Ok(MergeReport { base, outcomes })
}
