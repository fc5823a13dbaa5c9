//! Core domain types for the FAQ knowledge base
//!
//! This crate defines the fundamental data structures used throughout
//! the application: knowledge entries, the knowledge base collection,
//! and the merge engine that reconciles candidate batches with it.

pub mod base;
pub mod entry;
pub mod error;
pub mod merge;

pub use base::KnowledgeBase;
pub use entry::KnowledgeEntry;
pub use error::{CoreError, Result};
pub use merge::{merge, MergeOutcome, MergeReport, MergeStatus};
