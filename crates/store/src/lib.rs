//! Storage layer for the FAQ knowledge base
//!
//! The store is a single human-editable JSON file holding the full
//! collection: one read at process start, one rewrite at process end.
//! Whole-file read/rewrite is acceptable because the collection is
//! small (hundreds of entries) and updates are infrequent batches.

pub mod error;
pub mod file;

pub use error::{Result, StoreError};
pub use file::{init, load, save};
