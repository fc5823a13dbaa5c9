//! Whole-file JSON load/save for the knowledge base

use std::fs;
use std::io;
use std::path::Path;

use faqkb_core::KnowledgeBase;
use tracing::debug;

use crate::error::{Result, StoreError};

/// Load the full knowledge base from a JSON file.
///
/// Returns [`StoreError::NotFound`] if the file does not exist and
/// [`StoreError::Corrupt`] if its content is not a JSON array of
/// entry-shaped records. Entries come back in on-disk order; optional
/// fields such as `synonyms` and `tags` default to empty sequences.
pub fn load(path: impl AsRef<Path>) -> Result<KnowledgeBase> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let base: KnowledgeBase = serde_json::from_str(&text).map_err(|e| StoreError::Corrupt {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!("Loaded {} entries from {}", base.len(), path.display());
    Ok(base)
}

/// Serialize the full knowledge base back to `path`, overwriting it.
///
/// The output is pretty-printed UTF-8 JSON with non-ASCII text kept
/// literal, so the store stays human-editable and a subsequent
/// [`load`] reproduces an equivalent collection. The in-memory
/// knowledge base is unaffected by a failed save.
pub fn save(path: impl AsRef<Path>, base: &KnowledgeBase) -> Result<()> {
    let path = path.as_ref();

    let mut text = serde_json::to_string_pretty(base).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    text.push('\n');

    fs::write(path, text).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!("Saved {} entries to {}", base.len(), path.display());
    Ok(())
}

/// Create an empty knowledge store at `path`.
///
/// Fails with [`StoreError::AlreadyExists`] rather than truncating an
/// existing store.
pub fn init(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Err(StoreError::AlreadyExists(path.to_path_buf()));
    }
    save(path, &KnowledgeBase::new())
}
