//! The persistence collaborator's contract.
//!
//! The document store behind the card (remote, async, whatever) is not this
//! crate's concern. The editing core hands it one markdown string per field
//! and gets one back; failures arrive as an opaque [`StoreError`] the core
//! passes to the caller without interpreting. Retries and recovery belong
//! to the host.

use std::collections::HashMap;

use thiserror::Error;

/// Opaque failure signal from a store implementation.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct StoreError(#[from] anyhow::Error);

impl StoreError {
    pub fn new(source: impl Into<anyhow::Error>) -> Self {
        Self(source.into())
    }
}

/// One markdown string per editable field, keyed by the field's path within
/// the card (e.g. `"letter.content"`, `"slides.<id>.caption"`).
pub trait FieldStore {
    fn load_field(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save_field(&mut self, key: &str, content: &str) -> Result<(), StoreError>;
}

/// In-memory store, used in tests and by hosts that keep unsaved drafts
/// locally before syncing.
#[derive(Debug, Default)]
pub struct MemoryStore {
    fields: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldStore for MemoryStore {
    fn load_field(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.fields.get(key).cloned())
    }

    fn save_field(&mut self, key: &str, content: &str) -> Result<(), StoreError> {
        self.fields.insert(key.to_string(), content.to_string());
        Ok(())
    }
}
