pub mod custom;
pub mod snapshot;
pub mod tables;

pub use custom::*;
pub use snapshot::*;

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("A custom symptom named '{symptom}' already exists")]
    DuplicateName { symptom: String },

    #[error("Invalid dictionary entry: {0}")]
    InvalidEntry(String),

    #[error("Internal lock failed")]
    LockFailed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Holder of the current dictionary snapshot.
///
/// Readers clone the `Arc` and keep a consistent snapshot for the whole
/// call; writers build a successor snapshot and swap it in under the write
/// lock, so a reader never observes a half-applied change.
pub struct DictionaryStore {
    current: RwLock<Arc<DictionarySnapshot>>,
}

impl DictionaryStore {
    pub fn new(snapshot: DictionarySnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Store holding only the shipped tables.
    pub fn builtin() -> Self {
        Self::new(DictionarySnapshot::builtin())
    }

    /// Store seeded from a custom-symptom file.
    ///
    /// Entries that fail validation (e.g. a repeated symptom name from a
    /// hand-edited file) are skipped with a warning.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let entries = load_custom_symptoms(path)?;
        let mut snapshot = DictionarySnapshot::builtin();
        for entry in &entries {
            match snapshot.with_custom_symptom(&entry.word, &entry.symptom) {
                Ok(next) => snapshot = next,
                Err(e) => tracing::warn!(error = %e, "Skipping custom symptom entry"),
            }
        }
        tracing::info!(
            custom = snapshot.custom_symptoms().len(),
            version = snapshot.version(),
            "Dictionary loaded"
        );
        Ok(Self::new(snapshot))
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<DictionarySnapshot> {
        // The guarded value is only ever replaced whole, so a poisoned lock
        // still holds a complete snapshot.
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Map `word` to `symptom` in a new snapshot and make it current.
    pub fn add_custom_symptom(
        &self,
        word: &str,
        symptom: &str,
    ) -> Result<Arc<DictionarySnapshot>, DictionaryError> {
        let mut current = self.current.write().map_err(|_| DictionaryError::LockFailed)?;
        let next = Arc::new(current.with_custom_symptom(word, symptom)?);
        *current = Arc::clone(&next);

        tracing::info!(version = next.version(), "Custom symptom added, dictionary replaced");
        Ok(next)
    }
}

impl Default for DictionaryStore {
    fn default() -> Self {
        Self::builtin()
    }
}
