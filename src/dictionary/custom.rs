//! Persistence of the user's custom-symptom table.
//!
//! The file is a small JSON document rewritten whole on every change:
//! `{"version": 1, "entries": [{"word": "zapped", "symptom": "brain_zaps"}]}`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::DictionaryError;

const FILE_FORMAT_VERSION: u32 = 1;

/// A user-added word → symptom mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSymptom {
    pub word: String,
    pub symptom: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct CustomSymptomFile {
    version: u32,
    entries: Vec<CustomSymptom>,
}

/// Load custom symptoms. A missing file is an empty table.
pub fn load_custom_symptoms(path: &Path) -> Result<Vec<CustomSymptom>, DictionaryError> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No custom symptom file, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let file: CustomSymptomFile = serde_json::from_str(&json)?;
    if file.version != FILE_FORMAT_VERSION {
        tracing::warn!(
            found = file.version,
            expected = FILE_FORMAT_VERSION,
            "Custom symptom file has an unknown format version, reading entries anyway"
        );
    }
    Ok(file.entries)
}

/// Write custom symptoms, replacing the file atomically.
pub fn save_custom_symptoms(path: &Path, entries: &[CustomSymptom]) -> Result<(), DictionaryError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = CustomSymptomFile {
        version: FILE_FORMAT_VERSION,
        entries: entries.to_vec(),
    };
    let json = serde_json::to_string_pretty(&file)?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json)?;
    std::fs::rename(&tmp, path)?;

    tracing::debug!(path = %path.display(), count = entries.len(), "Saved custom symptoms");
    Ok(())
}
