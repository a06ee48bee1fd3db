use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "SymptomLens";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name of the persisted custom-symptom table.
pub const CUSTOM_SYMPTOMS_FILE: &str = "custom_symptoms.json";

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "symptom_lens_lib=info,symptom_lens=info"
}

/// Get the application data directory.
/// ~/SymptomLens/ on all platforms; falls back to the working directory
/// when no home directory can be determined.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Location of the user's custom-symptom table.
pub fn custom_symptoms_path() -> PathBuf {
    app_data_dir().join(CUSTOM_SYMPTOMS_FILE)
}

// ═══════════════════════════════════════════════════════════
// Extraction tuning
// ═══════════════════════════════════════════════════════════

/// Search-window sizes (in tokens) for the extraction passes.
///
/// Every window is additionally bounded by sentence-ending punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Tokens scanned before a symptom for a negation cue.
    pub negation_window: usize,
    /// Tokens scanned on either side of a symptom for severity cues.
    pub severity_window: usize,
    /// Tokens scanned on either side of a pain symptom for qualifiers and location.
    pub pain_window: usize,
    /// Tokens scanned for duration, time-of-day and trigger cues.
    pub attribute_window: usize,
    /// Maximum length of a freeform trigger activity.
    pub trigger_activity_tokens: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            negation_window: 4,
            severity_window: 6,
            pain_window: 6,
            attribute_window: 8,
            trigger_activity_tokens: 4,
        }
    }
}
