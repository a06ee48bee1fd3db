pub mod catch_up;
pub mod config;
pub mod dictionary;
pub mod extraction;
pub mod models;
pub mod temporal;

use std::path::Path;

use chrono::NaiveDateTime;
use tracing_subscriber::EnvFilter;

use catch_up::CatchUpDay;
use config::ExtractionConfig;
use dictionary::{CustomSymptom, DictionaryError, DictionaryStore};
use extraction::SymptomExtractor;
use models::{ExtractionResult, Severity};
use temporal::{PhraseDateResolver, SegmentedEntry, TemporalResolver};

pub use temporal::{group_segments_by_date, validate_and_fix_dates};

/// Initialize tracing. Logs go to stderr; `RUST_LOG` overrides the default
/// filter. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point for symptom extraction and catch-up segmentation.
///
/// Owns the current dictionary snapshot and the date-phrase resolver.
/// Every call works against the snapshot current when it started, so
/// extraction may run on several threads while custom symptoms are added.
pub struct SymptomEngine {
    store: DictionaryStore,
    resolver: Box<dyn TemporalResolver>,
    config: ExtractionConfig,
}

impl SymptomEngine {
    /// Engine over the built-in dictionary and phrase resolver.
    pub fn new(config: ExtractionConfig) -> Self {
        Self::with_parts(DictionaryStore::builtin(), Box::new(PhraseDateResolver::new()), config)
    }

    pub fn with_parts(
        store: DictionaryStore,
        resolver: Box<dyn TemporalResolver>,
        config: ExtractionConfig,
    ) -> Self {
        Self {
            store,
            resolver,
            config,
        }
    }

    /// Engine whose dictionary includes the custom symptoms saved at `path`.
    pub fn load(path: &Path, config: ExtractionConfig) -> Result<Self, DictionaryError> {
        let store = DictionaryStore::load(path)?;
        Ok(Self::with_parts(store, Box::new(PhraseDateResolver::new()), config))
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extractor bound to the current snapshot.
    pub fn extractor(&self) -> SymptomExtractor {
        SymptomExtractor::new(self.store.snapshot(), self.config.clone())
    }

    pub fn extract_symptoms(&self, text: &str) -> ExtractionResult {
        self.extractor().extract(text)
    }

    pub fn quick_checkin(&self, entries: &[(String, Severity)]) -> ExtractionResult {
        extraction::quick_checkin(entries)
    }

    /// Split a narrative by date; `reference` defaults to the local time now.
    pub fn segment_by_date(
        &self,
        text: &str,
        reference: Option<NaiveDateTime>,
    ) -> Vec<SegmentedEntry> {
        let reference = reference.unwrap_or_else(temporal::default_reference);
        temporal::segment_by_date(self.resolver.as_ref(), text, reference)
    }

    /// Segment, group, validate and extract a catch-up narrative.
    pub fn catch_up(&self, text: &str, reference: Option<NaiveDateTime>) -> Vec<CatchUpDay> {
        let reference = reference.unwrap_or_else(temporal::default_reference);
        catch_up::catch_up(&self.extractor(), self.resolver.as_ref(), text, reference)
    }

    /// Map `word` to `symptom`. Fails with `DuplicateName` when a custom
    /// symptom already uses that name.
    pub fn add_custom_symptom(&self, word: &str, symptom: &str) -> Result<(), DictionaryError> {
        self.store.add_custom_symptom(word, symptom).map(|_| ())
    }

    pub fn custom_symptoms(&self) -> Vec<CustomSymptom> {
        self.store.snapshot().custom_symptoms().to_vec()
    }

    pub fn dictionary_version(&self) -> u64 {
        self.store.snapshot().version()
    }
}

impl Default for SymptomEngine {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    use chrono::NaiveDate;

    fn saturday() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 16)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn extract_through_engine() {
        let engine = SymptomEngine::default();
        let result = engine.extract_symptoms("brain fog and not dizzy");
        assert_eq!(result.text, "brain fog and not dizzy");
        assert_eq!(result.symptoms.len(), 1);
        assert_eq!(result.symptoms[0].symptom, "brain_fog");
    }

    #[test]
    fn custom_symptoms_apply_to_later_calls() {
        let engine = SymptomEngine::default();
        assert!(engine.extract_symptoms("my jaw is clicky").symptoms.is_empty());

        engine.add_custom_symptom("clicky", "TMJ").unwrap();
        let result = engine.extract_symptoms("my jaw is clicky");
        assert_eq!(result.symptoms[0].symptom, "tmj");
        assert_eq!(engine.dictionary_version(), 2);

        let err = engine.add_custom_symptom("clicking", "tmj").unwrap_err();
        assert!(matches!(err, DictionaryError::DuplicateName { .. }));
        assert_eq!(engine.custom_symptoms().len(), 1);
    }

    #[test]
    fn segment_and_catch_up_through_engine() {
        let engine = SymptomEngine::default();
        let text = "Yesterday I had a headache. Friday I woke up exhausted.";
        let segments = engine.segment_by_date(text, Some(saturday()));
        assert_eq!(segments.len(), 2);

        let grouped = validate_and_fix_dates(group_segments_by_date(&segments), saturday());
        assert_eq!(grouped.len(), 1);

        let days = engine.catch_up(text, Some(saturday()));
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].extraction.symptoms.len(), 2);
    }

    #[test]
    fn default_reference_is_never_exceeded() {
        let engine = SymptomEngine::default();
        let now = temporal::default_reference();
        for entry in engine.segment_by_date("Sunday tired. Saturday sore.", None) {
            // Generous bound: the engine's own clock read happens after `now`.
            assert!(entry.timestamp <= now + chrono::Duration::minutes(1));
        }
    }

    #[test]
    fn concurrent_extraction_during_updates() {
        let engine = Arc::new(SymptomEngine::default());
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || {
                    for _ in 0..50 {
                        let result = engine.extract_symptoms("tired and achy");
                        assert_eq!(result.symptoms.len(), 2);
                    }
                })
            })
            .collect();

        for i in 0..10 {
            engine
                .add_custom_symptom(&format!("custom{i}"), &format!("custom_{i}"))
                .unwrap();
        }
        for r in readers {
            r.join().unwrap();
        }
        assert_eq!(engine.dictionary_version(), 11);
    }

    #[test]
    fn quick_checkin_through_engine() {
        let engine = SymptomEngine::default();
        let result = engine.quick_checkin(&[("pem".into(), Severity::Severe)]);
        assert_eq!(result.text, "PEM");
        assert_eq!(result.symptoms[0].severity, Some(Severity::Severe));
    }
}
