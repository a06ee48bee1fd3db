use std::sync::Arc;
use std::time::Instant;

use crate::config::ExtractionConfig;
use crate::dictionary::{DictionarySnapshot, TableKind};
use crate::models::{ExtractionResult, Severity};

use super::assembler::assemble;
use super::attributes::extract_attributes;
use super::matcher::match_all;
use super::negation;
use super::severity::SeverityCues;
use super::tokenize::tokenize;

/// Runs the extraction passes against one dictionary snapshot.
///
/// Holds no mutable state; any number of threads may share one extractor.
#[derive(Debug, Clone)]
pub struct SymptomExtractor {
    snapshot: Arc<DictionarySnapshot>,
    config: ExtractionConfig,
}

impl SymptomExtractor {
    pub fn new(snapshot: Arc<DictionarySnapshot>, config: ExtractionConfig) -> Self {
        Self { snapshot, config }
    }

    pub fn snapshot(&self) -> &DictionarySnapshot {
        &self.snapshot
    }

    /// Extract every non-negated symptom mention from `text`.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        let tokens = tokenize(text);
        if tokens.is_empty() {
            return ExtractionResult::empty(text);
        }

        let matches = match_all(text, &tokens, &self.snapshot);
        let mentioned = matches.get(TableKind::Symptom).len();
        let symptoms = negation::resolve(text, &tokens, &matches, self.config.negation_window);

        let cues = SeverityCues::collect(text, &tokens, &matches);
        let severities: Vec<Severity> = symptoms
            .iter()
            .map(|s| cues.resolve(&tokens, s, self.config.severity_window))
            .collect();

        let attributes = extract_attributes(text, &tokens, &symptoms, &matches, &self.config);
        let records = assemble(&symptoms, &severities, attributes);

        tracing::debug!(
            snapshot_version = self.snapshot.version(),
            tokens = tokens.len(),
            spans = matches.total(),
            mentioned,
            negated = mentioned - symptoms.len(),
            extracted = records.len(),
            processing_us = start.elapsed().as_micros() as u64,
            "Symptom extraction complete"
        );

        ExtractionResult {
            text: text.to_string(),
            symptoms: records,
        }
    }
}
