//! Catch-up flow: one narrative covering several days becomes one
//! extraction per day.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::extraction::SymptomExtractor;
use crate::models::ExtractionResult;
use crate::temporal::{
    group_segments_by_date, segment_by_date, validate_and_fix_dates, SegmentedEntry,
    TemporalResolver,
};

/// One day of a catch-up narrative with the symptoms found in it.
#[derive(Debug, Clone, Serialize)]
pub struct CatchUpDay {
    pub entry: SegmentedEntry,
    pub extraction: ExtractionResult,
}

/// Segment, group by day, validate, then extract each day on its own.
///
/// Days are returned oldest first.
pub fn catch_up(
    extractor: &SymptomExtractor,
    resolver: &dyn TemporalResolver,
    text: &str,
    reference: NaiveDateTime,
) -> Vec<CatchUpDay> {
    let segments = segment_by_date(resolver, text, reference);
    let grouped = group_segments_by_date(&segments);
    let days: Vec<CatchUpDay> = validate_and_fix_dates(grouped, reference)
        .into_iter()
        .map(|entry| CatchUpDay {
            extraction: extractor.extract(&entry.text),
            entry,
        })
        .collect();

    tracing::debug!(
        segments = segments.len(),
        days = days.len(),
        symptoms = days.iter().map(|d| d.extraction.symptoms.len()).sum::<usize>(),
        "Catch-up processed"
    );
    days
}
