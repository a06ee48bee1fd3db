//! Temporal segmentation of multi-day catch-up narratives.

pub mod confidence;
pub mod correction;
pub mod resolver;
pub mod segmentation;
pub mod types;

pub use resolver::PhraseDateResolver;
pub use segmentation::{detect_dates, group_segments_by_date, segment_by_date, validate_and_fix_dates};
pub use types::*;

use chrono::{Local, NaiveDateTime};

/// Finds date phrases in text and resolves them against a reference time.
///
/// Fragments that cannot be resolved are left out of the result rather
/// than reported as errors.
pub trait TemporalResolver: Send + Sync {
    fn resolve(&self, text: &str, reference: NaiveDateTime) -> Vec<DateReference>;
}

/// Reference time used when the caller gives none.
pub fn default_reference() -> NaiveDateTime {
    Local::now().naive_local()
}
