use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Which calendar fields a date phrase stated outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Specificity {
    pub day: bool,
    pub month: bool,
    pub year: bool,
}

impl Specificity {
    pub const NONE: Self = Self {
        day: false,
        month: false,
        year: false,
    };

    pub const DAY: Self = Self {
        day: true,
        month: false,
        year: false,
    };

    pub fn day_month(year: bool) -> Self {
        Self {
            day: true,
            month: true,
            year,
        }
    }
}

/// A date phrase recognised by a [`TemporalResolver`](super::TemporalResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateReference {
    pub matched_text: String,
    /// Byte offsets of `matched_text` in the source.
    pub start_index: usize,
    pub end_index: usize,
    pub resolved: NaiveDateTime,
    pub specificity: Specificity,
}

/// A date reference after future-date correction and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateSegment {
    pub timestamp: NaiveDateTime,
    pub matched_text: String,
    pub start_index: usize,
    pub end_index: usize,
    /// 0.0–1.0; informational only.
    pub confidence: f32,
    /// `YYYY-MM-DD`
    pub date_string: String,
}

/// A slice of narrative text bound to one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedEntry {
    pub timestamp: NaiveDateTime,
    /// `YYYY-MM-DD`
    pub date_string: String,
    pub text: String,
    /// Byte offsets of `text` in the source; a grouped entry spans from
    /// its first member's start to its last member's end.
    pub start_index: usize,
    pub end_index: usize,
    /// False only for text preceding the first date phrase.
    pub explicit: bool,
}

pub fn date_string(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}
