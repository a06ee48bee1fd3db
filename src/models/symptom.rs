use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{
    DurationQualifier, DurationUnit, MatchMethod, Severity, TimeOfDay, TriggerTimeframe,
};

/// One symptom mention extracted from free text.
///
/// `matched` is always the verbatim slice `text[start..end]` of the text
/// it was extracted from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSymptom {
    pub id: Uuid,
    /// Canonical snake_case symptom id, e.g. `brain_fog`.
    pub symptom: String,
    pub matched: String,
    pub method: MatchMethod,
    /// Byte offset of `matched` in the source text.
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pain_details: Option<PainDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<SymptomDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<SymptomTrigger>,
}

impl ExtractedSymptom {
    /// Compare two records ignoring their ids.
    pub fn same_extraction(&self, other: &Self) -> bool {
        Self { id: other.id, ..self.clone() } == *other
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PainDetails {
    pub qualifiers: Vec<String>,
    pub location: Option<String>,
}

/// How long a symptom lasted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SymptomDuration {
    /// "ongoing", "nonstop", "all the time"
    Ongoing,
    /// "all day", "most of the night"
    Qualified {
        qualifier: DurationQualifier,
        unit: DurationUnit,
    },
    /// "for 3 hours", "a couple of days"
    Quantity { value: u32, unit: DurationUnit },
    /// "since yesterday", "since I woke up"
    Since { anchor: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomTrigger {
    pub activity: String,
    pub timeframe: TriggerTimeframe,
}

/// Output of one extraction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub text: String,
    pub symptoms: Vec<ExtractedSymptom>,
}

impl ExtractionResult {
    pub fn empty(text: &str) -> Self {
        Self {
            text: text.to_string(),
            symptoms: Vec::new(),
        }
    }
}
