use super::types::DateReference;

/// Confidence weights for date references
pub mod thresholds {
    pub const BASE: f32 = 0.5;
    pub const DAY_BONUS: f32 = 0.2;
    pub const MONTH_BONUS: f32 = 0.15;
    pub const YEAR_BONUS: f32 = 0.15;

    /// "yesterday", "today"
    pub const RELATIVE_DAY_FLOOR: f32 = 0.9;

    /// "Monday", "last Friday"
    pub const WEEKDAY_FLOOR: f32 = 0.8;

    pub const MAX: f32 = 1.0;
}

const WEEKDAY_NAMES: [&str; 7] = [
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

fn has_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric()).any(|w| w == word)
}

/// Score how sure we are about a resolved date.
pub fn score(reference: &DateReference) -> f32 {
    let spec = reference.specificity;
    let mut confidence = thresholds::BASE;
    if spec.day {
        confidence += thresholds::DAY_BONUS;
    }
    if spec.month {
        confidence += thresholds::MONTH_BONUS;
    }
    if spec.year {
        confidence += thresholds::YEAR_BONUS;
    }

    let text = reference.matched_text.to_lowercase();
    if has_word(&text, "yesterday") || has_word(&text, "today") {
        confidence = confidence.max(thresholds::RELATIVE_DAY_FLOOR);
    }
    if WEEKDAY_NAMES.iter().any(|day| has_word(&text, day)) {
        confidence = confidence.max(thresholds::WEEKDAY_FLOOR);
    }

    confidence.min(thresholds::MAX)
}
