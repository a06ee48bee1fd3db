//! Severity Resolver.
//!
//! Tiers, first applicable wins: numeric score, severity keyword,
//! intensity modifier, comparative against the symptom default, then the
//! default itself. Within a tier the nearest cue wins.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::dictionary::{tables, TableKind};
use crate::models::Severity;

use super::matcher::MatchSet;
use super::tokenize::{token_range, Token};
use super::types::{Cue, Span};
use super::window::{self, Direction};

/// Scale a numeric score pattern maps onto.
struct ScorePattern {
    regex: Regex,
    /// Divisor bringing the captured number onto a 0–10 scale.
    divisor: f32,
}

static SCORE_PATTERNS: LazyLock<Vec<ScorePattern>> = LazyLock::new(|| {
    vec![
        pattern(r"(?i)\b(\d{1,3}(?:\.\d+)?)\s*(?:/|out\s+of)\s*10\b", 1.0),
        pattern(r"(?i)\b(\d{1,3}(?:\.\d+)?)\s*(?:%|percent\b)", 10.0),
    ]
});

fn pattern(regex_str: &str, divisor: f32) -> ScorePattern {
    ScorePattern {
        regex: Regex::new(regex_str).expect("Invalid severity score pattern"),
        divisor,
    }
}

/// Numeric scores in the text as `(start byte, end byte, 0–10 score)`.
pub fn numeric_scores(text: &str) -> Vec<(usize, usize, f32)> {
    let mut scores = Vec::new();
    for p in SCORE_PATTERNS.iter() {
        for caps in p.regex.captures_iter(text) {
            let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if part_of_date(text, whole.start(), whole.end()) {
                continue;
            }
            let Ok(value) = number.as_str().parse::<f32>() else {
                continue;
            };
            let score = (value / p.divisor).clamp(0.0, 10.0);
            scores.push((whole.start(), whole.end(), score));
        }
    }
    scores.sort_by_key(|(start, _, _)| *start);
    scores
}

/// Whether a score-looking match is really a slice of `3/10/2024`.
fn part_of_date(text: &str, start: usize, end: usize) -> bool {
    let next = text[end..].chars().next();
    let prev = text[..start].chars().next_back();
    next.is_some_and(|c| c == '/' || c.is_ascii_digit()) || prev == Some('/')
}

/// Severity a symptom gets when no cue applies.
pub fn default_severity(symptom: &str) -> Severity {
    tables::SEVERITY_DEFAULTS
        .iter()
        .find(|(id, _)| *id == symptom)
        .and_then(|(_, s)| Severity::from_str(s).ok())
        .unwrap_or(Severity::Moderate)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Escalate,
    Deescalate,
}

fn bucket_cues(spans: &[Span]) -> Vec<Cue<Severity>> {
    spans
        .iter()
        .filter_map(|s| Severity::from_str(&s.category).ok().map(|v| Cue::from_span(s, v)))
        .collect()
}

/// Every severity cue found in one text.
#[derive(Debug, Clone, Default)]
pub struct SeverityCues {
    numeric: Vec<Cue<Severity>>,
    keywords: Vec<Cue<Severity>>,
    modifiers: Vec<Cue<Severity>>,
    comparatives: Vec<Cue<Comparison>>,
}

impl SeverityCues {
    pub fn collect(text: &str, tokens: &[Token], matches: &MatchSet) -> Self {
        let numeric = numeric_scores(text)
            .into_iter()
            .filter_map(|(start, end, score)| {
                token_range(tokens, start, end)
                    .map(|(first, last)| Cue::new(first..last, Severity::from_score(score)))
            })
            .collect();

        let comparatives = matches
            .get(TableKind::Comparative)
            .iter()
            .filter_map(|s| {
                let value = match s.category.as_str() {
                    "escalate" => Comparison::Escalate,
                    "deescalate" => Comparison::Deescalate,
                    _ => return None,
                };
                Some(Cue::from_span(s, value))
            })
            .collect();

        Self {
            numeric,
            keywords: bucket_cues(matches.get(TableKind::SeverityKeyword)),
            modifiers: bucket_cues(matches.get(TableKind::IntensityModifier)),
            comparatives,
        }
    }

    /// Severity of one symptom occurrence.
    pub fn resolve(&self, tokens: &[Token], symptom: &Span, window: usize) -> Severity {
        for tier in [&self.numeric, &self.keywords, &self.modifiers] {
            if let Some(cue) = window::nearest(tokens, symptom, tier, window, Direction::Both) {
                return cue.value;
            }
        }

        let default = default_severity(&symptom.category);
        match window::nearest(tokens, symptom, &self.comparatives, window, Direction::Both) {
            Some(cue) if cue.value == Comparison::Escalate => default.escalate(),
            Some(_) => default.deescalate(),
            None => default,
        }
    }
}
