//! Duration cues: quantities, qualified spans, ongoing, "since <anchor>".

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::dictionary::TableKind;
use crate::models::{DurationQualifier, DurationUnit, SymptomDuration};

use crate::extraction::matcher::MatchSet;
use crate::extraction::tokenize::{joined_by_space, token_range, Token};
use crate::extraction::types::Cue;

static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,3}|an?|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|(?:a\s+)?couple(?:\s+of)?|(?:a\s+)?few|several)\s+(minutes?|mins?|hours?|hrs?|days?|weeks?|wks?)\b",
    )
    .expect("Invalid duration quantity pattern")
});

static HALF_HOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bhalf\s+an?\s+hour\b").expect("Invalid half-hour pattern")
});

/// Words ending a "since" anchor.
const ANCHOR_STOPS: &[&str] = &["and", "but", "or", "so", "then", "because", "though", "which"];

const MAX_ANCHOR_TOKENS: usize = 3;

fn quantity_value(word: &str) -> Option<u32> {
    let normalized = word.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    let value = match normalized.as_str() {
        "a" | "an" | "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "couple" | "couple of" | "a couple" | "a couple of" => 2,
        "few" | "a few" | "several" => 3,
        digits => return digits.parse().ok(),
    };
    Some(value)
}

fn unit_from(word: &str) -> Option<DurationUnit> {
    match word.to_lowercase().as_str() {
        "minute" | "minutes" | "min" | "mins" => Some(DurationUnit::Minutes),
        "hour" | "hours" | "hr" | "hrs" => Some(DurationUnit::Hours),
        "day" | "days" => Some(DurationUnit::Days),
        "week" | "weeks" | "wk" | "wks" => Some(DurationUnit::Weeks),
        _ => None,
    }
}

/// Quantity durations as `(start byte, end byte, duration)`.
///
/// "3 days ago" is a date, not a duration, and is skipped.
pub fn quantities(text: &str) -> Vec<(usize, usize, SymptomDuration)> {
    let mut out = Vec::new();
    for caps in QUANTITY.captures_iter(text) {
        let (Some(whole), Some(amount), Some(unit)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        let rest = text[whole.end()..].trim_start().to_lowercase();
        if rest.starts_with("ago") {
            continue;
        }
        let (Some(value), Some(unit)) = (quantity_value(amount.as_str()), unit_from(unit.as_str()))
        else {
            continue;
        };
        out.push((whole.start(), whole.end(), SymptomDuration::Quantity { value, unit }));
    }
    for m in HALF_HOUR.find_iter(text) {
        out.push((
            m.start(),
            m.end(),
            SymptomDuration::Quantity {
                value: 30,
                unit: DurationUnit::Minutes,
            },
        ));
    }
    out.sort_by_key(|(start, _, _)| *start);
    out
}

/// Parse a qualified-duration canonical id such as `most_of_hours`.
pub fn qualified(canonical: &str) -> Option<SymptomDuration> {
    let (qualifier, unit) = canonical.rsplit_once('_')?;
    Some(SymptomDuration::Qualified {
        qualifier: DurationQualifier::from_str(qualifier).ok()?,
        unit: DurationUnit::from_str(unit).ok()?,
    })
}

fn since_cues(text: &str, tokens: &[Token]) -> Vec<Cue<SymptomDuration>> {
    let mut cues = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        if token.norm != "since" {
            continue;
        }
        let mut last = i;
        for j in i + 1..tokens.len().min(i + 1 + MAX_ANCHOR_TOKENS) {
            let next = &tokens[j];
            if next.sentence != token.sentence
                || !joined_by_space(text, &tokens[j - 1], next)
                || ANCHOR_STOPS.contains(&next.norm.as_str())
            {
                break;
            }
            last = j;
        }
        if last > i {
            let anchor = text[tokens[i + 1].start..tokens[last].end].to_string();
            cues.push(Cue::new(i..last + 1, SymptomDuration::Since { anchor }));
        }
    }
    cues
}

/// Every duration cue in the text, in position order.
pub fn duration_cues(text: &str, tokens: &[Token], matches: &MatchSet) -> Vec<Cue<SymptomDuration>> {
    let mut cues: Vec<Cue<SymptomDuration>> = quantities(text)
        .into_iter()
        .filter_map(|(start, end, d)| token_range(tokens, start, end).map(|(a, b)| Cue::new(a..b, d)))
        .collect();

    cues.extend(
        matches
            .get(TableKind::QualifiedDuration)
            .iter()
            .filter_map(|s| qualified(&s.category).map(|d| Cue::from_span(s, d))),
    );
    cues.extend(
        matches
            .get(TableKind::OngoingCue)
            .iter()
            .map(|s| Cue::from_span(s, SymptomDuration::Ongoing)),
    );
    cues.extend(since_cues(text, tokens));

    cues.sort_by_key(|c| c.token_start);
    cues
}
