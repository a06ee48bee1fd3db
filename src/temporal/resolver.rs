//! Built-in date-phrase resolver.
//!
//! Recognises everyday English date phrases with regexes and resolves them
//! with `chrono`. Phrases that name a calendar day or weekday resolve to
//! noon; relative-day phrases keep the reference time of day.

use std::sync::LazyLock;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use regex::{Captures, Regex};

use super::types::{DateReference, Specificity};
use super::TemporalResolver;

type ResolveFn = fn(&Captures, NaiveDateTime) -> Option<(NaiveDateTime, Specificity)>;

struct DatePattern {
    regex: Regex,
    resolve: ResolveFn,
    description: &'static str,
}

const MONTHS: &str = r"(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

const WEEKDAYS: &str = r"(monday|tuesday|wednesday|thursday|friday|saturday|sunday)";

static DATE_PATTERNS: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(?i)\b(?:the\s+)?day\s+before\s+yesterday\b",
            |_, reference| days_back(reference, 2),
            "day before yesterday",
        ),
        pattern(
            r"(?i)\b(?:yesterday|last\s+night)\b",
            |_, reference| days_back(reference, 1),
            "yesterday",
        ),
        pattern(
            r"(?i)\b(?:today|tonight|this\s+(?:morning|afternoon|evening))\b",
            |_, reference| days_back(reference, 0),
            "today",
        ),
        pattern(
            r"(?i)\b(\d{1,2}|an?|one|two|three|four|five|six|seven|eight|nine|ten)\s+days?\s+ago\b",
            |caps, reference| days_back(reference, count_word(caps.get(1)?.as_str())?),
            "N days ago",
        ),
        pattern(
            &format!(r"(?i)\b(?:(last|this|on|past)\s+)?{WEEKDAYS}\b"),
            resolve_weekday,
            "weekday",
        ),
        pattern(
            &format!(r"(?i)\b{MONTHS}\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?\b(?:,?\s+(\d{{4}})\b)?"),
            |caps, reference| {
                let month = month_number(caps.get(1)?.as_str())?;
                let day = caps.get(2)?.as_str().parse().ok()?;
                calendar_date(reference, caps.get(3), month, day)
            },
            "month day",
        ),
        pattern(
            &format!(r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?{MONTHS}\b(?:,?\s+(\d{{4}})\b)?"),
            |caps, reference| {
                let day = caps.get(1)?.as_str().parse().ok()?;
                let month = month_number(caps.get(2)?.as_str())?;
                calendar_date(reference, caps.get(3), month, day)
            },
            "day month",
        ),
        pattern(
            r"\b(\d{4})-(\d{2})-(\d{2})\b",
            |caps, _| {
                let year = caps.get(1)?.as_str().parse().ok()?;
                let month = caps.get(2)?.as_str().parse().ok()?;
                let day = caps.get(3)?.as_str().parse().ok()?;
                at_noon(year, month, day).map(|d| (d, Specificity::day_month(true)))
            },
            "ISO date",
        ),
        pattern(
            r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b",
            |caps, _| {
                let month = caps.get(1)?.as_str().parse().ok()?;
                let day = caps.get(2)?.as_str().parse().ok()?;
                let year = caps.get(3)?.as_str().parse().ok()?;
                at_noon(year, month, day).map(|d| (d, Specificity::day_month(true)))
            },
            "numeric date",
        ),
    ]
});

fn pattern(regex_str: &str, resolve: ResolveFn, description: &'static str) -> DatePattern {
    DatePattern {
        regex: Regex::new(regex_str).expect("Invalid date phrase pattern"),
        resolve,
        description,
    }
}

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()
}

fn at_noon(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.and_time(noon()))
}

fn days_back(reference: NaiveDateTime, days: i64) -> Option<(NaiveDateTime, Specificity)> {
    let date = reference.checked_sub_signed(Duration::days(days))?;
    Some((date, Specificity::DAY))
}

fn count_word(word: &str) -> Option<i64> {
    let value = match word.to_lowercase().as_str() {
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
        digits => return digits.parse().ok(),
    };
    Some(value)
}

fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.to_lowercase().chars().take(3).collect();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn calendar_date(
    reference: NaiveDateTime,
    year: Option<regex::Match>,
    month: u32,
    day: u32,
) -> Option<(NaiveDateTime, Specificity)> {
    let explicit_year = year.and_then(|y| y.as_str().parse::<i32>().ok());
    let date = at_noon(explicit_year.unwrap_or(reference.year()), month, day)?;
    Some((date, Specificity::day_month(explicit_year.is_some())))
}

fn resolve_weekday(caps: &Captures, reference: NaiveDateTime) -> Option<(NaiveDateTime, Specificity)> {
    let weekday: Weekday = caps.get(2)?.as_str().to_lowercase().parse().ok()?;
    let modifier = caps.get(1).map(|m| m.as_str().to_lowercase());

    let today = reference.date();
    let date = match modifier.as_deref() {
        // Most recent occurrence strictly before today.
        Some("last") | Some("past") => {
            let mut back = (today.weekday().num_days_from_monday() + 7
                - weekday.num_days_from_monday())
                % 7;
            if back == 0 {
                back = 7;
            }
            today.checked_sub_signed(Duration::days(i64::from(back)))?
        }
        // Same Monday-to-Sunday week; may land after today and is
        // corrected downstream.
        _ => {
            let monday = today
                .checked_sub_signed(Duration::days(i64::from(today.weekday().num_days_from_monday())))?;
            monday.checked_add_signed(Duration::days(i64::from(weekday.num_days_from_monday())))?
        }
    };
    Some((date.and_time(noon()), Specificity::NONE))
}

/// Regex + chrono resolver for common English date phrases.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseDateResolver;

impl PhraseDateResolver {
    pub fn new() -> Self {
        Self
    }
}

impl TemporalResolver for PhraseDateResolver {
    fn resolve(&self, text: &str, reference: NaiveDateTime) -> Vec<DateReference> {
        let mut found = Vec::new();
        for p in DATE_PATTERNS.iter() {
            for caps in p.regex.captures_iter(text) {
                let Some(whole) = caps.get(0) else {
                    continue;
                };
                match (p.resolve)(&caps, reference) {
                    Some((resolved, specificity)) => found.push(DateReference {
                        matched_text: whole.as_str().to_string(),
                        start_index: whole.start(),
                        end_index: whole.end(),
                        resolved,
                        specificity,
                    }),
                    None => tracing::debug!(
                        pattern = p.description,
                        start = whole.start(),
                        "Dropping unresolvable date phrase"
                    ),
                }
            }
        }

        // Longest phrase wins where matches overlap.
        found.sort_by(|a, b| {
            let len_a = a.end_index - a.start_index;
            let len_b = b.end_index - b.start_index;
            len_b.cmp(&len_a).then(a.start_index.cmp(&b.start_index))
        });
        let mut kept: Vec<DateReference> = Vec::new();
        for candidate in found {
            let overlaps = kept
                .iter()
                .any(|k| candidate.start_index < k.end_index && k.start_index < candidate.end_index);
            if !overlaps {
                kept.push(candidate);
            }
        }
        kept.sort_by_key(|r| r.start_index);
        kept
    }
}
