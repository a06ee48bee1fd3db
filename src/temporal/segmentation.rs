use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::confidence;
use super::correction::{correct_future_date, is_future};
use super::types::{date_string, DateSegment, SegmentedEntry};
use super::TemporalResolver;

/// Resolve, correct and score every date phrase in `text`, in text order.
pub fn detect_dates(
    resolver: &dyn TemporalResolver,
    text: &str,
    reference: NaiveDateTime,
) -> Vec<DateSegment> {
    let mut dates: Vec<DateSegment> = resolver
        .resolve(text, reference)
        .into_iter()
        .filter(|r| {
            let valid = r.start_index <= r.end_index && text.get(r.start_index..r.end_index).is_some();
            if !valid {
                tracing::warn!(
                    start = r.start_index,
                    end = r.end_index,
                    "Dropping date reference with invalid offsets"
                );
            }
            valid
        })
        .map(|r| {
            let timestamp = correct_future_date(r.resolved, reference);
            DateSegment {
                timestamp,
                confidence: confidence::score(&r),
                date_string: date_string(&timestamp),
                matched_text: r.matched_text,
                start_index: r.start_index,
                end_index: r.end_index,
            }
        })
        .collect();
    dates.sort_by_key(|d| d.start_index);
    dates
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ':' | ';' | '-')
}

/// Byte range of `text[start..end]` with separators trimmed from both ends.
fn trimmed_range(text: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let slice = text.get(start..end)?;
    let lead = slice.len() - slice.trim_start_matches(is_separator).len();
    let trimmed = slice[lead..].trim_end();
    if trimmed.is_empty() {
        return None;
    }
    Some((start + lead, start + lead + trimmed.len()))
}

fn entry(text: &str, range: (usize, usize), timestamp: NaiveDateTime, explicit: bool) -> SegmentedEntry {
    SegmentedEntry {
        timestamp,
        date_string: date_string(&timestamp),
        text: text[range.0..range.1].to_string(),
        start_index: range.0,
        end_index: range.1,
        explicit,
    }
}

/// Split a narrative into segments, one per date phrase.
///
/// Each segment runs from the end of one date phrase to the start of the
/// next. Text before the first phrase is dated at `reference` and marked
/// not explicit. Segments are returned oldest first.
pub fn segment_by_date(
    resolver: &dyn TemporalResolver,
    text: &str,
    reference: NaiveDateTime,
) -> Vec<SegmentedEntry> {
    let dates = detect_dates(resolver, text, reference);
    let mut segments = Vec::new();

    let preface_end = dates.first().map_or(text.len(), |d| d.start_index);
    if let Some(range) = trimmed_range(text, 0, preface_end) {
        segments.push(entry(text, range, reference, false));
    }

    for (i, date) in dates.iter().enumerate() {
        let next_start = dates
            .get(i + 1)
            .map_or(text.len(), |next| next.start_index)
            .max(date.end_index);
        if let Some(range) = trimmed_range(text, date.end_index, next_start) {
            segments.push(entry(text, range, date.timestamp, true));
        }
    }

    segments.sort_by_key(|s| s.timestamp);

    tracing::debug!(
        dates = dates.len(),
        segments = segments.len(),
        "Narrative segmented by date"
    );
    segments
}

/// Merge segments that fall on the same calendar day.
///
/// Text is joined with single spaces in source order; the merged entry is
/// timestamped at midnight and explicit if any member was.
pub fn group_segments_by_date(segments: &[SegmentedEntry]) -> Vec<SegmentedEntry> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&SegmentedEntry>> = BTreeMap::new();
    for segment in segments {
        by_day.entry(segment.timestamp.date()).or_default().push(segment);
    }

    by_day
        .into_iter()
        .map(|(day, mut members)| {
            members.sort_by_key(|m| m.start_index);
            let timestamp = day.and_time(NaiveTime::default());
            SegmentedEntry {
                timestamp,
                date_string: date_string(&timestamp),
                text: members
                    .iter()
                    .map(|m| m.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
                start_index: members.iter().map(|m| m.start_index).min().unwrap_or(0),
                end_index: members.iter().map(|m| m.end_index).max().unwrap_or(0),
                explicit: members.iter().any(|m| m.explicit),
            }
        })
        .collect()
}

/// Pull any entry still dated after `reference` back into the past.
pub fn validate_and_fix_dates(
    segments: Vec<SegmentedEntry>,
    reference: NaiveDateTime,
) -> Vec<SegmentedEntry> {
    let mut fixed: Vec<SegmentedEntry> = segments
        .into_iter()
        .map(|mut s| {
            if is_future(&s.timestamp, &reference) {
                let corrected = correct_future_date(s.timestamp, reference);
                tracing::warn!(
                    from = %s.date_string,
                    to = %date_string(&corrected),
                    "Future-dated segment corrected"
                );
                s.timestamp = corrected;
                s.date_string = date_string(&corrected);
            }
            s
        })
        .collect();
    fixed.sort_by_key(|s| s.timestamp);
    fixed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::types::{DateReference, Specificity};
    use crate::temporal::PhraseDateResolver;
    use chrono::{Datelike, Weekday};

    /// Resolves fixed phrases to fixed dates.
    struct StubResolver {
        phrases: Vec<(&'static str, NaiveDateTime)>,
    }

    impl TemporalResolver for StubResolver {
        fn resolve(&self, text: &str, _reference: NaiveDateTime) -> Vec<DateReference> {
            let mut out: Vec<DateReference> = self
                .phrases
                .iter()
                .filter_map(|(phrase, date)| {
                    let start = text.find(phrase)?;
                    Some(DateReference {
                        matched_text: phrase.to_string(),
                        start_index: start,
                        end_index: start + phrase.len(),
                        resolved: *date,
                        specificity: Specificity::NONE,
                    })
                })
                .collect();
            out.sort_by_key(|r| r.start_index);
            out
        }
    }

    /// Resolver returning offsets that do not fit the text.
    struct BrokenResolver;

    impl TemporalResolver for BrokenResolver {
        fn resolve(&self, text: &str, reference: NaiveDateTime) -> Vec<DateReference> {
            vec![DateReference {
                matched_text: "ghost".into(),
                start_index: text.len() + 5,
                end_index: text.len() + 10,
                resolved: reference,
                specificity: Specificity::NONE,
            }]
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    /// Wednesday 13 March 2024.
    fn wednesday() -> NaiveDateTime {
        at(2024, 3, 13, 9, 30)
    }

    /// Saturday 16 March 2024.
    fn saturday() -> NaiveDateTime {
        at(2024, 3, 16, 9, 30)
    }

    #[test]
    fn future_monday_resolves_to_past_monday() {
        let stub = StubResolver {
            phrases: vec![("Monday", at(2024, 3, 18, 12, 0))],
        };
        let segments = segment_by_date(&stub, "Monday I had a migraine", wednesday());
        assert_eq!(segments.len(), 1);
        let ts = segments[0].timestamp;
        assert_eq!(ts.weekday(), Weekday::Mon);
        assert!(ts <= wednesday());
        assert!((wednesday().date() - ts.date()).num_days() <= 7);
        assert_eq!(segments[0].text, "I had a migraine");
    }

    #[test]
    fn phrase_resolver_monday_on_wednesday() {
        let segments = segment_by_date(&PhraseDateResolver::new(), "Monday I had a migraine", wednesday());
        assert_eq!(segments[0].date_string, "2024-03-11");
        assert!(segments[0].explicit);
    }

    #[test]
    fn yesterday_and_friday_on_saturday() {
        let text = "Yesterday I had a headache. Friday I woke up exhausted.";
        let segments = segment_by_date(&PhraseDateResolver::new(), text, saturday());
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.explicit));
        assert!(segments.iter().all(|s| s.timestamp <= saturday()));
        assert!(segments[0].timestamp < segments[1].timestamp);
        assert_eq!(segments[0].text, "I had a headache.");
        assert_eq!(segments[1].text, "I woke up exhausted.");

        let mut ranges: Vec<(usize, usize)> =
            segments.iter().map(|s| (s.start_index, s.end_index)).collect();
        ranges.sort();
        assert!(ranges[0].1 <= ranges[1].0);
        for s in &segments {
            assert_eq!(&text[s.start_index..s.end_index], s.text);
        }
    }

    #[test]
    fn preface_is_dated_at_reference() {
        let stub = StubResolver {
            phrases: vec![("Yesterday", at(2024, 3, 15, 9, 30))],
        };
        let segments = segment_by_date(&stub, "Rough week. Yesterday, tired", saturday());
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "tired");
        assert!(segments[0].explicit);
        assert_eq!(segments[1].text, "Rough week.");
        assert_eq!(segments[1].timestamp, saturday());
        assert!(!segments[1].explicit);
    }

    #[test]
    fn no_dates_gives_one_implicit_segment() {
        let stub = StubResolver { phrases: vec![] };
        let segments = segment_by_date(&stub, "  just tired  ", saturday());
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "just tired");
        assert_eq!(segments[0].start_index, 2);
        assert!(!segments[0].explicit);
    }

    #[test]
    fn empty_segments_are_dropped() {
        let stub = StubResolver {
            phrases: vec![("Yesterday", at(2024, 3, 15, 9, 30))],
        };
        assert!(segment_by_date(&stub, "Yesterday.", saturday()).len() <= 1);
        assert!(segment_by_date(&stub, "Yesterday ", saturday()).is_empty());
        assert!(segment_by_date(&stub, "", saturday()).is_empty());
    }

    #[test]
    fn invalid_offsets_are_dropped() {
        let segments = segment_by_date(&BrokenResolver, "tired", saturday());
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].explicit);
    }

    #[test]
    fn detect_dates_scores_and_corrects() {
        let dates = detect_dates(&PhraseDateResolver::new(), "Yesterday and on Friday", wednesday());
        assert_eq!(dates.len(), 2);
        assert!((dates[0].confidence - 0.9).abs() < 1e-6);
        assert_eq!(dates[1].date_string, "2024-03-08");
        assert!((dates[1].confidence - 0.8).abs() < 1e-6);
    }

    #[test]
    fn grouping_merges_same_day() {
        let segments = vec![
            SegmentedEntry {
                timestamp: at(2024, 3, 15, 12, 0),
                date_string: "2024-03-15".into(),
                text: "woke up exhausted.".into(),
                start_index: 40,
                end_index: 58,
                explicit: true,
            },
            SegmentedEntry {
                timestamp: at(2024, 3, 15, 9, 30),
                date_string: "2024-03-15".into(),
                text: "I had a headache.".into(),
                start_index: 10,
                end_index: 27,
                explicit: false,
            },
            SegmentedEntry {
                timestamp: at(2024, 3, 14, 12, 0),
                date_string: "2024-03-14".into(),
                text: "fine".into(),
                start_index: 60,
                end_index: 64,
                explicit: true,
            },
        ];
        let grouped = group_segments_by_date(&segments);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].date_string, "2024-03-14");
        assert_eq!(grouped[1].text, "I had a headache. woke up exhausted.");
        assert_eq!(grouped[1].timestamp, at(2024, 3, 15, 0, 0));
        assert_eq!((grouped[1].start_index, grouped[1].end_index), (10, 58));
        assert!(grouped[1].explicit);
    }

    #[test]
    fn validation_fixes_future_entries() {
        let segments = vec![SegmentedEntry {
            timestamp: at(2024, 3, 20, 0, 0),
            date_string: "2024-03-20".into(),
            text: "later".into(),
            start_index: 0,
            end_index: 5,
            explicit: true,
        }];
        let fixed = validate_and_fix_dates(segments, saturday());
        assert_eq!(fixed[0].date_string, "2024-03-13");
        assert!(fixed[0].timestamp <= saturday());
    }
}
