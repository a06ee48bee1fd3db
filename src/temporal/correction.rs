//! Future-date correction.
//!
//! Catch-up narratives describe the past, so a bare weekday that resolves
//! ahead of the reference date means its most recent past occurrence.

use chrono::{Duration, NaiveDateTime};

/// Roll `date` back by whole weeks until it is not after `reference`.
///
/// Weekday and time of day are preserved. A date landing on the reference
/// day but later in that day is clamped to the reference itself.
pub fn correct_future_date(date: NaiveDateTime, reference: NaiveDateTime) -> NaiveDateTime {
    let days_ahead = (date.date() - reference.date()).num_days();
    let mut corrected = date;
    if days_ahead > 0 {
        let weeks = (days_ahead + 6) / 7;
        corrected = date
            .checked_sub_signed(Duration::weeks(weeks))
            .unwrap_or(reference);
    }
    if corrected > reference {
        tracing::debug!("Clamping same-day future time to reference");
        corrected = reference;
    }
    corrected
}

/// Strictly after the reference instant.
pub fn is_future(date: &NaiveDateTime, reference: &NaiveDateTime) -> bool {
    date > reference
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Weekday};

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn past_dates_unchanged() {
        let reference = at(2024, 3, 13, 10);
        assert_eq!(correct_future_date(at(2024, 3, 11, 12), reference), at(2024, 3, 11, 12));
    }

    #[test]
    fn future_weekday_rolls_back_one_week() {
        // Wednesday reference; Friday of the same week is in the future.
        let reference = at(2024, 3, 13, 10);
        let corrected = correct_future_date(at(2024, 3, 15, 12), reference);
        assert_eq!(corrected, at(2024, 3, 8, 12));
        assert_eq!(corrected.weekday(), Weekday::Fri);
    }

    #[test]
    fn far_future_rolls_back_whole_weeks() {
        let reference = at(2024, 3, 13, 10);
        let corrected = correct_future_date(at(2024, 4, 2, 12), reference);
        assert!(corrected <= reference);
        assert!((reference.date() - corrected.date()).num_days() < 7);
        assert_eq!(corrected.weekday(), Weekday::Tue);
    }

    #[test]
    fn same_day_later_time_clamps() {
        let reference = at(2024, 3, 13, 10);
        assert_eq!(correct_future_date(at(2024, 3, 13, 12), reference), reference);
    }

    #[test]
    fn future_check() {
        let reference = at(2024, 3, 13, 10);
        assert!(is_future(&at(2024, 3, 13, 11), &reference));
        assert!(!is_future(&reference, &reference));
    }
}
