//! Date math for the weekly session.
//!
//! Everything here is pure: callers inject "today" / "now" and receive
//! dates back. Nothing in this module reads the wall clock.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

/// Confirmation closes this many days before the session date.
pub const DEADLINE_DAY_OFFSET: i64 = 1;

/// ...at this local hour (14:00).
pub const DEADLINE_HOUR: u32 = 14;

/// Next occurrence of `target` strictly after `from`'s weekday.
///
/// A `from` that already falls on `target` advances a full week, never
/// zero days: asking for "next Sunday" on a Sunday gives the Sunday
/// seven days out.
pub fn next_occurrence_of(target: Weekday, from: NaiveDate) -> NaiveDate {
    let from_wd = from.weekday().num_days_from_sunday() as i64;
    let target_wd = target.num_days_from_sunday() as i64;

    let mut delta = (7 - from_wd + target_wd) % 7;
    if delta == 0 {
        delta = 7;
    }

    from + Duration::days(delta)
}

/// The session runs on Sundays.
pub fn next_sunday(from: NaiveDate) -> NaiveDate {
    next_occurrence_of(Weekday::Sun, from)
}

/// Whether `now` is at or past the confirmation deadline for
/// `target_date` (the day before, at [`DEADLINE_HOUR`] local time).
pub fn is_past_deadline(now: NaiveDateTime, target_date: NaiveDate) -> bool {
    let deadline_day = target_date - Duration::days(DEADLINE_DAY_OFFSET);
    let deadline = deadline_day
        .and_hms_opt(DEADLINE_HOUR, 0, 0)
        .expect("deadline hour is a valid time of day");

    now >= deadline
}

/// Canonical date key used to identify a game in the external store.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Short DD/MM label for the report header.
pub fn short_label(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_sunday_from_sunday_is_a_full_week_out() {
        // 2024-01-07 is a Sunday
        assert_eq!(date(2024, 1, 7).weekday(), Weekday::Sun);
        assert_eq!(next_sunday(date(2024, 1, 7)), date(2024, 1, 14));
    }

    #[test]
    fn test_next_sunday_from_midweek() {
        // Wednesday -> the coming Sunday
        assert_eq!(next_sunday(date(2024, 1, 3)), date(2024, 1, 7));
        // Saturday -> tomorrow
        assert_eq!(next_sunday(date(2024, 1, 6)), date(2024, 1, 7));
    }

    #[test]
    fn test_next_occurrence_for_every_start_weekday() {
        // One full week starting Monday 2024-01-01; every result must be
        // a Sunday within 1..=7 days.
        for offset in 0..7 {
            let from = date(2024, 1, 1) + Duration::days(offset);
            let next = next_occurrence_of(Weekday::Sun, from);
            assert_eq!(next.weekday(), Weekday::Sun);
            let delta = (next - from).num_days();
            assert!((1..=7).contains(&delta), "delta {} for {}", delta, from);
        }
    }

    #[test]
    fn test_deadline_is_saturday_fourteen_hundred() {
        let sunday = date(2024, 1, 14);

        let before = date(2024, 1, 13).and_hms_opt(13, 59, 59).unwrap();
        assert!(!is_past_deadline(before, sunday));

        // Deadline instant itself counts as past
        let exactly = date(2024, 1, 13).and_hms_opt(14, 0, 0).unwrap();
        assert!(is_past_deadline(exactly, sunday));

        let after = date(2024, 1, 13).and_hms_opt(14, 0, 1).unwrap();
        assert!(is_past_deadline(after, sunday));
    }

    #[test]
    fn test_date_labels() {
        assert_eq!(date_key(date(2024, 1, 14)), "2024-01-14");
        assert_eq!(short_label(date(2024, 1, 14)), "14/01");
    }
}
