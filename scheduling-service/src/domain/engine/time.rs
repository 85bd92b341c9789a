//! Pure calendar arithmetic. No I/O, no timezone-aware wall-clock math:
//! every scheduled event is day-granular, so the engine works entirely in
//! `NaiveDate`. `SchedulingConfig::timezone` is carried only as an
//! annotation for audit entries.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub fn weekday(date: NaiveDate) -> Weekday {
    date.weekday()
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Inclusive iterator over `[start, end]`.
pub fn iter_days(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let span = if end >= start { (end - start).num_days() } else { -1 };
    (0..=span).map(move |offset| start + Duration::days(offset))
}

/// The Monday..Saturday bucket a date falls into. Sunday is not a SysAid
/// day and is bucketed with the week that starts the following Monday,
/// matching `week_start_monday` being the nearest Monday on or before
/// `date`.
pub fn week_bucket(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let days_from_monday = date.weekday().num_days_from_monday() as i64;
    let week_start = date - Duration::days(days_from_monday);
    let week_end = week_start + Duration::days(5);
    (week_start, week_end)
}

/// Mondays of every SysAid week overlapping `[start, end]`.
pub fn week_starts_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let (first_week_start, _) = week_bucket(start);
    let mut starts = Vec::new();
    let mut cursor = first_week_start;
    while cursor <= end {
        starts.push(cursor);
        cursor += Duration::days(7);
    }
    starts
}
