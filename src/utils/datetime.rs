//! UTC time-normalization helpers.
//!
//! Operating hours are stored as `HH:mm` strings referenced to UTC, so every
//! instant that gets compared against them goes through [`format_time_utc`].
//! The fixed width of that output is what makes plain string comparison a
//! valid time comparison.

use chrono::{DateTime, NaiveTime, Utc};

/// Last representable millisecond of a day.
const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(time) => time,
    None => panic!("23:59:59.999 is a valid time"),
};

/// Start and end instants of a single UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    /// `00:00:00.000` UTC.
    pub start: DateTime<Utc>,
    /// `23:59:59.999` UTC.
    pub end: DateTime<Utc>,
}

/// Returns the UTC day boundaries of the calendar date `date` falls on.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use salon_scheduler::utils::datetime::day_range_utc;
///
/// let range = day_range_utc(Utc.with_ymd_and_hms(2026, 1, 3, 12, 0, 0).unwrap());
/// assert_eq!(range.start.to_rfc3339(), "2026-01-03T00:00:00+00:00");
/// ```
pub fn day_range_utc(date: DateTime<Utc>) -> DayRange {
    // No day arithmetic here; it overflows on the last representable date.
    let day = date.date_naive();
    let start = day.and_time(NaiveTime::MIN).and_utc();
    let end = day.and_time(END_OF_DAY).and_utc();

    DayRange { start, end }
}

/// Formats the UTC time-of-day of `date` as zero-padded `HH:mm`.
///
/// Seconds and sub-seconds are truncated, so `18:00:59` formats as `18:00`.
pub fn format_time_utc(date: DateTime<Utc>) -> String {
    date.format("%H:%M").to_string()
}

/// Current UTC instant.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
