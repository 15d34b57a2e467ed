//! Domain entity describing a tenant's business hours for one day of the week.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the week as stored in the `operating_hours.day` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Day names indexed by days since Sunday (`0` = Sunday .. `6` = Saturday).
const DAYS_FROM_SUNDAY: [DayOfWeek; 7] = [
    DayOfWeek::Sunday,
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
];

impl DayOfWeek {
    /// All days in calendar order starting from Monday.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Day of the week of `instant` in UTC.
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        // num_days_from_sunday() is always 0..=6
        DAYS_FROM_SUNDAY[instant.weekday().num_days_from_sunday() as usize]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
            DayOfWeek::Sunday => "SUNDAY",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored day name is not one of the seven known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day of week: {0}")]
pub struct UnknownDayOfWeek(pub String);

impl FromStr for DayOfWeek {
    type Err = UnknownDayOfWeek;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDayOfWeek(s.to_string()))
    }
}

/// Business hours of a tenant for a single day of the week.
///
/// `start_time` and `end_time` are zero-padded `HH:mm` strings referenced to
/// UTC. The bookable window is `[start_time, end_time]`, inclusive on both ends.
/// When `is_closed` is set the times are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatingHour {
    pub id: i64,
    pub tenant_id: i64,
    pub day: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub is_closed: bool,
}

impl OperatingHour {
    /// Creates a new OperatingHour instance.
    pub fn new(
        id: i64,
        tenant_id: i64,
        day: DayOfWeek,
        start_time: String,
        end_time: String,
        is_closed: bool,
    ) -> Self {
        Self {
            id,
            tenant_id,
            day,
            start_time,
            end_time,
            is_closed,
        }
    }

    /// Returns true if `time` (`HH:mm`) falls inside the open window.
    ///
    /// Always false on a closed day.
    pub fn admits(&self, time: &str) -> bool {
        !self.is_closed && time >= self.start_time.as_str() && time <= self.end_time.as_str()
    }
}
