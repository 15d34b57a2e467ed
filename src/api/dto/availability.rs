//! DTOs for the availability check endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::DayOfWeek;
use crate::error::ErrorInfo;

/// Query parameters for an availability check.
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Candidate appointment instant, RFC 3339.
    pub at: DateTime<Utc>,
}

/// Result of checking one instant against a tenant's operating hours.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub tenant_id: i64,
    pub at: DateTime<Utc>,
    pub day: DayOfWeek,
    /// UTC time-of-day that was compared, `HH:mm`.
    pub time: String,
    pub bookable: bool,

    /// Why the instant is not bookable. Absent when `bookable` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ErrorInfo>,
}
