//! Booking rule violations.

/// A booking request rejected by the tenant's operating hours.
///
/// Both variants are client errors: the user has to pick another date or
/// time. They are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OperatingHoursViolation {
    /// No operating hours are configured for the day, or the day is marked closed.
    #[error("The business is closed on the chosen date.")]
    ClosedDay,

    /// The day is open but the time falls outside `[start_time, end_time]`.
    #[error("The chosen time is outside of operating hours.")]
    OutsideHours,
}

impl OperatingHoursViolation {
    /// Machine-readable code used in API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ClosedDay => "business_closed",
            Self::OutsideHours => "outside_operating_hours",
        }
    }
}
