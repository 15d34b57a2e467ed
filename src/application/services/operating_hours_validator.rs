//! Operating-hours guard for appointment bookings.

use crate::domain::entities::{DayOfWeek, OperatingHour};
use crate::domain::repositories::OperatingHourRepository;
use crate::domain::violation::OperatingHoursViolation;
use crate::error::AppError;
use crate::utils::datetime::format_time_utc;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Decides whether an instant falls inside a tenant's business hours.
///
/// Stateless apart from the repository handle: every call re-reads the
/// configuration for the relevant day, so two calls with the same arguments
/// and unchanged storage return the same outcome.
pub struct OperatingHoursValidator {
    repository: Arc<dyn OperatingHourRepository>,
}

impl OperatingHoursValidator {
    /// Creates a new validator.
    pub fn new(repository: Arc<dyn OperatingHourRepository>) -> Self {
        Self { repository }
    }

    /// Checks that `instant` is bookable for `tenant_id`.
    ///
    /// The instant is interpreted in UTC. Its day of week selects the
    /// operating-hour record, and its `HH:mm` time-of-day must lie within
    /// `[start_time, end_time]`, both ends included. Seconds are ignored.
    ///
    /// A day without any record is treated the same as a closed day.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::OperatingHours`] with
    /// [`OperatingHoursViolation::ClosedDay`] if the day is closed or not configured.
    /// Returns [`AppError::OperatingHours`] with
    /// [`OperatingHoursViolation::OutsideHours`] if the time is outside the window.
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] if the
    /// repository read fails.
    pub async fn assert_within_operating_hours(
        &self,
        tenant_id: i64,
        instant: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let day = DayOfWeek::from_instant(instant);

        let hours = self
            .repository
            .find_operating_hour(tenant_id, day)
            .await?;

        check_hours(hours.as_ref(), instant).map_err(|violation| {
            tracing::debug!(
                tenant_id,
                %day,
                instant = %instant,
                reason = violation.code(),
                "Booking rejected by operating hours"
            );
            AppError::from(violation)
        })
    }

    /// Lists a tenant's configured days.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] if the
    /// repository read fails.
    pub async fn tenant_schedule(&self, tenant_id: i64) -> Result<Vec<OperatingHour>, AppError> {
        self.repository.list_for_tenant(tenant_id).await
    }
}

/// Pure part of the check, applied to the record fetched for the instant's day.
fn check_hours(
    hours: Option<&OperatingHour>,
    instant: DateTime<Utc>,
) -> Result<(), OperatingHoursViolation> {
    let hours = match hours {
        Some(hours) if !hours.is_closed => hours,
        _ => return Err(OperatingHoursViolation::ClosedDay),
    };

    if !hours.admits(&format_time_utc(instant)) {
        return Err(OperatingHoursViolation::OutsideHours);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockOperatingHourRepository;
    use chrono::{Duration, TimeZone};
    use mockall::predicate::eq;
    use serde_json::json;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn hours(day: DayOfWeek, start: &str, end: &str, is_closed: bool) -> OperatingHour {
        OperatingHour::new(
            1,
            42,
            day,
            start.to_string(),
            end.to_string(),
            is_closed,
        )
    }

    fn validator_with(record: Option<OperatingHour>) -> OperatingHoursValidator {
        let mut mock_repo = MockOperatingHourRepository::new();
        mock_repo
            .expect_find_operating_hour()
            .returning(move |_, _| Ok(record.clone()));

        OperatingHoursValidator::new(Arc::new(mock_repo))
    }

    #[tokio::test]
    async fn test_closed_day_rejected() {
        let validator = validator_with(Some(hours(DayOfWeek::Sunday, "09:00", "18:00", true)));

        let result = validator
            .assert_within_operating_hours(42, utc(2026, 1, 4, 12, 0))
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.as_violation(), Some(OperatingHoursViolation::ClosedDay));
        assert_eq!(err.to_string(), "The business is closed on the chosen date.");
    }

    #[tokio::test]
    async fn test_closed_day_rejected_at_any_time() {
        let validator = validator_with(Some(hours(DayOfWeek::Sunday, "00:00", "23:59", true)));
        let midnight = utc(2026, 1, 4, 0, 0);

        for minutes in (0..24 * 60).step_by(37) {
            let result = validator
                .assert_within_operating_hours(42, midnight + Duration::minutes(minutes))
                .await;

            assert_eq!(
                result.unwrap_err().as_violation(),
                Some(OperatingHoursViolation::ClosedDay)
            );
        }
    }

    #[tokio::test]
    async fn test_missing_record_treated_as_closed() {
        let validator = validator_with(None);

        let result = validator
            .assert_within_operating_hours(42, utc(2026, 1, 6, 10, 0))
            .await;

        assert_eq!(
            result.unwrap_err().as_violation(),
            Some(OperatingHoursViolation::ClosedDay)
        );
    }

    #[tokio::test]
    async fn test_outside_hours_rejected() {
        let validator =
            validator_with(Some(hours(DayOfWeek::Saturday, "09:00", "18:00", false)));

        let result = validator
            .assert_within_operating_hours(42, utc(2026, 1, 3, 20, 0))
            .await;

        let err = result.unwrap_err();
        assert_eq!(
            err.as_violation(),
            Some(OperatingHoursViolation::OutsideHours)
        );
        assert_eq!(
            err.to_string(),
            "The chosen time is outside of operating hours."
        );
    }

    #[tokio::test]
    async fn test_within_hours_accepted() {
        let validator =
            validator_with(Some(hours(DayOfWeek::Saturday, "09:00", "18:00", false)));

        let result = validator
            .assert_within_operating_hours(42, utc(2026, 1, 3, 10, 0))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_boundaries_are_inclusive() {
        let validator =
            validator_with(Some(hours(DayOfWeek::Saturday, "09:00", "18:00", false)));

        for (hour, minute, accepted) in [(9, 0, true), (18, 0, true), (8, 59, false), (18, 1, false)]
        {
            let result = validator
                .assert_within_operating_hours(42, utc(2026, 1, 3, hour, minute))
                .await;

            assert_eq!(result.is_ok(), accepted, "{hour:02}:{minute:02}");
            if !accepted {
                assert_eq!(
                    result.unwrap_err().as_violation(),
                    Some(OperatingHoursViolation::OutsideHours)
                );
            }
        }
    }

    #[tokio::test]
    async fn test_seconds_past_end_time_accepted() {
        let validator =
            validator_with(Some(hours(DayOfWeek::Saturday, "09:00", "18:00", false)));
        let instant = utc(2026, 1, 3, 18, 0) + Duration::seconds(59);

        assert!(
            validator
                .assert_within_operating_hours(42, instant)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_queries_day_of_instant() {
        let mut mock_repo = MockOperatingHourRepository::new();
        mock_repo
            .expect_find_operating_hour()
            .with(eq(42), eq(DayOfWeek::Saturday))
            .times(1)
            .returning(|_, day| Ok(Some(hours(day, "09:00", "18:00", false))));

        let validator = OperatingHoursValidator::new(Arc::new(mock_repo));

        let result = validator
            .assert_within_operating_hours(42, utc(2026, 1, 3, 10, 0))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_storage_failure_is_not_a_violation() {
        let mut mock_repo = MockOperatingHourRepository::new();
        mock_repo
            .expect_find_operating_hour()
            .times(1)
            .returning(|_, _| Err(AppError::unavailable("Database unavailable", json!({}))));

        let validator = OperatingHoursValidator::new(Arc::new(mock_repo));

        let err = validator
            .assert_within_operating_hours(42, utc(2026, 1, 3, 10, 0))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Unavailable { .. }));
        assert!(err.as_violation().is_none());
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_repeated_calls_are_idempotent() {
        let mut mock_repo = MockOperatingHourRepository::new();
        mock_repo
            .expect_find_operating_hour()
            .times(4)
            .returning(|_, day| Ok(Some(hours(day, "09:00", "18:00", false))));

        let validator = OperatingHoursValidator::new(Arc::new(mock_repo));
        let inside = utc(2026, 1, 3, 10, 0);
        let outside = utc(2026, 1, 3, 20, 0);

        let first = validator.assert_within_operating_hours(42, inside).await;
        let second = validator.assert_within_operating_hours(42, inside).await;
        assert!(first.is_ok() && second.is_ok());

        let first = validator.assert_within_operating_hours(42, outside).await;
        let second = validator.assert_within_operating_hours(42, outside).await;
        assert_eq!(
            first.unwrap_err().as_violation(),
            second.unwrap_err().as_violation()
        );
    }

    #[tokio::test]
    async fn test_tenant_schedule() {
        let mut mock_repo = MockOperatingHourRepository::new();
        mock_repo
            .expect_list_for_tenant()
            .with(eq(42))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    hours(DayOfWeek::Monday, "09:00", "18:00", false),
                    hours(DayOfWeek::Sunday, "00:00", "00:00", true),
                ])
            });

        let validator = OperatingHoursValidator::new(Arc::new(mock_repo));

        let schedule = validator.tenant_schedule(42).await.unwrap();
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_check_hours_closed_record_wins_over_times() {
        let record = hours(DayOfWeek::Saturday, "00:00", "23:59", true);

        assert_eq!(
            check_hours(Some(&record), utc(2026, 1, 3, 12, 0)),
            Err(OperatingHoursViolation::ClosedDay)
        );
    }
}
