//! Appointment booking service.

use crate::application::services::OperatingHoursValidator;
use crate::domain::entities::{Appointment, NewAppointment};
use crate::domain::repositories::AppointmentRepository;
use crate::error::AppError;
use crate::utils::datetime::day_range_utc;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Service for booking and listing appointments.
///
/// Every booking is checked against the tenant's operating hours before it
/// reaches storage. There is no double-booking protection at this level.
pub struct AppointmentService {
    repository: Arc<dyn AppointmentRepository>,
    validator: Arc<OperatingHoursValidator>,
}

impl AppointmentService {
    /// Creates a new appointment service.
    pub fn new(
        repository: Arc<dyn AppointmentRepository>,
        validator: Arc<OperatingHoursValidator>,
    ) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Books a new appointment.
    ///
    /// Nothing is persisted unless the date passes
    /// [`OperatingHoursValidator::assert_within_operating_hours`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::OperatingHours`] if the tenant is closed or the
    /// time is outside operating hours.
    /// Returns [`AppError::Validation`] if a referenced record does not exist.
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on storage errors.
    pub async fn create_appointment(
        &self,
        new_appointment: NewAppointment,
    ) -> Result<Appointment, AppError> {
        self.validator
            .assert_within_operating_hours(new_appointment.tenant_id, new_appointment.date)
            .await?;

        let appointment = self.repository.create(new_appointment).await?;

        tracing::info!(
            appointment_id = appointment.id,
            tenant_id = appointment.tenant_id,
            date = %appointment.date,
            "Appointment booked"
        );

        Ok(appointment)
    }

    /// Lists a tenant's appointments on the UTC calendar day of `date`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on storage errors.
    pub async fn appointments_on(
        &self,
        tenant_id: i64,
        date: DateTime<Utc>,
    ) -> Result<Vec<Appointment>, AppError> {
        let range = day_range_utc(date);

        self.repository
            .list_in_range(tenant_id, range.start, range.end)
            .await
    }
}
