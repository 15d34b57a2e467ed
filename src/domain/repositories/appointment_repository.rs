//! Repository trait for appointment storage.

use crate::domain::entities::{Appointment, NewAppointment};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for appointments.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAppointmentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Persists a new appointment.
    ///
    /// No business rules are checked here; callers go through
    /// [`crate::application::services::AppointmentService`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the tenant, customer or service does not exist.
    /// Returns [`AppError::Unavailable`] if the database cannot be reached.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create(&self, new_appointment: NewAppointment) -> Result<Appointment, AppError>;

    /// Lists a tenant's appointments with `from <= date <= to`, ordered by date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database cannot be reached.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn list_in_range(
        &self,
        tenant_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Appointment>, AppError>;
}
