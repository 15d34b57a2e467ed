//! Repository trait for reading tenant operating hours.

use crate::domain::entities::{DayOfWeek, OperatingHour};
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to per-tenant, per-day operating hours.
///
/// Records are managed elsewhere; this crate only reads them. At most one
/// record per `(tenant_id, day)` is expected, but implementations must return
/// the first one by insertion order if several exist.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOperatingHourRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OperatingHourRepository: Send + Sync {
    /// Finds the operating hours of a tenant for a given day.
    ///
    /// Returns `Ok(None)` when the tenant has not configured that day.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database cannot be reached.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn find_operating_hour(
        &self,
        tenant_id: i64,
        day: DayOfWeek,
    ) -> Result<Option<OperatingHour>, AppError>;

    /// Lists every configured day of a tenant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the database cannot be reached.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn list_for_tenant(&self, tenant_id: i64) -> Result<Vec<OperatingHour>, AppError>;

    /// Checks if the storage backend is reachable.
    async fn health_check(&self) -> bool;
}
