//! PostgreSQL implementation of the appointment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Appointment, NewAppointment};
use crate::domain::repositories::AppointmentRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct AppointmentRow {
    id: i64,
    tenant_id: i64,
    customer_id: i64,
    service_id: i64,
    starts_at: DateTime<Utc>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<AppointmentRow> for Appointment {
    fn from(r: AppointmentRow) -> Self {
        Appointment::new(
            r.id,
            r.tenant_id,
            r.customer_id,
            r.service_id,
            r.starts_at,
            r.notes,
            r.created_at,
        )
    }
}

/// PostgreSQL repository for appointments.
///
/// Foreign keys on tenant, customer and service surface as
/// [`AppError::Validation`] through [`crate::error::map_sqlx_error`].
pub struct PgAppointmentRepository {
    pool: Arc<PgPool>,
}

impl PgAppointmentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn create(&self, new_appointment: NewAppointment) -> Result<Appointment, AppError> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            r#"
            INSERT INTO appointments (tenant_id, customer_id, service_id, starts_at, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, tenant_id, customer_id, service_id, starts_at, notes, created_at
            "#,
        )
        .bind(new_appointment.tenant_id)
        .bind(new_appointment.customer_id)
        .bind(new_appointment.service_id)
        .bind(new_appointment.date)
        .bind(new_appointment.notes)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_in_range(
        &self,
        tenant_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Appointment>, AppError> {
        let rows = sqlx::query_as::<_, AppointmentRow>(
            r#"
            SELECT id, tenant_id, customer_id, service_id, starts_at, notes, created_at
            FROM appointments
            WHERE tenant_id = $1
              AND starts_at >= $2
              AND starts_at < $3 + interval '1 millisecond'
            ORDER BY starts_at, id
            "#,
        )
        .bind(tenant_id)
        .bind(from)
        .bind(to)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Appointment::from).collect())
    }
}
