//! PostgreSQL implementation of the operating hour repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{DayOfWeek, OperatingHour};
use crate::domain::repositories::OperatingHourRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct OperatingHourRow {
    id: i64,
    tenant_id: i64,
    day: String,
    start_time: String,
    end_time: String,
    is_closed: bool,
}

impl TryFrom<OperatingHourRow> for OperatingHour {
    type Error = AppError;

    fn try_from(row: OperatingHourRow) -> Result<Self, Self::Error> {
        let day: DayOfWeek = row.day.parse().map_err(|_| {
            AppError::internal(
                "Invalid day stored for operating hour",
                json!({"id": row.id, "day": row.day}),
            )
        })?;

        Ok(OperatingHour::new(
            row.id,
            row.tenant_id,
            day,
            row.start_time,
            row.end_time,
            row.is_closed,
        ))
    }
}

/// PostgreSQL repository for tenant operating hours.
pub struct PgOperatingHourRepository {
    pool: Arc<PgPool>,
}

impl PgOperatingHourRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OperatingHourRepository for PgOperatingHourRepository {
    async fn find_operating_hour(
        &self,
        tenant_id: i64,
        day: DayOfWeek,
    ) -> Result<Option<OperatingHour>, AppError> {
        // No unique constraint on (tenant_id, day): the oldest row wins.
        let row = sqlx::query_as::<_, OperatingHourRow>(
            r#"
            SELECT id, tenant_id, day, start_time, end_time, is_closed
            FROM operating_hours
            WHERE tenant_id = $1 AND day = $2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(tenant_id)
        .bind(day.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(OperatingHour::try_from).transpose()
    }

    async fn list_for_tenant(&self, tenant_id: i64) -> Result<Vec<OperatingHour>, AppError> {
        let rows = sqlx::query_as::<_, OperatingHourRow>(
            r#"
            SELECT id, tenant_id, day, start_time, end_time, is_closed
            FROM operating_hours
            WHERE tenant_id = $1
            ORDER BY CASE day
                WHEN 'MONDAY' THEN 1
                WHEN 'TUESDAY' THEN 2
                WHEN 'WEDNESDAY' THEN 3
                WHEN 'THURSDAY' THEN 4
                WHEN 'FRIDAY' THEN 5
                WHEN 'SATURDAY' THEN 6
                ELSE 7
            END, id
            "#,
        )
        .bind(tenant_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(OperatingHour::try_from).collect()
    }

    async fn health_check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(self.pool.as_ref()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}
