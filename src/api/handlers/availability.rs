//! Handler for checking an instant against a tenant's operating hours.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::availability::{AvailabilityQuery, AvailabilityResponse};
use crate::domain::entities::DayOfWeek;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::datetime::format_time_utc;

/// Reports whether an appointment could be booked at the given instant.
///
/// # Endpoint
///
/// `GET /api/tenants/{tenant_id}/availability?at=2026-01-03T10:00:00Z`
///
/// # Response
///
/// ```json
/// {
///   "tenant_id": 1,
///   "at": "2026-01-03T20:00:00Z",
///   "day": "SATURDAY",
///   "time": "20:00",
///   "bookable": false,
///   "reason": {
///     "code": "outside_operating_hours",
///     "message": "The chosen time is outside of operating hours.",
///     "details": {}
///   }
/// }
/// ```
///
/// # Errors
///
/// Rejections are part of the 200 response. Only storage faults produce an
/// error status (503 or 500).
pub async fn availability_handler(
    Path(tenant_id): Path<i64>,
    Query(query): Query<AvailabilityQuery>,
    State(state): State<AppState>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let outcome = state
        .operating_hours_validator
        .assert_within_operating_hours(tenant_id, query.at)
        .await;

    let reason = match outcome {
        Ok(()) => None,
        Err(err @ AppError::OperatingHours(_)) => Some(err.to_error_info()),
        Err(err) => return Err(err),
    };

    Ok(Json(AvailabilityResponse {
        tenant_id,
        at: query.at,
        day: DayOfWeek::from_instant(query.at),
        time: format_time_utc(query.at),
        bookable: reason.is_none(),
        reason,
    }))
}
