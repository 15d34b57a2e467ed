//! Handlers for appointment endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::appointment::{
    AppointmentItem, AppointmentListResponse, CreateAppointmentRequest, DayQuery,
};
use crate::error::AppError;
use crate::state::AppState;

/// Books a new appointment.
///
/// # Endpoint
///
/// `POST /api/appointments`
///
/// # Request Body
///
/// ```json
/// {
///   "tenant_id": 1,
///   "customer_id": 12,
///   "service_id": 3,
///   "date": "2026-01-03T10:00:00Z",
///   "notes": "Beard trim"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 `validation_error` if the payload is invalid or references a missing record.
/// Returns 400 `business_closed` if the tenant does not open on that day.
/// Returns 400 `outside_operating_hours` if the time is outside the tenant's hours.
/// Returns 503 if the database is unavailable.
pub async fn create_appointment_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentItem>), AppError> {
    payload.validate()?;

    let appointment = state
        .appointment_service
        .create_appointment(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(appointment.into())))
}

/// Lists a tenant's appointments on one UTC day.
///
/// # Endpoint
///
/// `GET /api/tenants/{tenant_id}/appointments?date=2026-01-03T00:00:00Z`
pub async fn list_appointments_handler(
    Path(tenant_id): Path<i64>,
    Query(query): Query<DayQuery>,
    State(state): State<AppState>,
) -> Result<Json<AppointmentListResponse>, AppError> {
    let appointments = state
        .appointment_service
        .appointments_on(tenant_id, query.date)
        .await?;

    Ok(Json(AppointmentListResponse {
        tenant_id,
        date: query.date.date_naive(),
        items: appointments.into_iter().map(AppointmentItem::from).collect(),
    }))
}
