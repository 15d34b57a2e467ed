//! API route configuration.

use crate::api::handlers::{
    availability_handler, create_appointment_handler, list_appointments_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /appointments`                          - Book an appointment
/// - `GET  /tenants/{tenant_id}/appointments`      - Appointments on a UTC day (`?date=`)
/// - `GET  /tenants/{tenant_id}/availability`      - Check an instant against operating hours (`?at=`)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", post(create_appointment_handler))
        .route(
            "/tenants/{tenant_id}/appointments",
            get(list_appointments_handler),
        )
        .route(
            "/tenants/{tenant_id}/availability",
            get(availability_handler),
        )
}
