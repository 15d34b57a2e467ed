//! DTOs for appointment endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Appointment, NewAppointment};

/// Request to book an appointment.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAppointmentRequest {
    #[validate(range(min = 1))]
    pub tenant_id: i64,

    #[validate(range(min = 1))]
    pub customer_id: i64,

    #[validate(range(min = 1))]
    pub service_id: i64,

    /// Appointment start, RFC 3339. Converted to UTC before validation.
    pub date: DateTime<Utc>,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

impl From<CreateAppointmentRequest> for NewAppointment {
    fn from(req: CreateAppointmentRequest) -> Self {
        NewAppointment {
            tenant_id: req.tenant_id,
            customer_id: req.customer_id,
            service_id: req.service_id,
            date: req.date,
            notes: req.notes,
        }
    }
}

/// Individual appointment information.
#[derive(Debug, Serialize)]
pub struct AppointmentItem {
    pub id: i64,
    pub tenant_id: i64,
    pub customer_id: i64,
    pub service_id: i64,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentItem {
    fn from(a: Appointment) -> Self {
        AppointmentItem {
            id: a.id,
            tenant_id: a.tenant_id,
            customer_id: a.customer_id,
            service_id: a.service_id,
            date: a.date,
            notes: a.notes,
            created_at: a.created_at,
        }
    }
}

/// Query parameters selecting a UTC calendar day.
#[derive(Debug, Deserialize)]
pub struct DayQuery {
    /// Any instant on the wanted day, RFC 3339.
    pub date: DateTime<Utc>,
}

/// Appointments of one tenant on one UTC day.
#[derive(Debug, Serialize)]
pub struct AppointmentListResponse {
    pub tenant_id: i64,
    pub date: NaiveDate,
    pub items: Vec<AppointmentItem>,
}
