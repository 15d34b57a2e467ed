//! Domain entity representing a booked appointment.

use chrono::{DateTime, Utc};

/// An appointment booked by a customer for one of a tenant's services.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i64,
    pub tenant_id: i64,
    pub customer_id: i64,
    pub service_id: i64,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Creates a new Appointment instance.
    pub fn new(
        id: i64,
        tenant_id: i64,
        customer_id: i64,
        service_id: i64,
        date: DateTime<Utc>,
        notes: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tenant_id,
            customer_id,
            service_id,
            date,
            notes,
            created_at,
        }
    }
}

/// Input data for booking a new appointment.
///
/// `date` is the appointment start as an absolute UTC instant.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub tenant_id: i64,
    pub customer_id: i64,
    pub service_id: i64,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
}
