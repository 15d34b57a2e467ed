//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod appointments;
pub mod availability;
pub mod health;

pub use appointments::{create_appointment_handler, list_appointments_handler};
pub use availability::availability_handler;
pub use health::health_handler;
