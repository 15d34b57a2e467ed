//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::operating_hours_validator::OperatingHoursValidator`] - Operating-hours guard for bookings
//! - [`services::appointment_service::AppointmentService`] - Appointment booking and day listings

pub mod services;
