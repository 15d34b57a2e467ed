//! Business logic services for the application layer.

pub mod appointment_service;
pub mod operating_hours_validator;

pub use appointment_service::AppointmentService;
pub use operating_hours_validator::OperatingHoursValidator;
