//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`OperatingHourRepository`] - Tenant business hours (read-only)
//! - [`AppointmentRepository`] - Appointment storage and day listings
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod appointment_repository;
pub mod operating_hour_repository;

pub use appointment_repository::AppointmentRepository;
pub use operating_hour_repository::OperatingHourRepository;

#[cfg(test)]
pub use appointment_repository::MockAppointmentRepository;
#[cfg(test)]
pub use operating_hour_repository::MockOperatingHourRepository;
