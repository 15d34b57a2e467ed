//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgOperatingHourRepository`] - Tenant operating hours lookups
//! - [`PgAppointmentRepository`] - Appointment storage and day listings

pub mod pg_appointment_repository;
pub mod pg_operating_hour_repository;

pub use pg_appointment_repository::PgAppointmentRepository;
pub use pg_operating_hour_repository::PgOperatingHourRepository;
