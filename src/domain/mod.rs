//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`violation`] - Booking rule violations reported to users
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Booking Flow
//!
//! 1. HTTP handler receives `POST /api/appointments`
//! 2. [`crate::application::services::AppointmentService`] asks the
//!    [`crate::application::services::OperatingHoursValidator`] whether the date is bookable
//! 3. The validator reads the day's [`entities::OperatingHour`] via
//!    [`repositories::OperatingHourRepository`]
//! 4. On success the appointment is persisted via [`repositories::AppointmentRepository`]

pub mod entities;
pub mod repositories;
pub mod violation;
