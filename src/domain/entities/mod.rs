//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; the booking rules that operate on them
//! live in [`crate::application::services`].
//!
//! # Entity Types
//!
//! - [`OperatingHour`] - A tenant's business hours for one day of the week
//! - [`Appointment`] - A booked appointment
//!
//! `NewAppointment` carries the input for creating a record.

pub mod appointment;
pub mod operating_hour;

pub use appointment::{Appointment, NewAppointment};
pub use operating_hour::{DayOfWeek, OperatingHour, UnknownDayOfWeek};
