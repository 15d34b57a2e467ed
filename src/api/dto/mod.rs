//! Data Transfer Objects for API requests and responses.

pub mod appointment;
pub mod availability;
pub mod health;
