//! Utility functions shared across layers.
//!
//! - [`datetime`] - UTC day boundaries and `HH:mm` formatting
pub mod datetime;
