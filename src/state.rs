//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AppointmentService, OperatingHoursValidator};
use crate::domain::repositories::{AppointmentRepository, OperatingHourRepository};

#[derive(Clone)]
pub struct AppState {
    pub appointment_service: Arc<AppointmentService>,
    pub operating_hours_validator: Arc<OperatingHoursValidator>,
    pub operating_hour_repository: Arc<dyn OperatingHourRepository>,
}

impl AppState {
    /// Wires services on top of the given repositories.
    pub fn new(
        operating_hour_repository: Arc<dyn OperatingHourRepository>,
        appointment_repository: Arc<dyn AppointmentRepository>,
    ) -> Self {
        let operating_hours_validator = Arc::new(OperatingHoursValidator::new(
            operating_hour_repository.clone(),
        ));
        let appointment_service = Arc::new(AppointmentService::new(
            appointment_repository,
            operating_hours_validator.clone(),
        ));

        Self {
            appointment_service,
            operating_hours_validator,
            operating_hour_repository,
        }
    }
}
