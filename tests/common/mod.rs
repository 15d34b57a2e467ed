#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use salon_scheduler::domain::entities::{Appointment, DayOfWeek, NewAppointment, OperatingHour};
use salon_scheduler::domain::repositories::{AppointmentRepository, OperatingHourRepository};
use salon_scheduler::error::AppError;
use salon_scheduler::state::AppState;
use serde_json::json;
use std::sync::{Arc, Mutex};

pub const TENANT_ID: i64 = 1;

/// Operating hours kept in memory, in insertion order.
pub struct InMemoryOperatingHours {
    records: Mutex<Vec<OperatingHour>>,
    healthy: Mutex<bool>,
}

impl InMemoryOperatingHours {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            healthy: Mutex::new(true),
        }
    }

    pub fn open(&self, tenant_id: i64, day: DayOfWeek, start: &str, end: &str) {
        self.push(tenant_id, day, start, end, false);
    }

    pub fn closed(&self, tenant_id: i64, day: DayOfWeek) {
        self.push(tenant_id, day, "00:00", "00:00", true);
    }

    pub fn set_healthy(&self, healthy: bool) {
        *self.healthy.lock().unwrap() = healthy;
    }

    fn push(&self, tenant_id: i64, day: DayOfWeek, start: &str, end: &str, is_closed: bool) {
        let mut records = self.records.lock().unwrap();
        let id = records.len() as i64 + 1;
        records.push(OperatingHour::new(
            id,
            tenant_id,
            day,
            start.to_string(),
            end.to_string(),
            is_closed,
        ));
    }
}

#[async_trait]
impl OperatingHourRepository for InMemoryOperatingHours {
    async fn find_operating_hour(
        &self,
        tenant_id: i64,
        day: DayOfWeek,
    ) -> Result<Option<OperatingHour>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|h| h.tenant_id == tenant_id && h.day == day)
            .cloned())
    }

    async fn list_for_tenant(&self, tenant_id: i64) -> Result<Vec<OperatingHour>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|h| h.tenant_id == tenant_id)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> bool {
        *self.healthy.lock().unwrap()
    }
}

/// Operating hour storage that is always down.
pub struct UnreachableOperatingHours;

#[async_trait]
impl OperatingHourRepository for UnreachableOperatingHours {
    async fn find_operating_hour(
        &self,
        _tenant_id: i64,
        _day: DayOfWeek,
    ) -> Result<Option<OperatingHour>, AppError> {
        Err(AppError::unavailable("Database unavailable", json!({})))
    }

    async fn list_for_tenant(&self, _tenant_id: i64) -> Result<Vec<OperatingHour>, AppError> {
        Err(AppError::unavailable("Database unavailable", json!({})))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

#[derive(Default)]
pub struct InMemoryAppointments {
    items: Mutex<Vec<Appointment>>,
}

impl InMemoryAppointments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointments {
    async fn create(&self, new_appointment: NewAppointment) -> Result<Appointment, AppError> {
        let mut items = self.items.lock().unwrap();
        let appointment = Appointment::new(
            items.len() as i64 + 1,
            new_appointment.tenant_id,
            new_appointment.customer_id,
            new_appointment.service_id,
            new_appointment.date,
            new_appointment.notes,
            Utc::now(),
        );
        items.push(appointment.clone());
        Ok(appointment)
    }

    async fn list_in_range(
        &self,
        tenant_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Appointment>, AppError> {
        let items = self.items.lock().unwrap();
        let mut found: Vec<Appointment> = items
            .iter()
            .filter(|a| a.tenant_id == tenant_id && a.date >= from && a.date <= to)
            .cloned()
            .collect();
        found.sort_by_key(|a| (a.date, a.id));
        Ok(found)
    }
}

/// Tenant open Monday to Saturday 09:00-18:00 UTC, closed on Sunday.
pub fn salon_hours() -> Arc<InMemoryOperatingHours> {
    let hours = Arc::new(InMemoryOperatingHours::new());
    for day in [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ] {
        hours.open(TENANT_ID, day, "09:00", "18:00");
    }
    hours.closed(TENANT_ID, DayOfWeek::Sunday);
    hours
}

pub fn create_test_state(
    hours: Arc<dyn OperatingHourRepository>,
    appointments: Arc<InMemoryAppointments>,
) -> AppState {
    AppState::new(hours, appointments)
}
