// In memory implementations of the availability ports.
//
// Purpose
// - Support handler tests and local development without the scheduling backend.
//
// Responsibilities
// - Keep schedules per therapist and bookings per therapist and day.
// - Simulate an unreachable backend with `toggle_offline`.

use std::collections::HashMap;

use anyhow::bail;
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::modules::availability::core::ports::{BookingsProvider, ScheduleProvider};
use crate::modules::availability::core::schedule::{BookedInterval, WeeklyScheduleEntry};

#[derive(Default)]
pub struct InMemoryScheduleProvider {
    schedules: RwLock<HashMap<String, Vec<WeeklyScheduleEntry>>>,
    is_offline: bool,
}

impl InMemoryScheduleProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn with(mut self, therapist_id: &str, schedule: Vec<WeeklyScheduleEntry>) -> Self {
        self.schedules
            .get_mut()
            .insert(therapist_id.to_string(), schedule);
        self
    }

    pub async fn put(&self, therapist_id: &str, schedule: Vec<WeeklyScheduleEntry>) {
        self.schedules
            .write()
            .await
            .insert(therapist_id.to_string(), schedule);
    }
}

#[async_trait]
impl ScheduleProvider for InMemoryScheduleProvider {
    async fn weekly_schedule(&self, therapist_id: &str) -> anyhow::Result<Vec<WeeklyScheduleEntry>> {
        if self.is_offline {
            bail!("Schedule provider offline");
        }
        Ok(self
            .schedules
            .read()
            .await
            .get(therapist_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub struct InMemoryBookingsProvider {
    bookings: RwLock<HashMap<(String, NaiveDate), Vec<BookedInterval>>>,
    is_offline: bool,
}

impl InMemoryBookingsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn with(mut self, therapist_id: &str, date: NaiveDate, bookings: Vec<BookedInterval>) -> Self {
        self.bookings
            .get_mut()
            .insert((therapist_id.to_string(), date), bookings);
        self
    }

    pub async fn put(&self, therapist_id: &str, date: NaiveDate, bookings: Vec<BookedInterval>) {
        self.bookings
            .write()
            .await
            .insert((therapist_id.to_string(), date), bookings);
    }
}

#[async_trait]
impl BookingsProvider for InMemoryBookingsProvider {
    async fn booked_intervals(
        &self,
        therapist_id: &str,
        date: NaiveDate,
    ) -> anyhow::Result<Vec<BookedInterval>> {
        if self.is_offline {
            bail!("Bookings provider offline");
        }
        Ok(self
            .bookings
            .read()
            .await
            .get(&(therapist_id.to_string(), date))
            .cloned()
            .unwrap_or_default())
    }
}
