// Shared schedule fixtures. Every date is pinned so no test depends on the wall clock.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fs;

use crate::modules::availability::core::schedule::{BookedInterval, DayOfWeek, WeeklyScheduleEntry};
use crate::modules::availability::use_cases::generate_time_slots::query::GenerateTimeSlots;

pub fn a_monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn the_sunday_before() -> NaiveDate {
    a_monday().pred_opt().unwrap()
}

pub fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap()
}

pub fn booking(start_time: &str, duration_minutes: Option<u32>) -> BookedInterval {
    BookedInterval {
        start_time: start_time.to_string(),
        duration_minutes,
    }
}

pub fn monday_nine_to_five() -> Vec<WeeklyScheduleEntry> {
    vec![WeeklyScheduleEntry::new(DayOfWeek::Monday, "09:00", "17:00")]
}

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateTimeSlotsDto {
    pub therapist_id: String,
    pub date: NaiveDate,
    pub service_duration_minutes: u32,
    pub now: NaiveDateTime,
}

pub struct GenerateTimeSlotsBuilder {
    inner: GenerateTimeSlots,
}

impl Default for GenerateTimeSlotsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl GenerateTimeSlotsBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/json/generate_time_slots.json").unwrap();
        let dto: GenerateTimeSlotsDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: GenerateTimeSlots {
                therapist_id: dto.therapist_id,
                date: dto.date,
                service_duration_minutes: dto.service_duration_minutes,
                now: dto.now,
            },
        }
    }

    pub fn therapist_id(mut self, v: impl Into<String>) -> Self {
        self.inner.therapist_id = v.into();
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn service_duration_minutes(mut self, v: u32) -> Self {
        self.inner.service_duration_minutes = v;
        self
    }

    pub fn now(mut self, v: NaiveDateTime) -> Self {
        self.inner.now = v;
        self
    }

    pub fn build(self) -> GenerateTimeSlots {
        self.inner
    }
}
