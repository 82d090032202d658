// Weekly availability and booked intervals as supplied by the scheduling backend.
//
// Purpose
// - Carry the read-only inputs of slot generation in their transport shape.
//
// Notes
// - Times stay as "HH:MM" strings here. They are parsed by the generator so a
//   malformed value fails the whole generation call instead of a single slot.

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Step between two candidate slot start times.
pub const SLOT_GRANULARITY_MINUTES: u32 = 30;

/// Assumed length of an existing booking whose own service duration is unknown.
/// Kept for parity with the booking app; not a confirmed business rule.
pub const DEFAULT_BOOKING_DURATION_MINUTES: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyScheduleEntry {
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub is_active: bool,
}

impl WeeklyScheduleEntry {
    pub fn new(
        day_of_week: DayOfWeek,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            day_of_week,
            start_time: start_time.into(),
            end_time: end_time.into(),
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedInterval {
    pub start_time: String,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

impl BookedInterval {
    pub fn effective_duration_minutes(&self) -> u32 {
        self.duration_minutes
            .unwrap_or(DEFAULT_BOOKING_DURATION_MINUTES)
    }
}

/// Schedule used when the schedule provider cannot be reached: Monday to Saturday, 09:00 to 17:00.
pub fn fallback_weekly_schedule() -> Vec<WeeklyScheduleEntry> {
    [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ]
    .into_iter()
    .map(|day| WeeklyScheduleEntry::new(day, "09:00", "17:00"))
    .collect()
}

/// Parses a strict "HH:MM" value into minutes since midnight.
pub fn parse_clock_minutes(value: &str) -> Option<u32> {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    let time = NaiveTime::parse_from_str(value, "%H:%M").ok()?;
    Some(time.hour() * 60 + time.minute())
}

pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
