// Pure slot generation for one calendar day.
//
// Responsibilities
// - Keep the active schedule entries for the weekday of the requested date.
// - Walk each entry in fixed steps and emit every slot whose service fits in the window.
// - Mark slots that already started (today only) or that overlap a booking as unavailable.
// - Never perform input or output.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::modules::availability::core::schedule::{
    BookedInterval, DayOfWeek, SLOT_GRANULARITY_MINUTES, WeeklyScheduleEntry, minutes_of_day,
    parse_clock_minutes,
};
use crate::modules::availability::core::time_slot::TimeSlot;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SlotGenerationError {
    #[error("invalid schedule time format: {value:?}, expected HH:MM")]
    InvalidScheduleFormat { value: String },

    #[error("service duration must be greater than zero")]
    InvalidServiceDuration,
}

struct Window {
    entry_index: usize,
    start: u32,
    end: u32,
}

fn clock(value: &str) -> Result<u32, SlotGenerationError> {
    parse_clock_minutes(value).ok_or_else(|| SlotGenerationError::InvalidScheduleFormat {
        value: value.to_string(),
    })
}

pub fn generate_slots(
    date: NaiveDate,
    schedule: &[WeeklyScheduleEntry],
    existing_bookings: &[BookedInterval],
    service_duration_minutes: u32,
    now: NaiveDateTime,
) -> Result<Vec<TimeSlot>, SlotGenerationError> {
    if service_duration_minutes == 0 {
        return Err(SlotGenerationError::InvalidServiceDuration);
    }

    let day = DayOfWeek::from(date.weekday());
    let windows = schedule
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_active && entry.day_of_week == day)
        .map(|(entry_index, entry)| {
            Ok(Window {
                entry_index,
                start: clock(&entry.start_time)?,
                end: clock(&entry.end_time)?,
            })
        })
        .collect::<Result<Vec<_>, SlotGenerationError>>()?;

    if windows.is_empty() {
        return Ok(Vec::new());
    }

    let booked = existing_bookings
        .iter()
        .map(|booking| {
            let start = clock(&booking.start_time)?;
            Ok((start, start.saturating_add(booking.effective_duration_minutes())))
        })
        .collect::<Result<Vec<_>, SlotGenerationError>>()?;

    let past_cutoff = (date == now.date()).then(|| minutes_of_day(now.time()));

    let mut slots = Vec::new();
    for window in &windows {
        let mut start = window.start;
        while start.saturating_add(service_duration_minutes) <= window.end {
            let end = start + service_duration_minutes;
            let past = past_cutoff.is_some_and(|cutoff| start <= cutoff);
            let conflicting = booked
                .iter()
                .any(|&(booking_start, booking_end)| start < booking_end && end > booking_start);
            slots.push(TimeSlot::new(window.entry_index, start, !past && !conflicting));
            start += SLOT_GRANULARITY_MINUTES;
        }
    }
    Ok(slots)
}
