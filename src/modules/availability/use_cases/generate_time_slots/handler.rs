// Slot generation handler orchestrates the read flow.
//
// Responsibilities
// - Load the therapist's weekly schedule and the day's bookings concurrently.
// - Substitute the fallback schedule or an empty booking list when a provider fails.
// - Call the pure generator with the caller's "now".

use std::sync::Arc;

use tracing::warn;

use crate::modules::availability::core::ports::{BookingsProvider, ScheduleProvider};
use crate::modules::availability::core::schedule::fallback_weekly_schedule;
use crate::modules::availability::core::time_slot::TimeSlot;
use crate::modules::availability::use_cases::generate_time_slots::generate::generate_slots;
use crate::modules::availability::use_cases::generate_time_slots::query::GenerateTimeSlots;
use crate::shared::application::errors::ApplicationError;

pub struct GenerateTimeSlotsHandler<TSchedule, TBookings>
where
    TSchedule: ScheduleProvider + ?Sized + 'static,
    TBookings: BookingsProvider + ?Sized + 'static,
{
    schedules: Arc<TSchedule>,
    bookings: Arc<TBookings>,
}

impl<TSchedule, TBookings> GenerateTimeSlotsHandler<TSchedule, TBookings>
where
    TSchedule: ScheduleProvider + ?Sized + 'static,
    TBookings: BookingsProvider + ?Sized + 'static,
{
    pub fn new(schedules: Arc<TSchedule>, bookings: Arc<TBookings>) -> Self {
        Self {
            schedules,
            bookings,
        }
    }

    pub async fn handle(&self, query: GenerateTimeSlots) -> Result<Vec<TimeSlot>, ApplicationError> {
        let (schedule, bookings) = tokio::join!(
            self.schedules.weekly_schedule(&query.therapist_id),
            self.bookings.booked_intervals(&query.therapist_id, query.date),
        );

        let schedule = schedule.unwrap_or_else(|error| {
            warn!(therapist_id = %query.therapist_id, %error, "schedule unavailable, using fallback schedule");
            fallback_weekly_schedule()
        });
        let bookings = bookings.unwrap_or_else(|error| {
            warn!(therapist_id = %query.therapist_id, date = %query.date, %error, "bookings unavailable, assuming none");
            Vec::new()
        });

        let slots = generate_slots(
            query.date,
            &schedule,
            &bookings,
            query.service_duration_minutes,
            query.now,
        )?;
        Ok(slots)
    }
}
