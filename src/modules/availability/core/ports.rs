// Ports for the data slot generation needs from the scheduling backend.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in adapters/outbound.
// - Failures are plain anyhow errors; the handler decides which fallback applies.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::availability::core::schedule::{BookedInterval, WeeklyScheduleEntry};

#[async_trait]
pub trait ScheduleProvider: Send + Sync {
    async fn weekly_schedule(&self, therapist_id: &str) -> anyhow::Result<Vec<WeeklyScheduleEntry>>;
}

#[async_trait]
pub trait BookingsProvider: Send + Sync {
    async fn booked_intervals(
        &self,
        therapist_id: &str,
        date: NaiveDate,
    ) -> anyhow::Result<Vec<BookedInterval>>;
}
