// Query data type for generating a day's bookable slots.
//
// Responsibilities
// - Carry the therapist, day and service length the caller asks about.
// - Carry the caller's notion of "now" so generation stays deterministic.

use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateTimeSlots {
    pub therapist_id: String,
    pub date: NaiveDate,
    pub service_duration_minutes: u32,
    pub now: NaiveDateTime,
}
