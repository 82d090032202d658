use serde::{Deserialize, Serialize};

/// One candidate start time for a service on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub time: String,
    pub formatted_time: String,
    pub available: bool,
}

impl TimeSlot {
    /// Builds a slot from its schedule entry index and its start in minutes since midnight.
    pub fn new(entry_index: usize, start_minutes: u32, available: bool) -> Self {
        let time = format!("{:02}:{:02}", start_minutes / 60, start_minutes % 60);
        Self {
            id: format!("{entry_index}-{time}"),
            formatted_time: twelve_hour(start_minutes),
            time,
            available,
        }
    }
}

fn twelve_hour(minutes: u32) -> String {
    let hour = minutes / 60;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{:02} {suffix}", minutes % 60)
}
