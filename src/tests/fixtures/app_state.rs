// Fully in-memory application state for inbound adapter and e2e tests.

use std::sync::Arc;

use crate::modules::availability::adapters::outbound::in_memory::{
    InMemoryBookingsProvider, InMemoryScheduleProvider,
};
use crate::modules::availability::core::schedule::{DayOfWeek, WeeklyScheduleEntry};
use crate::modules::service_areas::adapters::outbound::in_memory::{
    InMemoryGeocoder, InMemoryLocationsDirectory,
};
use crate::shared::infrastructure::session_store::in_memory::InMemorySessionStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::locations::{
    derby_city_centre, directory, miles_north_of, miles_south_of,
};

pub const THERAPIST_ID: &str = "therapist-fixed-0001";
pub const BROKEN_SCHEDULE_THERAPIST_ID: &str = "therapist-broken-0002";

const EVERY_DAY: [DayOfWeek; 7] = [
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
    DayOfWeek::Sunday,
];

fn every_day(start_time: &str, end_time: &str) -> Vec<WeeklyScheduleEntry> {
    EVERY_DAY
        .into_iter()
        .map(|day| WeeklyScheduleEntry::new(day, start_time, end_time))
        .collect()
}

fn seeded_geocoder() -> InMemoryGeocoder {
    let centre = derby_city_centre().coordinates.unwrap();
    InMemoryGeocoder::new()
        .with("DE1 3AH", miles_north_of(centre, 3.2))
        .with("DE73 5AA", miles_south_of(centre, 12.0))
}

fn state_with(geocoder: InMemoryGeocoder) -> AppState {
    let schedules = InMemoryScheduleProvider::new()
        .with(THERAPIST_ID, every_day("09:00", "17:00"))
        .with(BROKEN_SCHEDULE_THERAPIST_ID, every_day("09:00", "5pm"));

    AppState::new(
        Arc::new(schedules),
        Arc::new(InMemoryBookingsProvider::new()),
        Arc::new(geocoder),
        Arc::new(InMemoryLocationsDirectory::new(directory())),
        Arc::new(InMemorySessionStore::new()),
    )
}

pub fn make_test_state() -> AppState {
    state_with(seeded_geocoder())
}

pub fn make_offline_geocoder_state() -> AppState {
    let mut geocoder = seeded_geocoder();
    geocoder.toggle_offline();
    state_with(geocoder)
}
