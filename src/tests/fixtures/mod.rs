pub mod app_state;
pub mod locations;
pub mod schedules;
