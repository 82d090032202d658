// HTTP implementations of the availability ports against the platform backend.
//
// Responsibilities
// - Try the known schedule endpoints in order and keep the first that answers.
// - Normalize every accepted response shape into the canonical schedule and booking types.
//
// Boundaries
// - Failures are returned as errors. Fallback policy belongs to the handler.

use std::sync::Arc;

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::RequestBuilder;
use serde::Deserialize;
use tracing::debug;

use crate::modules::availability::core::ports::{BookingsProvider, ScheduleProvider};
use crate::modules::availability::core::schedule::{BookedInterval, DayOfWeek, WeeklyScheduleEntry};
use crate::shared::infrastructure::http_client::{endpoint_url, get_request, send_json};
use crate::shared::infrastructure::session_store::{SessionStore, current_auth_token};

/// Last path segment of each schedule endpoint, in the order they are tried.
const SCHEDULE_ENDPOINTS: [&str; 2] = ["availability", "schedule"];

#[derive(Debug, Deserialize)]
pub struct ScheduleRecord {
    #[serde(alias = "dayOfWeek", alias = "day")]
    pub day_of_week: String,
    #[serde(alias = "startTime")]
    pub start_time: String,
    #[serde(alias = "endTime")]
    pub end_time: String,
    #[serde(default = "active_by_default", alias = "isActive")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ScheduleResponse {
    Availability { availability: Vec<ScheduleRecord> },
    Schedule { schedule: Vec<ScheduleRecord> },
    Data { data: Vec<ScheduleRecord> },
    Bare(Vec<ScheduleRecord>),
}

#[derive(Debug, Deserialize)]
pub struct BookingRecord {
    #[serde(alias = "startTime", alias = "time")]
    pub start_time: String,
    #[serde(
        default,
        alias = "durationMinutes",
        alias = "duration",
        alias = "serviceDuration"
    )]
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BookingsResponse {
    Bookings { bookings: Vec<BookingRecord> },
    Data { data: Vec<BookingRecord> },
    Bare(Vec<BookingRecord>),
}

fn parse_day(value: &str) -> anyhow::Result<DayOfWeek> {
    let day = match value.trim().to_ascii_lowercase().as_str() {
        "monday" | "mon" => DayOfWeek::Monday,
        "tuesday" | "tue" => DayOfWeek::Tuesday,
        "wednesday" | "wed" => DayOfWeek::Wednesday,
        "thursday" | "thu" => DayOfWeek::Thursday,
        "friday" | "fri" => DayOfWeek::Friday,
        "saturday" | "sat" => DayOfWeek::Saturday,
        "sunday" | "sun" => DayOfWeek::Sunday,
        other => return Err(anyhow!("unknown day of week: {other:?}")),
    };
    Ok(day)
}

/// Database TIME values arrive as "HH:MM:SS"; the generator works on "HH:MM".
/// Anything else is passed through untouched so the generator can reject it.
fn clock_value(value: String) -> String {
    let bytes = value.as_bytes();
    if bytes.len() == 8 && bytes[2] == b':' && bytes[5] == b':' {
        value[..5].to_string()
    } else {
        value
    }
}

pub fn normalize_schedule(response: ScheduleResponse) -> anyhow::Result<Vec<WeeklyScheduleEntry>> {
    let records = match response {
        ScheduleResponse::Availability { availability } => availability,
        ScheduleResponse::Schedule { schedule } => schedule,
        ScheduleResponse::Data { data } => data,
        ScheduleResponse::Bare(records) => records,
    };
    records
        .into_iter()
        .map(|record| {
            Ok(WeeklyScheduleEntry {
                day_of_week: parse_day(&record.day_of_week)?,
                start_time: clock_value(record.start_time),
                end_time: clock_value(record.end_time),
                is_active: record.is_active,
            })
        })
        .collect()
}

pub fn normalize_bookings(response: BookingsResponse) -> Vec<BookedInterval> {
    let records = match response {
        BookingsResponse::Bookings { bookings } => bookings,
        BookingsResponse::Data { data } => data,
        BookingsResponse::Bare(records) => records,
    };
    records
        .into_iter()
        .map(|record| BookedInterval {
            start_time: clock_value(record.start_time),
            duration_minutes: record.duration_minutes,
        })
        .collect()
}

pub struct BackendScheduleProvider {
    client: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl BackendScheduleProvider {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            session,
        }
    }

    async fn schedule_requests(&self, therapist_id: &str) -> anyhow::Result<Vec<RequestBuilder>> {
        let token = current_auth_token(&*self.session).await;
        SCHEDULE_ENDPOINTS
            .iter()
            .map(|&endpoint| -> anyhow::Result<RequestBuilder> {
                let url = endpoint_url(&self.base_url, &["therapists", therapist_id, endpoint])?;
                Ok(get_request(&self.client, url, token.as_deref()))
            })
            .collect()
    }
}

#[async_trait]
impl ScheduleProvider for BackendScheduleProvider {
    async fn weekly_schedule(&self, therapist_id: &str) -> anyhow::Result<Vec<WeeklyScheduleEntry>> {
        let mut last_error = anyhow!("no schedule endpoint configured");
        for (endpoint, request) in SCHEDULE_ENDPOINTS
            .iter()
            .zip(self.schedule_requests(therapist_id).await?)
        {
            match send_json::<ScheduleResponse>(request).await {
                Ok(response) => return normalize_schedule(response),
                Err(error) => {
                    debug!(%endpoint, %therapist_id, %error, "schedule endpoint failed, trying next");
                    last_error = error;
                }
            }
        }
        Err(last_error)
    }
}

pub struct BackendBookingsProvider {
    client: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl BackendBookingsProvider {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            session,
        }
    }

    async fn bookings_request(
        &self,
        therapist_id: &str,
        date: NaiveDate,
    ) -> anyhow::Result<RequestBuilder> {
        let mut url = endpoint_url(&self.base_url, &["therapists", therapist_id, "bookings"])?;
        url.query_pairs_mut()
            .append_pair("date", &date.format("%Y-%m-%d").to_string());
        let token = current_auth_token(&*self.session).await;
        Ok(get_request(&self.client, url, token.as_deref()))
    }
}

#[async_trait]
impl BookingsProvider for BackendBookingsProvider {
    async fn booked_intervals(
        &self,
        therapist_id: &str,
        date: NaiveDate,
    ) -> anyhow::Result<Vec<BookedInterval>> {
        let request = self.bookings_request(therapist_id, date).await?;
        let response = send_json::<BookingsResponse>(request)
            .await
            .context("Failed to load existing bookings")?;
        Ok(normalize_bookings(response))
    }
}
