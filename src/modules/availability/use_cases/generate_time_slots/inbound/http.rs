use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::modules::availability::use_cases::generate_time_slots::generate::SlotGenerationError;
use crate::modules::availability::use_cases::generate_time_slots::query::GenerateTimeSlots;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct GenerateTimeSlotsBody {
    pub therapist_id: String,
    pub date: NaiveDate,
    pub service_duration_minutes: u32,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<GenerateTimeSlotsBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let query = GenerateTimeSlots {
        therapist_id: body.therapist_id,
        date: body.date,
        service_duration_minutes: body.service_duration_minutes,
        now: Local::now().naive_local(),
    };

    match state.time_slots.handle(query).await {
        Ok(slots) => Json(slots).into_response(),
        Err(ApplicationError::InvalidSchedule(SlotGenerationError::InvalidServiceDuration)) => {
            StatusCode::UNPROCESSABLE_ENTITY.into_response()
        }
        Err(ApplicationError::InvalidSchedule(SlotGenerationError::InvalidScheduleFormat {
            ..
        })) => StatusCode::BAD_GATEWAY.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
