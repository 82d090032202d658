use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SelectLocationBody {
    pub location_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SelectLocationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.select_location.handle(&body.location_id).await {
        Ok(location) => Json(location).into_response(),
        Err(ApplicationError::LocationNotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
