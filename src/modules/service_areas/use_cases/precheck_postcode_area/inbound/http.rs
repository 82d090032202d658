use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::shared::infrastructure::session_store::SessionKey;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PrecheckParams {
    pub postcode: String,
    pub location_id: Option<String>,
}

#[derive(Serialize)]
pub struct PrecheckResponse {
    pub likely: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<PrecheckParams>,
) -> impl IntoResponse {
    let location_id = match params.location_id {
        Some(id) => Some(id),
        None => state
            .session
            .get(SessionKey::SelectedLocationId)
            .await
            .unwrap_or_else(|error| {
                warn!(%error, "session unavailable, pre-checking against all areas");
                None
            }),
    };

    let likely = state
        .precheck
        .handle(&params.postcode, location_id.as_deref())
        .await;
    Json(PrecheckResponse { likely })
}
