use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tracing::{error, info};

use crate::shell::state::AppState;

/// Logout: forgets the selected location and the auth token.
pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.session.clear().await {
        Ok(()) => {
            info!("session ended");
            StatusCode::NO_CONTENT
        }
        Err(e) => {
            error!(error = %e, "failed to clear session");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
