use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::service_areas::use_cases::resolve_service_area::query::ResolveServiceArea;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ValidateServiceAreaBody {
    pub postcode: String,
    pub location_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ValidateServiceAreaBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let location_id = match state.select_location.current(body.location_id).await {
        Ok(id) => id,
        Err(ApplicationError::NoLocationSelected) => return StatusCode::BAD_REQUEST.into_response(),
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    let query = ResolveServiceArea {
        postcode: body.postcode,
        location_id,
    };

    match state.service_area.handle(query).await {
        Ok(result) => Json(result).into_response(),
        Err(ApplicationError::LocationNotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(ApplicationError::Unexpected(_)) => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod resolve_service_area_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shared::infrastructure::session_store::SessionKey;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app_state::{make_offline_geocoder_state, make_test_state};
    use crate::tests::fixtures::locations::DERBY_CITY_CENTRE_ID;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/service-area/validate", post(handle))
            .with_state(state)
    }

    fn request(body: &str) -> Request<Body> {
        Request::post("/service-area/validate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_with_a_valid_result() {
        let body = format!(r#"{{"postcode":"DE1 3AH","location_id":"{DERBY_CITY_CENTRE_ID}"}}"#);

        let response = app(make_test_state()).oneshot(request(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["is_valid"], true);
        assert_eq!(json["distance_miles"], 3.2);
    }

    #[tokio::test]
    async fn it_should_return_200_with_suggestions_when_out_of_area() {
        let body = format!(r#"{{"postcode":"DE73 5AA","location_id":"{DERBY_CITY_CENTRE_ID}"}}"#);

        let response = app(make_test_state()).oneshot(request(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["rejection"], "out_of_service_area");
        assert_eq!(json["suggested_locations"][0]["name"], "Derby South");
    }

    #[tokio::test]
    async fn it_should_use_the_selected_location_from_the_session() {
        let state = make_test_state();
        state
            .session
            .set(SessionKey::SelectedLocationId, DERBY_CITY_CENTRE_ID.into())
            .await
            .unwrap();

        let response = app(state)
            .oneshot(request(r#"{"postcode":"DE1 3AH"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["is_valid"], true);
    }

    #[tokio::test]
    async fn it_should_return_400_when_no_location_is_selected() {
        let response = app(make_test_state())
            .oneshot(request(r#"{"postcode":"DE1 3AH"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_location() {
        let response = app(make_test_state())
            .oneshot(request(r#"{"postcode":"DE1 3AH","location_id":"loc-missing"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_200_with_a_retry_message_when_the_geocoder_is_offline() {
        let body = format!(r#"{{"postcode":"DE1 3AH","location_id":"{DERBY_CITY_CENTRE_ID}"}}"#);

        let response = app(make_offline_geocoder_state())
            .oneshot(request(&body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["is_valid"], false);
        assert_eq!(
            json["error_message"],
            "unable to validate location, please try again"
        );
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let response = app(make_test_state())
            .oneshot(request("not-json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
