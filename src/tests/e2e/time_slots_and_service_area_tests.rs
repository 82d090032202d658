use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::app;
use crate::tests::fixtures::app_state::{THERAPIST_ID, make_test_state};
use crate::tests::fixtures::locations::DERBY_CITY_CENTRE_ID;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn validate(app: &Router, body: Value) -> (StatusCode, Value) {
    send(app, json_request("POST", "/service-area/validate", body)).await
}

#[tokio::test]
async fn selects_a_location_then_validates_and_books_against_it() {
    let app = app(make_test_state());

    let (status, _) = validate(&app, json!({"postcode": "DE1 3AH"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, location) = send(
        &app,
        json_request(
            "PUT",
            "/session/selected-location",
            json!({"location_id": DERBY_CITY_CENTRE_ID}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(location["name"], "Derby City Centre");

    let (status, precheck) = send(
        &app,
        Request::get("/service-area/precheck?postcode=NG1%205FS")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(precheck["likely"], false);

    let (status, result) = validate(&app, json!({"postcode": "DE73 5AA"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["is_valid"], false);
    assert_eq!(result["distance_miles"], 12.0);
    assert_eq!(result["suggested_locations"][0]["id"], "loc-derby-south");

    let (status, slots) = send(
        &app,
        json_request(
            "POST",
            "/time-slots",
            json!({
                "therapist_id": THERAPIST_ID,
                "date": "2099-01-05",
                "service_duration_minutes": 90
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let slots = slots.as_array().unwrap();
    assert_eq!(slots.len(), 14);
    assert_eq!(slots.last().unwrap()["time"], "15:30");
    assert_eq!(slots.last().unwrap()["formatted_time"], "3:30 PM");

    let (status, _) = send(
        &app,
        Request::delete("/session").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = validate(&app, json!({"postcode": "DE1 3AH"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn serves_the_same_operations_over_graphql() {
    let app = app(make_test_state());

    let mutation = format!(
        r#"mutation {{ selectLocation(locationId: "{DERBY_CITY_CENTRE_ID}") {{ id name }} }}"#
    );
    let (status, body) =
        send(&app, json_request("POST", "/gql", json!({ "query": mutation }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["selectLocation"]["name"], "Derby City Centre");

    let query = format!(
        r#"{{
            validateServiceArea(postcode: "DE1 3AH") {{ isValid distanceMiles }}
            postcodeAreaPrecheck(postcode: "DE22 1AB")
            timeSlots(therapistId: "{THERAPIST_ID}", date: "2099-01-05", serviceDurationMinutes: 60) {{ time available }}
        }}"#
    );
    let (status, body) =
        send(&app, json_request("POST", "/gql", json!({ "query": query }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["errors"].is_null(), "{body}");
    assert_eq!(body["data"]["validateServiceArea"]["isValid"], true);
    assert_eq!(body["data"]["validateServiceArea"]["distanceMiles"], 3.2);
    assert_eq!(body["data"]["postcodeAreaPrecheck"], true);
    assert_eq!(body["data"]["timeSlots"].as_array().unwrap().len(), 15);
}
