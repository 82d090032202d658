use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::Html,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::availability::use_cases::generate_time_slots::inbound::http as time_slots_http;
use crate::modules::service_areas::use_cases::precheck_postcode_area::inbound::http as precheck_http;
use crate::modules::service_areas::use_cases::resolve_service_area::inbound::http as service_area_http;
use crate::modules::session::use_cases::end_session::inbound::http as end_session_http;
use crate::modules::session::use_cases::select_location::inbound::http as select_location_http;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/time-slots", post(time_slots_http::handle))
        .route("/service-area/validate", post(service_area_http::handle))
        .route("/service-area/precheck", get(precheck_http::handle))
        .route(
            "/session/selected-location",
            put(select_location_http::handle),
        )
        .route("/session", delete(end_session_http::handle))
        .with_state(state)
}

/// REST routes plus the GraphQL endpoint, with tracing and CORS.
pub fn app(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    router(state)
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
