use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use receiver_application::AppState;

use crate::handlers::{intake_handlers, ops_handlers, query_handlers};

pub fn build_router(state: AppState) -> Router {
    let body_limit = usize::try_from(state.config.max_body_bytes).unwrap_or(usize::MAX);
    Router::new()
        .route("/", post(intake_handlers::receive_notification))
        .route("/v1/dink", post(intake_handlers::receive_notification))
        .route("/v1/players", get(query_handlers::list_players))
        .route(
            "/v1/players/:name/tally",
            get(query_handlers::get_player_tally),
        )
        .route(
            "/v1/notifications",
            get(query_handlers::list_notifications),
        )
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
