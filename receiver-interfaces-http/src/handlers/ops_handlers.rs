use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use receiver_application::queries::ops_queries;
use receiver_application::AppState;

use crate::error::HttpError;
use crate::middleware::{authorize, TokenQuery};

pub async fn health_live() -> StatusCode {
    StatusCode::OK
}

pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let readiness = ops_queries::check_readiness(&state).await;
    let status = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(readiness))
}

pub async fn metrics_prometheus(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(token): Query<TokenQuery>,
) -> Result<impl IntoResponse, HttpError> {
    if !authorize(&state.config, &headers, &token) {
        return Err(HttpError::Unauthorized);
    }
    let payload = ops_queries::render_metrics(&state);
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    Ok((headers, payload))
}
