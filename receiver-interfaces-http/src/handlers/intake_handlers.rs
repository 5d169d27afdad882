use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use tracing::warn;

use receiver_application::commands::{intake_commands, IntakeReceipt};
use receiver_application::AppState;

use crate::error::HttpError;
use crate::middleware::{authorize, read_delivery, TokenQuery};

pub async fn receive_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(token): Query<TokenQuery>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<IntakeReceipt>, HttpError> {
    state.metrics.record_request();
    if !authorize(&state.config, &headers, &token) {
        state.metrics.record_rejected();
        return Err(HttpError::Unauthorized);
    }

    let multipart = multipart.map_err(|err| {
        state.metrics.record_rejected();
        warn!("rejected non-multipart body: {}", err);
        HttpError::BadRequest(err.body_text())
    })?;
    let delivery = read_delivery(multipart).await.map_err(|err| {
        state.metrics.record_rejected();
        warn!("failed to read multipart body: {}", err);
        HttpError::BadRequest(err.to_string())
    })?;

    let receipt = intake_commands::process_delivery(&state, delivery).await?;
    Ok(Json(receipt))
}
