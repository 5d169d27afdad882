use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use receiver_application::queries::{notification_queries, tally_queries};
use receiver_application::AppState;
use receiver_domain::{ArchivedNotification, NotificationQuery, PlayerTally};

use crate::error::HttpError;
use crate::middleware::{authorize, TokenQuery};

pub async fn list_players(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(token): Query<TokenQuery>,
) -> Result<Json<Vec<PlayerTally>>, HttpError> {
    if !authorize(&state.config, &headers, &token) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(tally_queries::list_player_tallies(&state).await))
}

pub async fn get_player_tally(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(token): Query<TokenQuery>,
    Path(player): Path<String>,
) -> Result<Json<PlayerTally>, HttpError> {
    if !authorize(&state.config, &headers, &token) {
        return Err(HttpError::Unauthorized);
    }
    let tally = tally_queries::get_player_tally(&state, &player).await?;
    Ok(Json(tally))
}

pub async fn list_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(token): Query<TokenQuery>,
    Query(query): Query<NotificationQuery>,
) -> Result<Json<Vec<ArchivedNotification>>, HttpError> {
    if !authorize(&state.config, &headers, &token) {
        return Err(HttpError::Unauthorized);
    }
    let rows = notification_queries::list_notifications(&state, query).await?;
    Ok(Json(rows))
}
