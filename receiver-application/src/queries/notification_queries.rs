use tracing::error;

use receiver_domain::{ArchivedNotification, NotificationQuery};

use crate::{AppError, AppState};

pub async fn list_notifications(
    state: &AppState,
    query: NotificationQuery,
) -> Result<Vec<ArchivedNotification>, AppError> {
    let rows = state.archive.fetch_recent(&query).await.map_err(|err| {
        error!("failed to fetch notifications: {}", err);
        AppError::Internal(err)
    })?;
    Ok(rows)
}
