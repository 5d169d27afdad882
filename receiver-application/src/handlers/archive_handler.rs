use std::sync::Arc;

use async_trait::async_trait;

use receiver_domain::ports::NotificationRepository;
use receiver_domain::{ArchivedNotification, ReceivedNotification};

use crate::dispatch::NotificationHandler;

pub struct ArchiveHandler {
    repo: Arc<dyn NotificationRepository>,
}

impl ArchiveHandler {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl NotificationHandler for ArchiveHandler {
    fn name(&self) -> &'static str {
        "archive"
    }

    async fn handle(&self, notification: &ReceivedNotification) -> anyhow::Result<()> {
        let row = ArchivedNotification::from_received(notification);
        self.repo.insert_notification(&row).await
    }
}
