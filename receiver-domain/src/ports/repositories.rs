use async_trait::async_trait;

use crate::entities::{ArchivedNotification, Attachment, NotificationQuery};

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn ensure_schema(&self) -> anyhow::Result<()>;
    async fn insert_notification(&self, notification: &ArchivedNotification) -> anyhow::Result<()>;
    async fn fetch_recent(
        &self,
        query: &NotificationQuery,
    ) -> anyhow::Result<Vec<ArchivedNotification>>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait AttachmentStore: Send + Sync {
    /// Persists the bytes unmodified and returns where they were written.
    async fn store(
        &self,
        notification_id: &str,
        received_at: i64,
        attachment: &Attachment,
    ) -> anyhow::Result<String>;
}
