// In-memory port doubles shared by the application tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use receiver_domain::ports::{AttachmentStore, NotificationRepository, RelayService};
use receiver_domain::{
    ArchivedNotification, Attachment, NotificationQuery, ReceivedNotification, RuntimeConfig,
};

use crate::AppState;

#[derive(Default)]
pub struct FakeArchive {
    pub rows: Mutex<Vec<ArchivedNotification>>,
    pub fail: AtomicBool,
}

impl FakeArchive {
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().expect("rows").len()
    }
}

#[async_trait]
impl NotificationRepository for FakeArchive {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn insert_notification(&self, notification: &ArchivedNotification) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("archive offline");
        }
        self.rows.lock().expect("rows").push(notification.clone());
        Ok(())
    }

    async fn fetch_recent(
        &self,
        query: &NotificationQuery,
    ) -> anyhow::Result<Vec<ArchivedNotification>> {
        let rows = self.rows.lock().expect("rows");
        Ok(rows
            .iter()
            .rev()
            .filter(|row| row.matches(query))
            .take(query.effective_limit())
            .cloned()
            .collect())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("archive offline");
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeRelay {
    pub sent: Mutex<Vec<String>>,
}

#[async_trait]
impl RelayService for FakeRelay {
    fn spawn_relay(&self, _config: RuntimeConfig, notification: ReceivedNotification) {
        self.sent.lock().expect("sent").push(notification.envelope.kind.clone());
    }

    async fn check_relay_target(&self, _config: &RuntimeConfig) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeAttachments {
    pub stored: Mutex<Vec<(String, usize)>>,
    pub fail: AtomicBool,
}

impl FakeAttachments {
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl AttachmentStore for FakeAttachments {
    async fn store(
        &self,
        notification_id: &str,
        _received_at: i64,
        attachment: &Attachment,
    ) -> anyhow::Result<String> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("disk full");
        }
        let path = format!("attachments/{}.{}", notification_id, attachment.extension());
        self.stored
            .lock()
            .expect("stored")
            .push((path.clone(), attachment.bytes.len()));
        Ok(path)
    }
}

pub struct Harness {
    pub state: AppState,
    pub archive: Arc<FakeArchive>,
    pub relay: Arc<FakeRelay>,
    pub attachments: Arc<FakeAttachments>,
}

pub fn harness(config: RuntimeConfig) -> Harness {
    let archive = Arc::new(FakeArchive::default());
    let relay = Arc::new(FakeRelay::default());
    let attachments = Arc::new(FakeAttachments::default());
    let state = AppState::new(
        config,
        archive.clone(),
        Some(attachments.clone() as Arc<dyn AttachmentStore>),
        relay.clone(),
    );
    Harness {
        state,
        archive,
        relay,
        attachments,
    }
}
