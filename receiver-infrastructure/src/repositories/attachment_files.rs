use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use receiver_domain::ports::AttachmentStore;
use receiver_domain::Attachment;

use crate::utils::millis_to_utc;

/// Writes attachments to `<root>/<YYYY-MM-DD>/<notification id>.<ext>`.
pub struct AttachmentFileStore {
    root: PathBuf,
}

impl AttachmentFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(
        &self,
        notification_id: &str,
        received_at: i64,
        attachment: &Attachment,
    ) -> PathBuf {
        let day = millis_to_utc(received_at).date();
        let file_name: String = notification_id
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '-')
            .collect();
        self.root
            .join(format!(
                "{:04}-{:02}-{:02}",
                day.year(),
                u8::from(day.month()),
                day.day()
            ))
            .join(format!("{}.{}", file_name, attachment.extension()))
    }
}

#[async_trait]
impl AttachmentStore for AttachmentFileStore {
    async fn store(
        &self,
        notification_id: &str,
        received_at: i64,
        attachment: &Attachment,
    ) -> Result<String> {
        let path = self.path_for(notification_id, received_at, attachment);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(&path, &attachment.bytes)
            .await
            .with_context(|| format!("write {}", path.display()))?;
        debug!(path = %path.display(), bytes = attachment.bytes.len(), "stored attachment");
        Ok(path.to_string_lossy().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bytes_are_written_unmodified_under_a_dated_folder() {
        let root =
            std::env::temp_dir().join(format!("dink-receiver-test-{}", uuid::Uuid::new_v4()));
        let store = AttachmentFileStore::new(&root);
        let attachment = Attachment {
            file_name: Some("image.png".to_string()),
            content_type: Some("image/png".to_string()),
            bytes: vec![0x89, b'P', b'N', b'G', 0, 255],
        };

        // 2023-11-14T22:13:20Z
        let stored = store
            .store("3f2a-77", 1_700_000_000_000, &attachment)
            .await
            .expect("store");
        let expected = root.join("2023-11-14").join("3f2a-77.png");
        assert_eq!(PathBuf::from(&stored), expected);
        assert_eq!(fs::read(&expected).await.expect("read"), attachment.bytes);

        let _ = fs::remove_dir_all(&root).await;
    }
}
