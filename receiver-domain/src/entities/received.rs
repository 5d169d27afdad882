// Received notification entity
// One accepted delivery, as seen by the dispatch handlers

use crate::entities::envelope::Envelope;
use crate::entities::notification::Notification;

#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Lower-case file extension, guessed from the name and then the content type.
    pub fn extension(&self) -> &str {
        let from_name = self
            .file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext)
            .filter(|ext| {
                !ext.is_empty()
                    && ext.len() <= 5
                    && ext.chars().all(|ch| ch.is_ascii_alphanumeric())
            });
        if let Some(ext) = from_name {
            return match ext {
                "PNG" | "png" => "png",
                "JPG" | "jpg" | "JPEG" | "jpeg" => "jpg",
                "GIF" | "gif" => "gif",
                "WEBP" | "webp" => "webp",
                _ => "bin",
            };
        }
        match self.content_type.as_deref() {
            Some("image/png") => "png",
            Some("image/jpeg") => "jpg",
            Some("image/gif") => "gif",
            Some("image/webp") => "webp",
            _ => "bin",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReceivedNotification {
    pub id: String,
    pub received_at: i64,
    pub fingerprint: String,
    pub raw_payload: String,
    pub envelope: Envelope,
    pub notification: Notification,
    pub attachment: Option<Attachment>,
    pub attachment_path: Option<String>,
}

impl ReceivedNotification {
    pub fn player(&self) -> &str {
        self.envelope.player_label()
    }

    pub fn summary(&self) -> String {
        self.notification.summary(self.player())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(name: Option<&str>, content_type: Option<&str>) -> Attachment {
        Attachment {
            file_name: name.map(ToString::to_string),
            content_type: content_type.map(ToString::to_string),
            bytes: vec![0x89, b'P', b'N', b'G'],
        }
    }

    #[test]
    fn extension_prefers_file_name() {
        assert_eq!(attachment(Some("image.png"), Some("image/jpeg")).extension(), "png");
        assert_eq!(attachment(Some("shot.JPEG"), None).extension(), "jpg");
    }

    #[test]
    fn extension_falls_back_to_content_type() {
        assert_eq!(attachment(None, Some("image/gif")).extension(), "gif");
        assert_eq!(attachment(Some("noext"), Some("image/png")).extension(), "png");
        assert_eq!(attachment(Some("../../etc/passwd"), None).extension(), "bin");
    }
}
