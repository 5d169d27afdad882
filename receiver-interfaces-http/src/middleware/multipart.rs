use anyhow::{anyhow, Result};
use axum::extract::Multipart;

use receiver_application::commands::IncomingDelivery;
use receiver_domain::Attachment;

pub const PAYLOAD_FIELD: &str = "payload_json";
pub const FILE_FIELD: &str = "file";

/// Collects `payload_json` and the optional `file` part. Other parts are
/// skipped and, for repeated parts, the first one wins.
pub async fn read_delivery(mut multipart: Multipart) -> Result<IncomingDelivery> {
    let mut payload_json = None;
    let mut attachment = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some(PAYLOAD_FIELD) if payload_json.is_none() => {
                payload_json = Some(field.text().await?);
            }
            Some(FILE_FIELD) if attachment.is_none() => {
                let file_name = field.file_name().map(ToString::to_string);
                let content_type = field.content_type().map(ToString::to_string);
                let bytes = field.bytes().await?;
                attachment = Some(Attachment {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let payload_json = payload_json.ok_or_else(|| anyhow!("missing {} field", PAYLOAD_FIELD))?;
    Ok(IncomingDelivery {
        payload_json,
        attachment,
    })
}
