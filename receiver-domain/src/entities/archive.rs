// Archived notification entity

use clickhouse::Row;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::entities::received::ReceivedNotification;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedNotification {
    pub id: String,
    pub received_at: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub player_name: String,
    pub account_hash: String,
    pub account_type: String,
    pub world: Option<u32>,
    pub value: Option<i64>,
    pub summary: String,
    pub payload_json: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_path: Option<String>,
}

impl ArchivedNotification {
    pub fn from_received(received: &ReceivedNotification) -> Self {
        let envelope = &received.envelope;
        Self {
            id: received.id.clone(),
            received_at: received.received_at,
            kind: envelope.kind.clone(),
            player_name: envelope.player_name.clone().unwrap_or_default(),
            account_hash: envelope.dink_account_hash.clone().unwrap_or_default(),
            account_type: envelope
                .account_type
                .as_ref()
                .map(|account| account.as_str().to_string())
                .unwrap_or_default(),
            world: envelope.world,
            value: received.notification.value(),
            summary: received.summary(),
            payload_json: received.raw_payload.clone(),
            attachment_path: received.attachment_path.clone(),
        }
    }

    pub fn matches(&self, query: &NotificationQuery) -> bool {
        if let Some(player) = query.player.as_deref() {
            if !self.player_name.eq_ignore_ascii_case(player.trim()) {
                return false;
            }
        }
        if let Some(kind) = query.kind.as_deref() {
            if self.kind != kind.trim() {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Row)]
pub struct NotificationRow {
    #[serde(with = "clickhouse::serde::time::datetime64::millis")]
    pub received_at: OffsetDateTime,
    pub notification_id: String,
    pub kind: String,
    pub player_name: String,
    pub account_hash: String,
    pub account_type: String,
    pub world: Option<u32>,
    pub value: Option<i64>,
    pub summary: String,
    pub payload_json: String,
    pub attachment_path: String,
}

impl From<NotificationRow> for ArchivedNotification {
    fn from(row: NotificationRow) -> Self {
        let millis = row.received_at.unix_timestamp_nanos() / 1_000_000;
        Self {
            id: row.notification_id,
            received_at: millis as i64,
            kind: row.kind,
            player_name: row.player_name,
            account_hash: row.account_hash,
            account_type: row.account_type,
            world: row.world,
            value: row.value,
            summary: row.summary,
            payload_json: row.payload_json,
            attachment_path: Some(row.attachment_path).filter(|path| !path.is_empty()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NotificationQuery {
    pub player: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub limit: Option<usize>,
}

impl NotificationQuery {
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(50).clamp(1, 200)
    }
}
