use chrono::Utc;
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use receiver_domain::{Attachment, Envelope, Notification, ReceivedNotification};

use crate::dedup::fingerprint;
use crate::dispatch::DispatchOutcome;
use crate::{AppError, AppState};

/// A decoded multipart body, before any validation of its JSON.
#[derive(Debug, Clone)]
pub struct IncomingDelivery {
    pub payload_json: String,
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntakeStatus {
    Accepted,
    Ignored,
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeReceipt {
    pub status: IntakeStatus,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

pub async fn process_delivery(
    state: &AppState,
    delivery: IncomingDelivery,
) -> Result<IntakeReceipt, AppError> {
    let envelope = Envelope::from_json(&delivery.payload_json).map_err(|err| {
        state.metrics.record_rejected();
        warn!("rejected payload_json: {}", err);
        AppError::BadRequest(err.to_string())
    })?;
    let notification = Notification::decode(&envelope.kind, &envelope.extra).map_err(|err| {
        state.metrics.record_rejected();
        warn!(notification_type = %envelope.kind, "rejected extra: {}", err);
        AppError::BadRequest(err.to_string())
    })?;

    let fingerprint = fingerprint(
        &delivery.payload_json,
        delivery.attachment.as_ref().map(|file| file.bytes.as_slice()),
    );
    let received_at = Utc::now().timestamp_millis();
    let fresh = {
        let mut dedup = state.dedup.lock().await;
        dedup.check_and_record(&fingerprint, received_at)
    };
    if !fresh {
        state.metrics.record_duplicate();
        info!(
            notification_type = %envelope.kind,
            player = %envelope.player_label(),
            "duplicate delivery acknowledged"
        );
        return Ok(IntakeReceipt {
            status: IntakeStatus::Duplicate,
            kind: envelope.kind,
            id: None,
        });
    }

    let mut received = ReceivedNotification {
        id: Uuid::new_v4().to_string(),
        received_at,
        fingerprint,
        raw_payload: delivery.payload_json,
        envelope,
        notification,
        attachment: delivery.attachment,
        attachment_path: None,
    };

    if let Err(err) = store_attachment(state, &mut received).await {
        return Err(fail(state, &received, err).await);
    }

    let outcome = match state.dispatcher.dispatch(&received).await {
        Ok(outcome) => outcome,
        Err(err) => return Err(fail(state, &received, err).await),
    };

    let status = match (outcome, received.notification.kind()) {
        (DispatchOutcome::Handled { .. }, Some(kind)) => {
            state.metrics.record_accepted(kind);
            info!(
                notification_type = %kind,
                player = %received.player(),
                id = %received.id,
                "{}",
                received.summary()
            );
            IntakeStatus::Accepted
        }
        _ => {
            state.metrics.record_ignored();
            IntakeStatus::Ignored
        }
    };

    Ok(IntakeReceipt {
        status,
        kind: received.envelope.kind,
        id: Some(received.id),
    })
}

async fn store_attachment(
    state: &AppState,
    received: &mut ReceivedNotification,
) -> anyhow::Result<()> {
    let (Some(store), Some(attachment)) =
        (state.attachments.as_ref(), received.attachment.as_ref())
    else {
        return Ok(());
    };
    let path = store.store(&received.id, received.received_at, attachment).await?;
    received.attachment_path = Some(path);
    Ok(())
}

async fn fail(state: &AppState, received: &ReceivedNotification, err: anyhow::Error) -> AppError {
    state.dedup.lock().await.forget(&received.fingerprint);
    state.metrics.record_failure();
    error!(
        notification_type = %received.envelope.kind,
        id = %received.id,
        "failed to process notification: {:#}",
        err
    );
    AppError::Internal(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::harness;
    use receiver_domain::{NotificationKind, RuntimeConfig};

    const GE_SALE: &str = r#"{
        "type": "GRAND_EXCHANGE",
        "playerName": "Zezima",
        "accountType": "NORMAL",
        "extra": {
            "slot": 1,
            "status": "SOLD",
            "item": {"id": 314, "quantity": 2, "priceEach": 3, "name": "Feather"},
            "marketPrice": 2,
            "targetPrice": 3,
            "targetQuantity": 2,
            "sellerTax": 0
        }
    }"#;

    fn with_dedup_window(seconds: u64) -> RuntimeConfig {
        RuntimeConfig {
            dedup_window_seconds: seconds,
            ..RuntimeConfig::default()
        }
    }

    fn screenshot() -> Attachment {
        Attachment {
            file_name: Some("image.png".to_string()),
            content_type: Some("image/png".to_string()),
            bytes: vec![1, 2, 3],
        }
    }

    fn delivery(payload: &str) -> IncomingDelivery {
        IncomingDelivery {
            payload_json: payload.to_string(),
            attachment: None,
        }
    }

    #[tokio::test]
    async fn accepted_delivery_reaches_every_handler() {
        let config = RuntimeConfig {
            relay_url: Some("http://relay.invalid/hook".to_string()),
            ..RuntimeConfig::default()
        };
        let h = harness(config);

        let receipt = process_delivery(&h.state, delivery(GE_SALE)).await.expect("receipt");
        assert_eq!(receipt.status, IntakeStatus::Accepted);
        assert_eq!(receipt.kind, "GRAND_EXCHANGE");
        assert!(receipt.id.is_some());

        assert_eq!(h.archive.len(), 1);
        let row = h.archive.rows.lock().expect("rows")[0].clone();
        assert_eq!(row.value, Some(6));
        assert_eq!(row.summary, "Zezima sold Feather x2 for 6 gp");
        assert_eq!(h.relay.sent.lock().expect("sent").as_slice(), ["GRAND_EXCHANGE"]);

        let tallies = h.state.tallies.read().await;
        assert_eq!(tallies.get("zezima").map(|t| t.grand_exchange_proceeds), Some(6));
        assert_eq!(h.state.metrics.accepted_count(NotificationKind::GrandExchange), 1);
    }

    #[tokio::test]
    async fn unknown_type_is_ignored_without_archiving() {
        let h = harness(RuntimeConfig::default());
        let receipt = process_delivery(
            &h.state,
            delivery(r#"{"type":"HISCORE","playerName":"Zezima","extra":{"rank":1}}"#),
        )
        .await
        .expect("receipt");
        assert_eq!(receipt.status, IntakeStatus::Ignored);
        assert_eq!(receipt.kind, "HISCORE");
        assert_eq!(h.archive.len(), 0);
        assert!(h.state.tallies.read().await.is_empty());
    }

    #[tokio::test]
    async fn repeated_delivery_is_a_duplicate() {
        let h = harness(with_dedup_window(5));
        let first = process_delivery(&h.state, delivery(GE_SALE)).await.expect("first");
        let second = process_delivery(&h.state, delivery(GE_SALE)).await.expect("second");
        assert_eq!(first.status, IntakeStatus::Accepted);
        assert_eq!(second.status, IntakeStatus::Duplicate);
        assert_eq!(second.id, None);
        assert_eq!(h.archive.len(), 1);

        let tallies = h.state.tallies.read().await;
        assert_eq!(tallies.get("zezima").map(|t| t.notifications), Some(1));
    }

    #[tokio::test]
    async fn malformed_payloads_are_bad_requests() {
        let h = harness(RuntimeConfig::default());
        for payload in [
            "not json",
            "[1,2]",
            r#"{"playerName":"Zezima"}"#,
            r#"{"type":7}"#,
            r#"{"type":"LOOT","extra":{"items":"nope"}}"#,
        ] {
            let err = process_delivery(&h.state, delivery(payload)).await.expect_err(payload);
            assert!(matches!(err, AppError::BadRequest(_)), "{payload}: {err}");
        }
        assert_eq!(h.archive.len(), 0);
    }

    #[tokio::test]
    async fn downstream_failure_allows_retry() {
        let h = harness(with_dedup_window(5));
        h.archive.set_failing(true);
        let err = process_delivery(&h.state, delivery(GE_SALE)).await.expect_err("failure");
        assert!(matches!(err, AppError::Internal(_)));

        h.archive.set_failing(false);
        let receipt = process_delivery(&h.state, delivery(GE_SALE)).await.expect("retry");
        assert_eq!(receipt.status, IntakeStatus::Accepted);
        assert_eq!(h.archive.len(), 1);
    }

    #[tokio::test]
    async fn attachment_path_is_archived() {
        let h = harness(RuntimeConfig::default());
        let receipt = process_delivery(
            &h.state,
            IncomingDelivery {
                payload_json: r#"{"type":"LOGOUT","playerName":"Zezima"}"#.to_string(),
                attachment: Some(screenshot()),
            },
        )
        .await
        .expect("receipt");

        let id = receipt.id.expect("id");
        let row = h.archive.rows.lock().expect("rows")[0].clone();
        assert_eq!(row.attachment_path, Some(format!("attachments/{id}.png")));
        assert_eq!(h.attachments.stored.lock().expect("stored")[0].1, 3);
    }

    #[tokio::test]
    async fn identical_sessions_are_all_dispatched_by_default() {
        let h = harness(RuntimeConfig::default());
        let login = r#"{"type":"LOGIN","playerName":"Zezima","extra":{"world":302}}"#;
        let logout = r#"{"type":"LOGOUT","playerName":"Zezima"}"#;

        for payload in [login, logout, login, logout] {
            let receipt = process_delivery(&h.state, delivery(payload)).await.expect("receipt");
            assert_eq!(receipt.status, IntakeStatus::Accepted, "{payload}");
        }

        assert_eq!(h.archive.len(), 4);
        let tallies = h.state.tallies.read().await;
        let tally = tallies.get("zezima").expect("tally");
        assert_eq!(tally.by_kind.get("LOGIN"), Some(&2));
        assert_eq!(tally.by_kind.get("LOGOUT"), Some(&2));
    }

    #[tokio::test]
    async fn attachment_failure_is_internal_and_allows_retry() {
        let h = harness(with_dedup_window(5));
        let upload = || IncomingDelivery {
            payload_json: r#"{"type":"LOGOUT","playerName":"Zezima"}"#.to_string(),
            attachment: Some(screenshot()),
        };

        h.attachments.set_failing(true);
        let err = process_delivery(&h.state, upload()).await.expect_err("failure");
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(h.archive.len(), 0);
        assert!(h.state.dedup.lock().await.is_empty());

        h.attachments.set_failing(false);
        let receipt = process_delivery(&h.state, upload()).await.expect("retry");
        assert_eq!(receipt.status, IntakeStatus::Accepted);
        assert_eq!(h.archive.len(), 1);
        assert_eq!(h.attachments.stored.lock().expect("stored").len(), 1);
    }
}
