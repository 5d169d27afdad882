use std::time::Duration;

use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct Readiness {
    pub ready: bool,
    pub archive: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relay: Option<String>,
}

/// The archive must answer within the request timeout. The relay target is
/// reported but never blocks readiness.
pub async fn check_readiness(state: &AppState) -> Readiness {
    let timeout = Duration::from_secs(state.config.request_timeout_seconds.max(1));
    let archive = match tokio::time::timeout(timeout, state.archive.ping()).await {
        Ok(Ok(())) => None,
        Ok(Err(err)) => Some(err.to_string()),
        Err(_) => Some("archive ping timed out".to_string()),
    };
    if let Some(err) = archive.as_deref() {
        warn!("archive not ready: {}", err);
    }

    let relay = if state.config.relay_url.is_some() {
        Some(match state.relay.check_relay_target(&state.config).await {
            Ok(()) => "ok".to_string(),
            Err(err) => err.to_string(),
        })
    } else {
        None
    };

    Readiness {
        ready: archive.is_none(),
        archive: archive.unwrap_or_else(|| "ok".to_string()),
        relay,
    }
}

pub fn render_metrics(state: &AppState) -> String {
    state.metrics.render_prometheus()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::harness;
    use receiver_domain::RuntimeConfig;

    #[tokio::test]
    async fn readiness_follows_archive_ping() {
        let h = harness(RuntimeConfig::default());
        let ready = check_readiness(&h.state).await;
        assert!(ready.ready);
        assert_eq!(ready.archive, "ok");
        assert!(ready.relay.is_none());

        h.archive.set_failing(true);
        let ready = check_readiness(&h.state).await;
        assert!(!ready.ready);
        assert_eq!(ready.archive, "archive offline");
    }
}
