use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use receiver_domain::ports::RelayService;
use receiver_domain::{ReceivedNotification, RuntimeConfig};

use crate::dispatch::NotificationHandler;

pub struct RelayHandler {
    config: RuntimeConfig,
    relay: Arc<dyn RelayService>,
}

impl RelayHandler {
    pub fn new(config: RuntimeConfig, relay: Arc<dyn RelayService>) -> Self {
        Self { config, relay }
    }
}

#[async_trait]
impl NotificationHandler for RelayHandler {
    fn name(&self) -> &'static str {
        "relay"
    }

    async fn handle(&self, notification: &ReceivedNotification) -> anyhow::Result<()> {
        let Some(kind) = notification.notification.kind() else {
            return Ok(());
        };
        if !self.config.relays(kind) {
            debug!(notification_type = %kind, "relay skipped");
            return Ok(());
        }
        self.relay.spawn_relay(self.config.clone(), notification.clone());
        Ok(())
    }
}
