use async_trait::async_trait;

use crate::entities::{ReceivedNotification, RuntimeConfig};

#[async_trait]
pub trait RelayService: Send + Sync {
    /// Queues the notification for delivery; never blocks on the target.
    fn spawn_relay(&self, config: RuntimeConfig, notification: ReceivedNotification);
    async fn check_relay_target(&self, config: &RuntimeConfig) -> anyhow::Result<()>;
}
