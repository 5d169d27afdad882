use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use receiver_domain::{PlayerTally, ReceivedNotification};

use crate::dispatch::NotificationHandler;

/// Player tallies keyed by lower-cased player label.
pub type TallyBook = Arc<RwLock<HashMap<String, PlayerTally>>>;

pub fn tally_key(player: &str) -> String {
    player.trim().to_lowercase()
}

pub struct TallyHandler {
    tallies: TallyBook,
}

impl TallyHandler {
    pub fn new(tallies: TallyBook) -> Self {
        Self { tallies }
    }
}

#[async_trait]
impl NotificationHandler for TallyHandler {
    fn name(&self) -> &'static str {
        "tally"
    }

    async fn handle(&self, notification: &ReceivedNotification) -> anyhow::Result<()> {
        let player = notification.player();
        let mut tallies = self.tallies.write().await;
        tallies
            .entry(tally_key(player))
            .or_insert_with(|| PlayerTally::new(player))
            .record(&notification.notification, notification.received_at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::tests::received;

    #[tokio::test]
    async fn tallies_are_keyed_case_insensitively() {
        let tallies: TallyBook = Arc::default();
        let handler = TallyHandler::new(tallies.clone());

        handler
            .handle(&received(
                r#"{"type":"DEATH","playerName":"Zezima","extra":{"valueLost":120,"isPvp":false}}"#,
            ))
            .await
            .expect("death");
        handler
            .handle(&received(
                r#"{"type":"DEATH","playerName":"ZEZIMA","extra":{"valueLost":30,"isPvp":false}}"#,
            ))
            .await
            .expect("death");

        let tallies = tallies.read().await;
        let tally = tallies.get("zezima").expect("tally");
        assert_eq!(tally.player_name, "Zezima");
        assert_eq!(tally.deaths, 2);
        assert_eq!(tally.value_lost, 150);
    }
}
