use std::collections::VecDeque;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use receiver_domain::ports::NotificationRepository;
use receiver_domain::{ArchivedNotification, NotificationQuery};

/// Bounded ring of the most recent notifications, used when no database is configured.
pub struct MemoryArchive {
    capacity: usize,
    rows: RwLock<VecDeque<ArchivedNotification>>,
}

impl MemoryArchive {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            rows: RwLock::new(VecDeque::with_capacity(capacity.min(4096))),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl NotificationRepository for MemoryArchive {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn insert_notification(&self, notification: &ArchivedNotification) -> Result<()> {
        let mut rows = self.rows.write().await;
        while rows.len() >= self.capacity {
            rows.pop_front();
        }
        rows.push_back(notification.clone());
        Ok(())
    }

    async fn fetch_recent(&self, query: &NotificationQuery) -> Result<Vec<ArchivedNotification>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .rev()
            .filter(|row| row.matches(query))
            .take(query.effective_limit())
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archived(id: &str, player: &str, kind: &str) -> ArchivedNotification {
        ArchivedNotification {
            id: id.to_string(),
            received_at: 0,
            kind: kind.to_string(),
            player_name: player.to_string(),
            account_hash: String::new(),
            account_type: String::new(),
            world: None,
            value: None,
            summary: String::new(),
            payload_json: "{}".to_string(),
            attachment_path: None,
        }
    }

    #[tokio::test]
    async fn oldest_rows_fall_off_the_ring() {
        let archive = MemoryArchive::new(2);
        for id in ["a", "b", "c"] {
            archive
                .insert_notification(&archived(id, "Zezima", "LOOT"))
                .await
                .expect("insert");
        }
        assert_eq!(archive.len().await, 2);

        let rows = archive
            .fetch_recent(&NotificationQuery::default())
            .await
            .expect("fetch");
        let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);
    }

    #[tokio::test]
    async fn fetch_filters_and_limits() {
        let archive = MemoryArchive::new(10);
        archive.insert_notification(&archived("1", "Zezima", "LOOT")).await.expect("insert");
        archive.insert_notification(&archived("2", "Zezima", "DEATH")).await.expect("insert");
        archive.insert_notification(&archived("3", "Lynx Titan", "LOOT")).await.expect("insert");
        archive.insert_notification(&archived("4", "zezima", "LOOT")).await.expect("insert");

        let query = NotificationQuery {
            player: Some("ZEZIMA".to_string()),
            kind: Some("LOOT".to_string()),
            limit: Some(1),
        };
        let rows = archive.fetch_recent(&query).await.expect("fetch");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "4");
    }
}
