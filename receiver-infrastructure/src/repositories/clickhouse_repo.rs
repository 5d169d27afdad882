use anyhow::Result;
use async_trait::async_trait;
use clickhouse::Client;

use receiver_domain::ports::NotificationRepository;
use receiver_domain::{ArchivedNotification, DbConfig, NotificationQuery, NotificationRow};

use crate::utils::millis_to_utc;

#[derive(Clone)]
pub struct ClickhouseRepo {
    client: Client,
    database: String,
}

impl ClickhouseRepo {
    pub fn new(client: Client, database: String) -> Self {
        Self { client, database }
    }

    pub fn from_config(config: &DbConfig) -> Self {
        let mut client = Client::default()
            .with_url(&config.clickhouse_url)
            .with_database(&config.clickhouse_database);
        if let Some(user) = &config.clickhouse_user {
            client = client.with_user(user);
        }
        if let Some(password) = &config.clickhouse_password {
            client = client.with_password(password);
        }
        Self::new(client, config.clickhouse_database.clone())
    }
}

fn to_row(notification: &ArchivedNotification) -> NotificationRow {
    NotificationRow {
        received_at: millis_to_utc(notification.received_at),
        notification_id: notification.id.clone(),
        kind: notification.kind.clone(),
        player_name: notification.player_name.clone(),
        account_hash: notification.account_hash.clone(),
        account_type: notification.account_type.clone(),
        world: notification.world,
        value: notification.value,
        summary: notification.summary.clone(),
        payload_json: notification.payload_json.clone(),
        attachment_path: notification.attachment_path.clone().unwrap_or_default(),
    }
}

#[async_trait]
impl NotificationRepository for ClickhouseRepo {
    async fn ensure_schema(&self) -> Result<()> {
        // The configured database may not exist yet.
        let create_db = format!("CREATE DATABASE IF NOT EXISTS {}", self.database);
        self.client
            .clone()
            .with_database("default")
            .query(&create_db)
            .execute()
            .await?;

        let create_notifications = r#"
CREATE TABLE IF NOT EXISTS notifications (
    received_at DateTime64(3),
    notification_id String,
    kind LowCardinality(String),
    player_name String,
    account_hash String,
    account_type LowCardinality(String),
    world Nullable(UInt32),
    value Nullable(Int64),
    summary String,
    payload_json String,
    attachment_path String
) ENGINE = MergeTree
PARTITION BY toYYYYMM(received_at)
ORDER BY (received_at, player_name, kind)
"#;

        self.client.query(create_notifications).execute().await?;
        Ok(())
    }

    async fn insert_notification(&self, notification: &ArchivedNotification) -> Result<()> {
        let mut insert = self.client.insert("notifications")?;
        insert.write(&to_row(notification)).await?;
        insert.end().await?;
        Ok(())
    }

    async fn fetch_recent(&self, query: &NotificationQuery) -> Result<Vec<ArchivedNotification>> {
        let mut sql = String::from(
            "SELECT received_at, notification_id, kind, player_name, account_hash, account_type, \
             world, value, summary, payload_json, attachment_path \
             FROM notifications WHERE 1 = 1",
        );
        let player = query.player.as_deref().map(str::trim).filter(|value| !value.is_empty());
        let kind = query.kind.as_deref().map(str::trim).filter(|value| !value.is_empty());
        if player.is_some() {
            sql.push_str(" AND lower(player_name) = lower(?)");
        }
        if kind.is_some() {
            sql.push_str(" AND kind = ?");
        }
        sql.push_str(" ORDER BY received_at DESC LIMIT ?");

        let mut statement = self.client.query(&sql);
        if let Some(player) = player {
            statement = statement.bind(player);
        }
        if let Some(kind) = kind {
            statement = statement.bind(kind);
        }
        let rows = statement
            .bind(query.effective_limit() as u64)
            .fetch_all::<NotificationRow>()
            .await?;
        Ok(rows.into_iter().map(ArchivedNotification::from).collect())
    }

    async fn ping(&self) -> Result<()> {
        let _: u8 = self.client.query("SELECT toUInt8(1)").fetch_one().await?;
        Ok(())
    }
}
