// Runtime configuration handed from infrastructure to the application

use crate::value_objects::NotificationKind;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub attachment_dir: Option<String>,
    pub relay_url: Option<String>,
    pub relay_template: Option<String>,
    pub relay_secret: Option<String>,
    pub relay_kinds: Vec<NotificationKind>,
    pub dedup_window_seconds: u64,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl RuntimeConfig {
    /// Whether notifications of `kind` are forwarded to the relay target.
    /// An empty kind list forwards everything known.
    pub fn relays(&self, kind: NotificationKind) -> bool {
        self.relay_url.is_some()
            && (self.relay_kinds.is_empty() || self.relay_kinds.contains(&kind))
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3245".to_string(),
            api_token: None,
            attachment_dir: None,
            relay_url: None,
            relay_template: None,
            relay_secret: None,
            relay_kinds: Vec::new(),
            dedup_window_seconds: 0,
            max_body_bytes: 8 * 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub clickhouse_url: String,
    pub clickhouse_database: String,
    pub clickhouse_user: Option<String>,
    pub clickhouse_password: Option<String>,
}
