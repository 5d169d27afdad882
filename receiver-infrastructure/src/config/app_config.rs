use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use receiver_domain::{DbConfig, NotificationKind, RuntimeConfig};

use crate::config::validation::{validate_relay_kind, validate_url};

pub const CONFIG_ENV: &str = "DINK_RECEIVER_CONFIG";
const ENV_PREFIX: &str = "DINK_RECEIVER_";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveBackend {
    Memory,
    Clickhouse,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub archive_backend: ArchiveBackend,
    pub memory_archive_capacity: usize,
    pub clickhouse_url: String,
    pub clickhouse_database: String,
    pub clickhouse_user: Option<String>,
    pub clickhouse_password: Option<String>,
    pub attachment_dir: Option<String>,
    pub relay_url: Option<String>,
    pub relay_template: Option<String>,
    pub relay_secret: Option<String>,
    pub relay_kinds: Vec<String>,
    pub dedup_window_seconds: u64,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub log_format: LogFormat,
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3245".to_string(),
            api_token: None,
            archive_backend: ArchiveBackend::Memory,
            memory_archive_capacity: 1000,
            clickhouse_url: "http://127.0.0.1:8123".to_string(),
            clickhouse_database: "dink".to_string(),
            clickhouse_user: None,
            clickhouse_password: None,
            attachment_dir: None,
            relay_url: None,
            relay_template: None,
            relay_secret: None,
            relay_kinds: Vec::new(),
            dedup_window_seconds: 0,
            max_body_bytes: 8 * 1024 * 1024,
            request_timeout_seconds: 15,
            log_format: LogFormat::Text,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Reads `path`, else `DINK_RECEIVER_CONFIG`, else `./config.toml`. A missing
    /// file means defaults; environment overrides apply either way.
    ///
    /// Tracing is not set up yet when this runs, so anything worth a warning
    /// comes back as a notice for the caller to log.
    pub async fn load(path: Option<PathBuf>) -> Result<(Self, Vec<String>)> {
        let path = path
            .or_else(|| env::var(CONFIG_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("./config.toml"));
        let base_dir = path.parent().map(Path::to_path_buf);

        let mut notices = Vec::new();
        let mut config = if path.exists() {
            let content = fs::read_to_string(&path).await?;
            Self::from_toml(&content)?
        } else {
            notices.push(format!("{} not found, using defaults", path.display()));
            AppConfig::default()
        };
        notices.extend(config.apply_env_overrides());
        config.resolve_paths(base_dir.as_deref());
        config.normalize();
        config.validate()?;
        Ok((config, notices))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config: {}", err))
    }

    pub fn normalize(&mut self) {
        blank_to_none(&mut self.api_token);
        blank_to_none(&mut self.clickhouse_user);
        blank_to_none(&mut self.clickhouse_password);
        blank_to_none(&mut self.attachment_dir);
        blank_to_none(&mut self.relay_url);
        blank_to_none(&mut self.relay_template);
        blank_to_none(&mut self.relay_secret);
        blank_to_none(&mut self.log_dir);
        self.relay_kinds = normalize_kind_list(std::mem::take(&mut self.relay_kinds));
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        if let Some(dir) = self.attachment_dir.as_mut() {
            *dir = resolve_path(base, dir);
        }
        if let Some(dir) = self.log_dir.as_mut() {
            *dir = resolve_path(base, dir);
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.archive_backend == ArchiveBackend::Memory && self.memory_archive_capacity == 0 {
            return Err(anyhow!("memory_archive_capacity must be greater than 0"));
        }
        if self.archive_backend == ArchiveBackend::Clickhouse {
            validate_url("clickhouse_url", &self.clickhouse_url)?;
        }
        if let Some(url) = &self.relay_url {
            validate_url("relay_url", url)?;
        }
        for kind in &self.relay_kinds {
            validate_relay_kind(kind)?;
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            attachment_dir: self.attachment_dir.clone(),
            relay_url: self.relay_url.clone(),
            relay_template: self.relay_template.clone(),
            relay_secret: self.relay_secret.clone(),
            relay_kinds: self
                .relay_kinds
                .iter()
                .filter_map(|kind| NotificationKind::parse(kind))
                .collect(),
            dedup_window_seconds: self.dedup_window_seconds,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            clickhouse_url: self.clickhouse_url.clone(),
            clickhouse_database: self.clickhouse_database.clone(),
            clickhouse_user: self.clickhouse_user.clone(),
            clickhouse_password: self.clickhouse_password.clone(),
        }
    }

    fn apply_env_overrides(&mut self) -> Vec<String> {
        self.apply_overrides(|key| env::var(format!("{ENV_PREFIX}{key}")).ok())
    }

    /// Applies `DINK_RECEIVER_*` style overrides. Values that do not parse are
    /// skipped and reported back.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut notices = Vec::new();
        if let Some(value) = lookup("BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Some(value) = lookup("ARCHIVE_BACKEND") {
            match value.trim().to_ascii_lowercase().as_str() {
                "memory" => self.archive_backend = ArchiveBackend::Memory,
                "clickhouse" => self.archive_backend = ArchiveBackend::Clickhouse,
                other => {
                    notices.push(format!("ignoring unknown archive backend override: {other}"))
                }
            }
        }
        if let Some(value) = lookup("MEMORY_ARCHIVE_CAPACITY") {
            parse_override(
                "MEMORY_ARCHIVE_CAPACITY",
                &value,
                &mut self.memory_archive_capacity,
                &mut notices,
            );
        }
        if let Some(value) = lookup("CLICKHOUSE_URL") {
            self.clickhouse_url = value;
        }
        if let Some(value) = lookup("CLICKHOUSE_DATABASE") {
            self.clickhouse_database = value;
        }
        if let Some(value) = lookup("CLICKHOUSE_USER") {
            self.clickhouse_user = Some(value);
        }
        if let Some(value) = lookup("CLICKHOUSE_PASSWORD") {
            self.clickhouse_password = Some(value);
        }
        if let Some(value) = lookup("ATTACHMENT_DIR") {
            self.attachment_dir = Some(value);
        }
        if let Some(value) = lookup("RELAY_URL") {
            self.relay_url = Some(value);
        }
        if let Some(value) = lookup("RELAY_TEMPLATE") {
            self.relay_template = Some(value);
        }
        if let Some(value) = lookup("RELAY_SECRET") {
            self.relay_secret = Some(value);
        }
        if let Some(value) = lookup("RELAY_KINDS") {
            self.relay_kinds = parse_env_list(&value);
        }
        if let Some(value) = lookup("DEDUP_WINDOW_SECONDS") {
            parse_override(
                "DEDUP_WINDOW_SECONDS",
                &value,
                &mut self.dedup_window_seconds,
                &mut notices,
            );
        }
        if let Some(value) = lookup("MAX_BODY_BYTES") {
            parse_override("MAX_BODY_BYTES", &value, &mut self.max_body_bytes, &mut notices);
        }
        if let Some(value) = lookup("REQUEST_TIMEOUT_SECONDS") {
            parse_override(
                "REQUEST_TIMEOUT_SECONDS",
                &value,
                &mut self.request_timeout_seconds,
                &mut notices,
            );
        }
        if let Some(value) = lookup("LOG_FORMAT") {
            match value.trim().to_ascii_lowercase().as_str() {
                "text" => self.log_format = LogFormat::Text,
                "json" => self.log_format = LogFormat::Json,
                other => notices.push(format!("ignoring unknown log format override: {other}")),
            }
        }
        if let Some(value) = lookup("LOG_DIR") {
            self.log_dir = Some(value);
        }
        notices
    }
}

fn parse_override<T: std::str::FromStr>(
    key: &str,
    value: &str,
    target: &mut T,
    notices: &mut Vec<String>,
) {
    match value.trim().parse() {
        Ok(parsed) => *target = parsed,
        Err(_) => notices.push(format!("ignoring invalid {ENV_PREFIX}{key} override: {value}")),
    }
}

fn blank_to_none(value: &mut Option<String>) {
    if value.as_deref().is_some_and(|inner| inner.trim().is_empty()) {
        *value = None;
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

fn parse_env_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn normalize_kind_list(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = values
        .into_iter()
        .map(|item| item.trim().to_ascii_uppercase())
        .filter(|item| !item.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}
