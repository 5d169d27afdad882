use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::{Client, Request};
use sha2::Sha256;
use tracing::{debug, warn};

use receiver_domain::ports::RelayService;
use receiver_domain::{ReceivedNotification, RuntimeConfig};

pub const DEFAULT_RELAY_TEMPLATE: &str = r#"{"content":"{summary}"}"#;
pub const SIGNATURE_HEADER: &str = "X-Signature";

type HmacSha256 = Hmac<Sha256>;

#[derive(Default)]
pub struct HttpRelayService;

impl HttpRelayService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RelayService for HttpRelayService {
    fn spawn_relay(&self, config: RuntimeConfig, notification: ReceivedNotification) {
        tokio::spawn(async move {
            if let Err(err) = send_relay(&config, &notification).await {
                warn!(
                    notification_type = %notification.envelope.kind,
                    id = %notification.id,
                    "relay webhook failed: {:#}",
                    err
                );
            }
        });
    }

    async fn check_relay_target(&self, config: &RuntimeConfig) -> Result<()> {
        let url = resolve_relay_url(config)?;
        let response = build_client(config)?.get(url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("relay webhook responded {}", response.status());
        }
        Ok(())
    }
}

async fn send_relay(config: &RuntimeConfig, notification: &ReceivedNotification) -> Result<()> {
    let client = build_client(config)?;
    let request = build_request(&client, config, notification)?;
    client.execute(request).await?.error_for_status()?;
    debug!(id = %notification.id, "relayed notification");
    Ok(())
}

fn build_request(
    client: &Client,
    config: &RuntimeConfig,
    notification: &ReceivedNotification,
) -> Result<Request> {
    let url = resolve_relay_url(config)?;
    let template = config
        .relay_template
        .as_deref()
        .unwrap_or(DEFAULT_RELAY_TEMPLATE);
    let payload = build_payload(notification, template);

    let mut request = client
        .post(url)
        .header("Content-Type", "application/json");
    if let Some(secret) = config.relay_secret.as_deref() {
        let signature = sign_hmac_sha256(secret, &payload)?;
        request = request.header(SIGNATURE_HEADER, format!("sha256={signature}"));
    }
    Ok(request.body(payload).build()?)
}

fn build_client(config: &RuntimeConfig) -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_seconds.max(3)))
        .build()?)
}

fn resolve_relay_url(config: &RuntimeConfig) -> Result<&str> {
    config
        .relay_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| anyhow!("relay url not configured"))
}

/// Fills `{summary}`, `{player}`, `{type}` and `{value}` in one pass over the
/// template. Substituted text is never scanned again.
pub fn build_payload(notification: &ReceivedNotification, template: &str) -> String {
    let value = notification
        .notification
        .value()
        .map(|value| value.to_string())
        .unwrap_or_default();
    let summary = notification.summary();
    let fields = [
        ("{summary}", summary.as_str()),
        ("{player}", notification.player()),
        ("{type}", notification.envelope.kind.as_str()),
        ("{value}", value.as_str()),
    ];

    let mut out = String::with_capacity(template.len() + summary.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        match fields.iter().find(|(key, _)| rest.starts_with(key)) {
            Some((key, field)) => {
                out.push_str(&json_escape(field));
                rest = &rest[key.len()..];
            }
            None => {
                out.push('{');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn json_escape(raw: &str) -> String {
    let quoted = serde_json::Value::String(raw.to_string()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

pub fn sign_hmac_sha256(secret: &str, payload: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|err| anyhow!("hmac init failed: {err}"))?;
    mac.update(payload.as_bytes());
    let digest = mac.finalize().into_bytes();

    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    Ok(out)
}
