use anyhow::{anyhow, Result};

use receiver_domain::NotificationKind;

pub fn validate_relay_kind(value: &str) -> Result<()> {
    if NotificationKind::parse(value).is_none() {
        return Err(anyhow!("relay_kinds contains unknown type {}", value));
    }
    Ok(())
}

pub fn validate_url(field: &str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(anyhow!("{} must be an http(s) url", field));
    }
    Ok(())
}
