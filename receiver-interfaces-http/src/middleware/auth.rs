use axum::http::HeaderMap;
use serde::Deserialize;

use receiver_domain::RuntimeConfig;

/// `?token=` for senders that can only configure a URL.
#[derive(Debug, Default, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap, query: &TokenQuery) -> bool {
    let Some(api_token) = &config.api_token else {
        return true;
    };
    let presented = extract_bearer(headers).or_else(|| {
        query
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(ToString::to_string)
    });
    presented.map(|token| token == *api_token).unwrap_or(false)
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token: Option<&str>) -> RuntimeConfig {
        RuntimeConfig {
            api_token: token.map(ToString::to_string),
            ..RuntimeConfig::default()
        }
    }

    fn query(token: Option<&str>) -> TokenQuery {
        TokenQuery {
            token: token.map(ToString::to_string),
        }
    }

    #[test]
    fn open_when_no_token_configured() {
        assert!(authorize(&config(None), &HeaderMap::new(), &query(None)));
    }

    #[test]
    fn bearer_or_query_token_is_accepted() {
        let config = config(Some("s3cret"));
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", "Bearer s3cret".parse().expect("header"));
        assert!(authorize(&config, &headers, &query(None)));
        assert!(authorize(&config, &HeaderMap::new(), &query(Some("s3cret"))));
    }

    #[test]
    fn wrong_or_missing_token_is_refused() {
        let config = config(Some("s3cret"));
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", "Basic s3cret".parse().expect("header"));
        assert!(!authorize(&config, &headers, &query(None)));
        assert!(!authorize(&config, &HeaderMap::new(), &query(Some("nope"))));
        assert!(!authorize(&config, &HeaderMap::new(), &query(Some(""))));
    }
}
