use std::collections::HashMap;

use sha2::{Digest, Sha256};

/// Remembers recent delivery fingerprints so a re-sent webhook is acknowledged
/// without being dispatched twice. Matching is by content only, so two real
/// events with identical bodies inside the window collapse into one.
#[derive(Debug)]
pub struct DeliveryDeduper {
    window_ms: i64,
    seen: HashMap<String, i64>,
}

impl DeliveryDeduper {
    pub fn new(window_seconds: u64) -> Self {
        Self {
            window_ms: i64::try_from(window_seconds.saturating_mul(1000)).unwrap_or(i64::MAX),
            seen: HashMap::new(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.window_ms > 0
    }

    /// Records the fingerprint and returns `true` when it was not seen inside the window.
    pub fn check_and_record(&mut self, fingerprint: &str, now_ms: i64) -> bool {
        if !self.enabled() {
            return true;
        }
        self.prune(now_ms);
        if self.seen.contains_key(fingerprint) {
            return false;
        }
        self.seen.insert(fingerprint.to_string(), now_ms);
        true
    }

    /// Drops a fingerprint so that a delivery which failed downstream can be retried.
    pub fn forget(&mut self, fingerprint: &str) {
        self.seen.remove(fingerprint);
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    fn prune(&mut self, now_ms: i64) {
        let window = self.window_ms;
        self.seen
            .retain(|_, seen_at| now_ms.saturating_sub(*seen_at) < window);
    }
}

pub fn fingerprint(payload_json: &str, attachment: Option<&[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload_json.as_bytes());
    if let Some(bytes) = attachment {
        hasher.update([0u8]);
        hasher.update(bytes);
    }
    let digest = hasher.finalize();

    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_inside_window_are_duplicates() {
        let mut dedup = DeliveryDeduper::new(60);
        assert!(dedup.check_and_record("abc", 1_000));
        assert!(!dedup.check_and_record("abc", 30_000));
        assert!(dedup.check_and_record("def", 30_000));
    }

    #[test]
    fn expired_fingerprints_are_pruned() {
        let mut dedup = DeliveryDeduper::new(60);
        assert!(dedup.check_and_record("abc", 0));
        assert!(dedup.check_and_record("abc", 60_000));
        assert_eq!(dedup.len(), 1);
    }

    #[test]
    fn identical_logouts_outside_window_are_both_accepted() {
        let logout = fingerprint(r#"{"type":"LOGOUT","playerName":"Zezima"}"#, None);
        let mut dedup = DeliveryDeduper::new(300);
        assert!(dedup.check_and_record(&logout, 0));
        assert!(dedup.check_and_record(&logout, 300_000));
        assert!(!dedup.check_and_record(&logout, 300_001));
    }

    #[test]
    fn zero_window_disables_dedup() {
        let mut dedup = DeliveryDeduper::new(0);
        assert!(dedup.check_and_record("abc", 0));
        assert!(dedup.check_and_record("abc", 0));
        assert!(dedup.is_empty());
    }

    #[test]
    fn forget_allows_retry() {
        let mut dedup = DeliveryDeduper::new(60);
        assert!(dedup.check_and_record("abc", 0));
        dedup.forget("abc");
        assert!(dedup.check_and_record("abc", 1));
    }

    #[test]
    fn fingerprint_covers_attachment() {
        let bare = fingerprint("{\"type\":\"LOGOUT\"}", None);
        let with_file = fingerprint("{\"type\":\"LOGOUT\"}", Some(b"png"));
        assert_eq!(bare.len(), 64);
        assert_ne!(bare, with_file);
        assert_eq!(bare, fingerprint("{\"type\":\"LOGOUT\"}", None));
    }
}
