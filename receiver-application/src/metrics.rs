use std::sync::atomic::{AtomicU64, Ordering};

use receiver_domain::NotificationKind;

#[derive(Debug, Default)]
pub struct Metrics {
    requests: AtomicU64,
    accepted: AtomicU64,
    ignored: AtomicU64,
    duplicates: AtomicU64,
    rejected: AtomicU64,
    failures: AtomicU64,
    accepted_by_kind: [AtomicU64; NotificationKind::COUNT],
}

impl Metrics {
    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_accepted(&self, kind: NotificationKind) {
        self.accepted.fetch_add(1, Ordering::Relaxed);
        self.accepted_by_kind[kind.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ignored(&self) {
        self.ignored.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_duplicate(&self) {
        self.duplicates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn accepted_count(&self, kind: NotificationKind) -> u64 {
        self.accepted_by_kind[kind.index()].load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let mut out = format!(
            "# TYPE dink_receiver_requests_total counter\n\
dink_receiver_requests_total {}\n\
# TYPE dink_receiver_accepted_total counter\n\
dink_receiver_accepted_total {}\n\
# TYPE dink_receiver_ignored_total counter\n\
dink_receiver_ignored_total {}\n\
# TYPE dink_receiver_duplicates_total counter\n\
dink_receiver_duplicates_total {}\n\
# TYPE dink_receiver_rejected_total counter\n\
dink_receiver_rejected_total {}\n\
# TYPE dink_receiver_failures_total counter\n\
dink_receiver_failures_total {}\n\
# TYPE dink_receiver_accepted_by_type_total counter\n",
            self.requests.load(Ordering::Relaxed),
            self.accepted.load(Ordering::Relaxed),
            self.ignored.load(Ordering::Relaxed),
            self.duplicates.load(Ordering::Relaxed),
            self.rejected.load(Ordering::Relaxed),
            self.failures.load(Ordering::Relaxed),
        );
        for kind in NotificationKind::ALL {
            out.push_str(&format!(
                "dink_receiver_accepted_by_type_total{{type=\"{}\"}} {}\n",
                kind.as_str(),
                self.accepted_count(kind)
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prometheus_output_lists_per_type_counters() {
        let metrics = Metrics::default();
        metrics.record_request();
        metrics.record_accepted(NotificationKind::Loot);
        metrics.record_accepted(NotificationKind::Loot);
        metrics.record_ignored();

        let rendered = metrics.render_prometheus();
        assert!(rendered.contains("dink_receiver_requests_total 1\n"));
        assert!(rendered.contains("dink_receiver_accepted_total 2\n"));
        assert!(rendered.contains("dink_receiver_ignored_total 1\n"));
        assert!(rendered.contains("dink_receiver_accepted_by_type_total{type=\"LOOT\"} 2\n"));
        assert!(rendered.contains("dink_receiver_accepted_by_type_total{type=\"DEATH\"} 0\n"));
    }
}
