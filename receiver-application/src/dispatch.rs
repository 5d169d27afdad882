use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tracing::info;

use receiver_domain::{NotificationKind, ReceivedNotification};

#[async_trait]
pub trait NotificationHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle(&self, notification: &ReceivedNotification) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Handled { handlers: usize },
    Unrouted,
}

/// Routes notifications to handlers by their `type` tag. Tags that are not
/// known go to the fallback handler instead of failing.
pub struct Dispatcher {
    routes: HashMap<NotificationKind, Vec<Arc<dyn NotificationHandler>>>,
    fallback: Arc<dyn NotificationHandler>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            fallback: Arc::new(IgnoreUnknown),
        }
    }

    pub fn with_fallback(mut self, handler: Arc<dyn NotificationHandler>) -> Self {
        self.fallback = handler;
        self
    }

    pub fn register(&mut self, kind: NotificationKind, handler: Arc<dyn NotificationHandler>) {
        self.routes.entry(kind).or_default().push(handler);
    }

    pub fn register_all(&mut self, handler: Arc<dyn NotificationHandler>) {
        for kind in NotificationKind::ALL {
            self.register(kind, handler.clone());
        }
    }

    pub fn handler_names(&self, tag: &str) -> Vec<&'static str> {
        match NotificationKind::parse(tag) {
            Some(kind) => self
                .routes
                .get(&kind)
                .map(|handlers| handlers.iter().map(|handler| handler.name()).collect())
                .unwrap_or_default(),
            None => vec![self.fallback.name()],
        }
    }

    /// Runs every handler registered for the tag, in registration order,
    /// stopping at the first failure.
    pub async fn dispatch(
        &self,
        notification: &ReceivedNotification,
    ) -> anyhow::Result<DispatchOutcome> {
        let Some(kind) = NotificationKind::parse(&notification.envelope.kind) else {
            self.fallback
                .handle(notification)
                .await
                .with_context(|| format!("{} handler failed", self.fallback.name()))?;
            return Ok(DispatchOutcome::Unrouted);
        };

        let handlers = self.routes.get(&kind).map(Vec::as_slice).unwrap_or_default();
        for handler in handlers {
            handler
                .handle(notification)
                .await
                .with_context(|| format!("{} handler failed for {}", handler.name(), kind))?;
        }
        Ok(DispatchOutcome::Handled {
            handlers: handlers.len(),
        })
    }
}

struct IgnoreUnknown;

#[async_trait]
impl NotificationHandler for IgnoreUnknown {
    fn name(&self) -> &'static str {
        "ignore"
    }

    async fn handle(&self, notification: &ReceivedNotification) -> anyhow::Result<()> {
        info!(
            notification_type = %notification.envelope.kind,
            player = %notification.player(),
            "ignoring notification with unknown type"
        );
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use receiver_domain::{Envelope, Notification};

    use super::*;

    pub(crate) fn received(payload: &str) -> ReceivedNotification {
        let envelope = Envelope::from_json(payload).expect("envelope");
        let notification =
            Notification::decode(&envelope.kind, &envelope.extra).expect("notification");
        ReceivedNotification {
            id: "test-id".to_string(),
            received_at: 1_700_000_000_000,
            fingerprint: "fp".to_string(),
            raw_payload: payload.to_string(),
            envelope,
            notification,
            attachment: None,
            attachment_path: None,
        }
    }

    #[derive(Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl NotificationHandler for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn handle(&self, _notification: &ReceivedNotification) -> anyhow::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Failing;

    #[async_trait]
    impl NotificationHandler for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn handle(&self, _notification: &ReceivedNotification) -> anyhow::Result<()> {
            anyhow::bail!("downstream unavailable")
        }
    }

    #[tokio::test]
    async fn routes_by_type_tag() {
        let loot = Arc::new(Counting::default());
        let everything = Arc::new(Counting::default());
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(NotificationKind::Loot, loot.clone());
        dispatcher.register_all(everything.clone());

        let outcome = dispatcher
            .dispatch(&received(r#"{"type":"LOOT","extra":{"items":[],"source":"Goblin"}}"#))
            .await
            .expect("dispatch");
        assert_eq!(outcome, DispatchOutcome::Handled { handlers: 2 });

        dispatcher
            .dispatch(&received(r#"{"type":"LOGOUT"}"#))
            .await
            .expect("dispatch");
        assert_eq!(loot.calls.load(Ordering::SeqCst), 1);
        assert_eq!(everything.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn unknown_tags_go_to_fallback() {
        let fallback = Arc::new(Counting::default());
        let everything = Arc::new(Counting::default());
        let mut dispatcher = Dispatcher::new().with_fallback(fallback.clone());
        dispatcher.register_all(everything.clone());

        let outcome = dispatcher
            .dispatch(&received(r#"{"type":"HISCORE","extra":{"rank":1}}"#))
            .await
            .expect("dispatch");
        assert_eq!(outcome, DispatchOutcome::Unrouted);
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 1);
        assert_eq!(everything.calls.load(Ordering::SeqCst), 0);
        assert_eq!(dispatcher.handler_names("HISCORE"), vec!["counting"]);
    }

    #[tokio::test]
    async fn handler_failure_stops_the_chain() {
        let after = Arc::new(Counting::default());
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(NotificationKind::Logout, Arc::new(Failing));
        dispatcher.register(NotificationKind::Logout, after.clone());

        let err = dispatcher
            .dispatch(&received(r#"{"type":"LOGOUT"}"#))
            .await
            .expect_err("failure");
        assert!(format!("{err:#}").contains("failing handler failed for LOGOUT"));
        assert_eq!(after.calls.load(Ordering::SeqCst), 0);
    }
}
