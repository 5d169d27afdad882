use std::sync::Arc;

use receiver_domain::ports::{AttachmentStore, NotificationRepository, RelayService};
use receiver_domain::RuntimeConfig;
use tokio::sync::Mutex;

use crate::dedup::DeliveryDeduper;
use crate::dispatch::Dispatcher;
use crate::handlers::{ArchiveHandler, RelayHandler, TallyBook, TallyHandler};
use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub archive: Arc<dyn NotificationRepository>,
    pub attachments: Option<Arc<dyn AttachmentStore>>,
    pub relay: Arc<dyn RelayService>,
    pub dispatcher: Arc<Dispatcher>,
    pub tallies: TallyBook,
    pub dedup: Arc<Mutex<DeliveryDeduper>>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Wires the default handler chain: archive, tally, then relay.
    pub fn new(
        config: RuntimeConfig,
        archive: Arc<dyn NotificationRepository>,
        attachments: Option<Arc<dyn AttachmentStore>>,
        relay: Arc<dyn RelayService>,
    ) -> Self {
        let tallies = TallyBook::default();
        let dispatcher =
            default_dispatcher(&config, archive.clone(), tallies.clone(), relay.clone());
        Self {
            dedup: Arc::new(Mutex::new(DeliveryDeduper::new(config.dedup_window_seconds))),
            config,
            archive,
            attachments,
            relay,
            dispatcher: Arc::new(dispatcher),
            tallies,
            metrics: Arc::new(Metrics::default()),
        }
    }
}

pub fn default_dispatcher(
    config: &RuntimeConfig,
    archive: Arc<dyn NotificationRepository>,
    tallies: TallyBook,
    relay: Arc<dyn RelayService>,
) -> Dispatcher {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register_all(Arc::new(ArchiveHandler::new(archive)));
    dispatcher.register_all(Arc::new(TallyHandler::new(tallies)));
    dispatcher.register_all(Arc::new(RelayHandler::new(config.clone(), relay)));
    dispatcher
}
