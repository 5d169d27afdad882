use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use receiver_application::AppState;
use receiver_domain::ports::{AttachmentStore, NotificationRepository};
use receiver_infrastructure::{
    AppConfig, ArchiveBackend, AttachmentFileStore, ClickhouseRepo, HttpRelayService, MemoryArchive,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();

        let archive: Arc<dyn NotificationRepository> = match config.archive_backend {
            ArchiveBackend::Clickhouse => {
                let db_config = config.to_db_config();
                let repo = ClickhouseRepo::from_config(&db_config);
                repo.ensure_schema().await?;
                info!(
                    url = %db_config.clickhouse_url,
                    database = %db_config.clickhouse_database,
                    "archiving notifications to clickhouse"
                );
                Arc::new(repo)
            }
            ArchiveBackend::Memory => {
                info!(
                    capacity = config.memory_archive_capacity,
                    "archiving notifications in memory"
                );
                Arc::new(MemoryArchive::new(config.memory_archive_capacity))
            }
        };

        let attachments = runtime_config.attachment_dir.as_ref().map(|dir| {
            info!(dir = %dir, "storing attachments on disk");
            Arc::new(AttachmentFileStore::new(dir.as_str())) as Arc<dyn AttachmentStore>
        });

        let state = AppState::new(
            runtime_config,
            archive,
            attachments,
            Arc::new(HttpRelayService::new()),
        );

        Ok(Self { state })
    }
}
