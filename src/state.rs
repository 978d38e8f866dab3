use std::sync::Arc;

use crate::application::ports::{ApplicationGateway, MirrorJobStore, RemoteJobStore};
use crate::application::services::{FreelanceService, JobSyncService};
use crate::infrastructure::remote::HttpRemoteStore;
use crate::infrastructure::storage::{SqliteKvStorage, SqliteMirrorStore};
use crate::presentation::handlers::{ApplicationHandler, JobAdminHandler};
use crate::shared::AppConfig;

/// Application-wide state: the configuration and the wired handler graph.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub job_handler: Arc<JobAdminHandler>,
    pub application_handler: Arc<ApplicationHandler>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        config
            .validate()
            .map_err(|message| anyhow::anyhow!("Invalid configuration: {message}"))?;

        let storage = SqliteKvStorage::open(&config.storage.database_path()).await?;
        let remote = Arc::new(HttpRemoteStore::new(&config.remote)?);

        let remote_store: Arc<dyn RemoteJobStore> = remote.clone();
        let gateway: Arc<dyn ApplicationGateway> = remote;
        let mirror: Arc<dyn MirrorJobStore> = Arc::new(SqliteMirrorStore::new(storage));

        let job_service = Arc::new(JobSyncService::new(remote_store.clone(), mirror));
        let freelance_service = Arc::new(FreelanceService::new(gateway));

        Ok(Self {
            config,
            job_handler: Arc::new(JobAdminHandler::new(job_service, remote_store)),
            application_handler: Arc::new(ApplicationHandler::new(freelance_service)),
        })
    }
}
