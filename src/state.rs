// Shared state for the Axum handlers

use crate::auth::StaticCredentialStore;
use crate::dashboard::{DashboardProvider, SettingsController};
use crate::models::AppConfig;
use crate::session::SessionStore;
use crate::storage::{StorageError, create_storage_backend};
use std::sync::Arc;
use tokio::sync::Mutex;

/// One session store per app instance; the mutex serializes every transition
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<SessionStore>>,
    pub dashboard: Arc<DashboardProvider>,
    pub settings: Arc<Mutex<SettingsController>>,
}

impl AppState {
    pub fn new(session: SessionStore, dashboard: DashboardProvider) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            dashboard: Arc::new(dashboard),
            settings: Arc::new(Mutex::new(SettingsController::new())),
        }
    }

    /// Wire storage, credential table and dashboard from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, StorageError> {
        let storage = create_storage_backend(&config.storage)?;
        let credentials = Arc::new(StaticCredentialStore::new(config.credentials.clone()));
        let session = SessionStore::new(storage, credentials);

        Ok(Self::new(
            session,
            DashboardProvider::new(config.dashboard.clone()),
        ))
    }
}
