//! Application state containing the store and shared resources

use chrono::Local;
use std::sync::Arc;

use crate::domain::{DomainError, DraftRepository, ServiceLogRepository};
use crate::infrastructure::config::Config;
use crate::infrastructure::seed::seed_service_logs;
use crate::infrastructure::InMemoryServiceLogStore;
use crate::services::ids::IdGenerator;

/// Application state handed to every component that reads or mutates logs
#[derive(Clone)]
pub struct AppState {
    /// Committed service logs
    pub log_repo: Arc<dyn ServiceLogRepository>,
    /// Autosaved drafts
    pub draft_repo: Arc<dyn DraftRepository>,
    /// Log and draft id source
    pub ids: Arc<IdGenerator>,
    config: Config,
}

impl AppState {
    /// Create an empty AppState backed by a fresh in-memory store
    pub fn new(config: Config) -> Self {
        Self::with_store(Arc::new(InMemoryServiceLogStore::new()), config)
    }

    /// Create an AppState over an existing store
    pub fn with_store(store: Arc<InMemoryServiceLogStore>, config: Config) -> Self {
        let log_repo: Arc<dyn ServiceLogRepository> = store.clone();
        let draft_repo: Arc<dyn DraftRepository> = store;

        Self {
            log_repo,
            draft_repo,
            ids: Arc::new(IdGenerator::new()),
            config,
        }
    }

    /// Create the AppState and seed it according to `config`
    pub fn initialize(config: Config) -> Result<Self, DomainError> {
        let state = Self::new(config);
        seed_service_logs(
            state.log_repo.as_ref(),
            &state.config,
            Local::now().date_naive(),
        )?;
        Ok(state)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
