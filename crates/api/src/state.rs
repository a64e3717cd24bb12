use std::sync::Arc;

use tutorials_core::dispatch::TutorialDispatcher;
use tutorials_core::repository::TutorialRepository;

use crate::config::ServerConfig;
use crate::flash::FlashStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Tutorial dispatcher over the configured repository.
    pub tutorials: TutorialDispatcher<dyn TutorialRepository>,
    /// One-shot messages waiting for the next rendered page.
    pub flash: Arc<FlashStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(repo: Arc<dyn TutorialRepository>, config: ServerConfig) -> Self {
        Self {
            tutorials: TutorialDispatcher::new(repo),
            flash: Arc::new(FlashStore::new()),
            config: Arc::new(config),
        }
    }

    pub fn repository(&self) -> &Arc<dyn TutorialRepository> {
        self.tutorials.repository()
    }
}
