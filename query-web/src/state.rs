//! Application state for the query web service.

use std::sync::Arc;

use common::config::AppConfig;

use crate::service::QueryStore;
use crate::views::ViewRenderer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn QueryStore>,
    pub views: ViewRenderer,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: AppConfig, store: Arc<dyn QueryStore>) -> Self {
        let views = ViewRenderer::new(&config.views_dir);
        Self {
            config,
            store,
            views,
        }
    }
}
