use std::sync::Arc;

use crate::catalog::MovieCatalog;
use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<dyn MovieCatalog>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { config, catalog }
    }
}
