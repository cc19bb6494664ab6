use std::sync::Arc;

use newswire_core::storage::Database;
use newswire_core::{AppConfig, Ingestor};

/// Shared state for all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub ingestor: Ingestor,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: Database, config: Arc<AppConfig>) -> Self {
        let ingestor = Ingestor::new(db.clone(), config.summary_policy());
        Self {
            db,
            ingestor,
            config,
        }
    }
}
