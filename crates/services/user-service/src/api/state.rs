//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::service::UserDirectory;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn UserDirectory>,
    pub database: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(directory: Arc<dyn UserDirectory>, database: Database) -> Self {
        Self {
            directory,
            database,
        }
    }
}
