//! Application state for dependency injection.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create new app state with an injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Wire the SeaORM-backed store and service over a connection.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db));
        Self::new(Arc::new(UserManager::new(user_repo)))
    }
}
