//! Application state for directory-api

use std::sync::Arc;

use sqlx::MySqlPool;

use crate::db::{EmployeeStore, MySqlEmployeeStore};

/// Shared application state
///
/// Holds no business data: every request goes to the store.
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway
    pub store: Arc<dyn EmployeeStore>,
}

impl AppState {
    pub fn new(store: impl EmployeeStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// State backed by the MySQL pool
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self::new(MySqlEmployeeStore::new(pool))
    }
}
