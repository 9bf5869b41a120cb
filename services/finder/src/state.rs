//! Application state shared across handlers

use sqlx::SqlitePool;

use crate::repositories::{ItemRepository, UserRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub user_repository: UserRepository,
    pub item_repository: ItemRepository,
}

impl AppState {
    /// Build the state around an initialised pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            user_repository: UserRepository::new(pool.clone()),
            item_repository: ItemRepository::new(pool.clone()),
            db_pool: pool,
        }
    }
}
