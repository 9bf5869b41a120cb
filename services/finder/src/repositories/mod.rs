//! Repositories for database operations
//!
//! Every operation acquires its own pooled connection and hands it back when
//! the guard drops, including on early returns and errors.

pub mod item;
pub mod user;

pub use item::ItemRepository;
pub use user::UserRepository;

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    use common::database::{DatabaseConfig, init_pool, init_schema};

    let pool = init_pool(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    init_schema(&pool).await.expect("Failed to create schema");
    pool
}
