//! User repository for database operations

use common::error::{DatabaseError, DatabaseResult};
use sqlx::SqlitePool;
use tracing::info;

use crate::models::User;

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a user by exact name and enrollment match
    pub async fn find_by_credentials(
        &self,
        name: &str,
        enrollment: &str,
    ) -> DatabaseResult<Option<User>> {
        info!("Finding user {} with enrollment {}", name, enrollment);

        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(DatabaseError::Connection)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, enrollment
            FROM users
            WHERE name = ? AND enrollment = ?
            LIMIT 1
            "#,
        )
        .bind(name)
        .bind(enrollment)
        .fetch_optional(&mut *conn)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(user)
    }

    /// Create a new user
    ///
    /// Performs no duplicate check of its own. A reused enrollment is
    /// rejected by the store as [`DatabaseError::Constraint`].
    pub async fn create(&self, name: &str, enrollment: &str) -> DatabaseResult<User> {
        info!("Creating new user: {}", name);

        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(DatabaseError::Connection)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, enrollment)
            VALUES (?, ?)
            RETURNING id, name, enrollment
            "#,
        )
        .bind(name)
        .bind(enrollment)
        .fetch_one(&mut *conn)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_pool;

    #[tokio::test]
    async fn test_create_then_find() -> DatabaseResult<()> {
        let repo = UserRepository::new(test_pool().await);

        let created = repo.create("Alice", "E100").await?;
        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Alice");
        assert_eq!(created.enrollment, "E100");

        let found = repo.find_by_credentials("Alice", "E100").await?;
        assert_eq!(found, Some(created));
        Ok(())
    }

    #[tokio::test]
    async fn test_find_requires_both_fields_to_match() -> DatabaseResult<()> {
        let repo = UserRepository::new(test_pool().await);
        repo.create("Alice", "E100").await?;

        assert_eq!(repo.find_by_credentials("Alice", "E101").await?, None);
        assert_eq!(repo.find_by_credentials("Bob", "E100").await?, None);
        assert_eq!(repo.find_by_credentials("alice", "E100").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_ids_are_assigned_in_order() -> DatabaseResult<()> {
        let repo = UserRepository::new(test_pool().await);

        let first = repo.create("Alice", "E100").await?;
        let second = repo.create("Bob", "E200").await?;
        assert!(second.id > first.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_reused_enrollment_is_rejected_by_the_store() -> DatabaseResult<()> {
        let repo = UserRepository::new(test_pool().await);
        repo.create("Alice", "E100").await?;

        let err = repo
            .create("Alice", "E100")
            .await
            .expect_err("second insert must fail");
        assert!(err.is_constraint_violation());

        let err = repo
            .create("Bob", "E100")
            .await
            .expect_err("enrollment is unique regardless of name");
        assert!(err.is_constraint_violation());
        Ok(())
    }
}
