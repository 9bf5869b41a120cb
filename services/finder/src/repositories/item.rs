//! Found-item repository for database operations

use common::error::{DatabaseError, DatabaseResult};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{info, warn};

use crate::models::{ItemSearch, LostItem, NewLostItem};

/// Found-item repository
#[derive(Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Create a new item repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a found item against `user_id`.
    ///
    /// The user is not looked up first; the association is stored as given.
    pub async fn create(&self, user_id: i64, item: &NewLostItem) -> DatabaseResult<LostItem> {
        info!("Recording found item {} for user {}", item.item_name, user_id);

        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(DatabaseError::Connection)?;

        let item = sqlx::query_as::<_, LostItem>(
            r#"
            INSERT INTO lost_items (user_id, name, stream, year, contact, item_name, found_date)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, user_id, name, stream, year, contact, item_name, found_date
            "#,
        )
        .bind(user_id)
        .bind(&item.name)
        .bind(&item.stream)
        .bind(&item.year)
        .bind(&item.contact)
        .bind(&item.item_name)
        .bind(&item.found_date)
        .fetch_one(&mut *conn)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(item)
    }

    /// Look up the items of `user_id` by exact item name.
    ///
    /// An absent or empty name short-circuits without touching the store.
    /// When nothing matches, every item of the user is returned instead.
    pub async fn find_items(
        &self,
        user_id: i64,
        item_name: Option<&str>,
    ) -> DatabaseResult<ItemSearch> {
        let Some(item_name) = item_name.filter(|name| !name.is_empty()) else {
            return Ok(ItemSearch::MissingName);
        };

        info!("Searching items named {} for user {}", item_name, user_id);

        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(DatabaseError::Connection)?;

        let matches = fetch_by_name(&mut conn, user_id, item_name).await?;
        if !matches.is_empty() {
            return Ok(ItemSearch::Matches(matches));
        }

        warn!("No item named {} for user {}, listing all", item_name, user_id);
        let all = fetch_for_user(&mut conn, user_id).await?;

        Ok(ItemSearch::NoMatch(all))
    }
}

async fn fetch_by_name(
    conn: &mut SqliteConnection,
    user_id: i64,
    item_name: &str,
) -> DatabaseResult<Vec<LostItem>> {
    sqlx::query_as::<_, LostItem>(
        r#"
        SELECT id, user_id, name, stream, year, contact, item_name, found_date
        FROM lost_items
        WHERE user_id = ? AND item_name = ?
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .bind(item_name)
    .fetch_all(&mut *conn)
    .await
    .map_err(DatabaseError::from_query)
}

async fn fetch_for_user(conn: &mut SqliteConnection, user_id: i64) -> DatabaseResult<Vec<LostItem>> {
    sqlx::query_as::<_, LostItem>(
        r#"
        SELECT id, user_id, name, stream, year, contact, item_name, found_date
        FROM lost_items
        WHERE user_id = ?
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(DatabaseError::from_query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_pool;

    fn report(item_name: &str, found_date: &str) -> NewLostItem {
        NewLostItem {
            name: "Bob".to_string(),
            stream: "CS".to_string(),
            year: "2".to_string(),
            contact: "555".to_string(),
            item_name: item_name.to_string(),
            found_date: found_date.to_string(),
        }
    }

    #[tokio::test]
    async fn test_exact_match_returns_matching_rows_in_insertion_order() -> DatabaseResult<()> {
        let repo = ItemRepository::new(test_pool().await);

        let first = repo.create(1, &report("Wallet", "2024-01-01")).await?;
        repo.create(1, &report("Keys", "2024-01-02")).await?;
        let second = repo.create(1, &report("Wallet", "2024-01-03")).await?;
        repo.create(2, &report("Wallet", "2024-01-04")).await?;

        let search = repo.find_items(1, Some("Wallet")).await?;
        assert_eq!(search, ItemSearch::Matches(vec![first, second]));
        Ok(())
    }

    #[tokio::test]
    async fn test_match_is_case_sensitive() -> DatabaseResult<()> {
        let repo = ItemRepository::new(test_pool().await);
        repo.create(1, &report("Wallet", "2024-01-01")).await?;

        let search = repo.find_items(1, Some("wallet")).await?;
        assert!(matches!(search, ItemSearch::NoMatch(_)));
        Ok(())
    }

    #[tokio::test]
    async fn test_no_match_falls_back_to_all_user_items() -> DatabaseResult<()> {
        let repo = ItemRepository::new(test_pool().await);

        let wallet = repo.create(1, &report("Wallet", "2024-01-01")).await?;
        let keys = repo.create(1, &report("Keys", "2024-01-02")).await?;
        repo.create(2, &report("Phone", "2024-01-03")).await?;

        let search = repo.find_items(1, Some("Nonexistent")).await?;
        assert_eq!(search, ItemSearch::NoMatch(vec![wallet, keys]));
        Ok(())
    }

    #[tokio::test]
    async fn test_no_match_for_user_without_items_is_empty() -> DatabaseResult<()> {
        let repo = ItemRepository::new(test_pool().await);
        repo.create(2, &report("Phone", "2024-01-03")).await?;

        let search = repo.find_items(1, Some("Phone")).await?;
        assert_eq!(search, ItemSearch::NoMatch(Vec::new()));
        assert!(search.items().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_name_skips_the_query() -> DatabaseResult<()> {
        let pool = test_pool().await;
        let repo = ItemRepository::new(pool.clone());

        // A closed pool would fail any acquire
        pool.close().await;

        assert_eq!(repo.find_items(1, None).await?, ItemSearch::MissingName);
        assert_eq!(repo.find_items(1, Some("")).await?, ItemSearch::MissingName);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_stores_unknown_user_id() -> DatabaseResult<()> {
        let repo = ItemRepository::new(test_pool().await);

        let item = repo.create(99, &report("Umbrella", "yesterday")).await?;
        assert_eq!(item.user_id, 99);
        assert_eq!(item.found_date, "yesterday");
        Ok(())
    }
}
