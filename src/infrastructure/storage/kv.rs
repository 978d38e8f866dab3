use std::path::Path;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use tracing::info;

use crate::shared::error::AppError;

/// Durable per-install key-value storage: one table, whole values under
/// fixed keys. Nothing here knows what the values mean.
#[derive(Clone)]
pub struct SqliteKvStorage {
    pool: Pool<Sqlite>,
}

impl SqliteKvStorage {
    pub async fn open(path: &Path) -> Result<Self, AppError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Storage(e.to_string()))?;
        }

        let url = format!("sqlite://{}?mode=rwc", path.display());
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await?;

        info!("Key-value storage connected: {}", url);

        let storage = Self { pool };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Private in-memory database, for tests and throwaway sessions.
    pub async fn in_memory() -> Result<Self, AppError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let storage = Self { pool };
        storage.init_schema().await?;
        Ok(storage)
    }

    async fn init_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM storage WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    pub async fn put(&self, key: &str, value: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO storage (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let storage = SqliteKvStorage::in_memory().await.unwrap();
        assert_eq!(storage.get("jobs").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_then_get_round_trips() {
        let storage = SqliteKvStorage::in_memory().await.unwrap();

        storage.put("jobs", "[]").await.unwrap();
        assert_eq!(storage.get("jobs").await.unwrap().as_deref(), Some("[]"));

        storage.put("jobs", r#"[{"a":1}]"#).await.unwrap();
        assert_eq!(
            storage.get("jobs").await.unwrap().as_deref(),
            Some(r#"[{"a":1}]"#)
        );
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let storage = SqliteKvStorage::in_memory().await.unwrap();

        storage.put("jobs", "[]").await.unwrap();
        storage.put("intro_popup_shown", "true").await.unwrap();

        assert_eq!(storage.get("jobs").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(
            storage.get("intro_popup_shown").await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn test_open_creates_database_file() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("data").join("test.db");

        let storage = SqliteKvStorage::open(&db_path).await.unwrap();
        storage.put("jobs", "[]").await.unwrap();

        assert!(db_path.exists());
    }
}
