use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::MirrorJobStore;
use crate::domain::entities::{seed_jobs, JobRecord};
use crate::infrastructure::storage::SqliteKvStorage;
use crate::shared::error::AppError;

/// Storage key holding the whole mirrored collection as one JSON blob.
pub const JOBS_KEY: &str = "jobs";

/// Local mirror of the job collection over the key-value storage: one key,
/// whole-collection reads and writes, never per-record rows.
pub struct SqliteMirrorStore {
    storage: SqliteKvStorage,
}

impl SqliteMirrorStore {
    pub fn new(storage: SqliteKvStorage) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl MirrorJobStore for SqliteMirrorStore {
    /// Absence of the blob yields the seed dataset without persisting it;
    /// the seeds only reach disk once some write stores a collection
    /// containing them. A present-but-unreadable blob is a real error.
    async fn get_all(&self) -> Result<Vec<JobRecord>, AppError> {
        match self.storage.get(JOBS_KEY).await? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => {
                debug!("No mirrored jobs stored yet, presenting the seed dataset");
                Ok(seed_jobs())
            }
        }
    }

    async fn save_all(&self, records: &[JobRecord]) -> Result<(), AppError> {
        let blob = serde_json::to_string(records)?;
        self.storage.put(JOBS_KEY, &blob).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::JobId;

    async fn setup_store() -> (SqliteMirrorStore, SqliteKvStorage) {
        let storage = SqliteKvStorage::in_memory().await.unwrap();
        (SqliteMirrorStore::new(storage.clone()), storage)
    }

    #[tokio::test]
    async fn test_first_read_yields_seeds_without_persisting() {
        let (store, storage) = setup_store().await;

        let jobs = store.get_all().await.unwrap();
        assert_eq!(jobs, seed_jobs());

        // The seed set is presented, not written.
        assert_eq!(storage.get(JOBS_KEY).await.unwrap(), None);

        // And a second read yields the same thing.
        assert_eq!(store.get_all().await.unwrap(), seed_jobs());
    }

    #[tokio::test]
    async fn test_save_then_read_round_trips() {
        let (store, _storage) = setup_store().await;

        let mut jobs = seed_jobs();
        jobs.remove(1);
        store.save_all(&jobs).await.unwrap();

        let loaded = store.get_all().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Senior Frontend Developer");
    }

    #[tokio::test]
    async fn test_string_ids_in_stored_blob_normalize() {
        let (store, storage) = setup_store().await;

        let blob = r#"[{
            "id": "42",
            "title": "Clerk Post",
            "status": "Active",
            "created_at": "2026-08-01T08:30:00.000Z"
        }]"#;
        storage.put(JOBS_KEY, blob).await.unwrap();

        let jobs = store.get_all().await.unwrap();
        assert_eq!(jobs[0].id, JobId::new(42).unwrap());
    }

    #[tokio::test]
    async fn test_corrupt_blob_is_an_error() {
        let (store, storage) = setup_store().await;

        storage.put(JOBS_KEY, "{not json").await.unwrap();

        let err = store.get_all().await.unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_save_replaces_whole_collection() {
        let (store, storage) = setup_store().await;

        store.save_all(&seed_jobs()).await.unwrap();
        store.save_all(&[]).await.unwrap();

        assert_eq!(store.get_all().await.unwrap(), Vec::<JobRecord>::new());
        // The key exists now, so the empty collection wins over the seeds.
        assert!(storage.get(JOBS_KEY).await.unwrap().is_some());
    }
}
