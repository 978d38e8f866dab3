use async_trait::async_trait;

use crate::domain::entities::JobRecord;
use crate::shared::error::AppError;

/// The local fallback collection, persisted as one blob under a single key.
#[async_trait]
pub trait MirrorJobStore: Send + Sync {
    /// Read the whole collection. Absence of stored data yields the built-in
    /// seed records (without persisting them), never an error; only real
    /// storage faults or a corrupt blob fail.
    async fn get_all(&self) -> Result<Vec<JobRecord>, AppError>;

    /// Persist the whole collection, replacing whatever was stored.
    async fn save_all(&self, records: &[JobRecord]) -> Result<(), AppError>;
}
