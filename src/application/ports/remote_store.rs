use async_trait::async_trait;

use crate::domain::entities::{JobDraft, JobRecord};
use crate::domain::value_objects::JobId;
use crate::shared::error::AppError;

/// The remote job API. Every call is single-shot: one request, no retry, no
/// client-imposed timeout. Implementations must report every failure mode —
/// non-2xx status, transport error, undecodable body — as
/// `AppError::RemoteUnavailable` so the reconciliation layer can fall back.
#[async_trait]
pub trait RemoteJobStore: Send + Sync {
    /// Fetch all records, ordered by `created_at` descending.
    async fn list(&self) -> Result<Vec<JobRecord>, AppError>;

    /// Create a record; the response carries the server-assigned id.
    async fn create(&self, draft: &JobDraft) -> Result<JobRecord, AppError>;

    /// Replace the submitted fields of an existing record.
    async fn update(&self, id: JobId, draft: &JobDraft) -> Result<JobRecord, AppError>;

    async fn delete(&self, id: JobId) -> Result<(), AppError>;
}
