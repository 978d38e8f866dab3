use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

use crate::application::ports::{MirrorJobStore, RemoteJobStore};
use crate::domain::entities::{now_timestamp, JobDraft, JobRecord, SyncSession};
use crate::domain::value_objects::JobId;
use crate::shared::error::AppError;

/// Which store satisfied an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreSource {
    Remote,
    LocalMirror,
}

/// A successful result plus the store that produced it. The value shape is
/// identical on both paths; the source only decides which confirmation
/// message the UI shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Synced<T> {
    pub value: T,
    pub source: StoreSource,
}

impl<T> Synced<T> {
    fn remote(value: T) -> Self {
        Self {
            value,
            source: StoreSource::Remote,
        }
    }

    fn local(value: T) -> Self {
        Self {
            value,
            source: StoreSource::LocalMirror,
        }
    }

    pub fn served_locally(&self) -> bool {
        self.source == StoreSource::LocalMirror
    }
}

/// The four synchronizer operations. Each applies the same two-phase policy:
/// try the remote store exactly once, and on `RemoteUnavailable` satisfy the
/// operation from the local mirror instead. Every call takes the session so
/// the cached list stays in step with whichever store answered.
#[async_trait]
pub trait JobSyncServiceTrait: Send + Sync {
    async fn list(&self, session: &mut SyncSession) -> Result<Synced<Vec<JobRecord>>, AppError>;

    async fn create(
        &self,
        session: &mut SyncSession,
        draft: JobDraft,
    ) -> Result<Synced<JobRecord>, AppError>;

    /// Completes any edit session targeting `id` on success. `None` in the
    /// result means the fallback found no mirror record with this id: that
    /// is a silent no-op, not a failure.
    async fn update(
        &self,
        session: &mut SyncSession,
        id: JobId,
        draft: JobDraft,
    ) -> Result<Synced<Option<JobRecord>>, AppError>;

    async fn delete(&self, session: &mut SyncSession, id: JobId)
        -> Result<Synced<()>, AppError>;
}

pub struct JobSyncService {
    remote: Arc<dyn RemoteJobStore>,
    mirror: Arc<dyn MirrorJobStore>,
}

impl JobSyncService {
    pub fn new(remote: Arc<dyn RemoteJobStore>, mirror: Arc<dyn MirrorJobStore>) -> Self {
        Self { remote, mirror }
    }
}

#[async_trait]
impl JobSyncServiceTrait for JobSyncService {
    async fn list(&self, session: &mut SyncSession) -> Result<Synced<Vec<JobRecord>>, AppError> {
        match self.remote.list().await {
            Ok(jobs) => {
                session.replace_jobs(jobs.clone());
                Ok(Synced::remote(jobs))
            }
            Err(err) if err.is_remote_unavailable() => {
                warn!("Remote list failed, serving the local mirror: {}", err);
                let jobs = self.mirror.get_all().await?;
                session.replace_jobs(jobs.clone());
                Ok(Synced::local(jobs))
            }
            Err(err) => Err(err),
        }
    }

    async fn create(
        &self,
        _session: &mut SyncSession,
        draft: JobDraft,
    ) -> Result<Synced<JobRecord>, AppError> {
        match self.remote.create(&draft).await {
            Ok(record) => Ok(Synced::remote(record)),
            Err(err) if err.is_remote_unavailable() => {
                warn!("Remote create failed, writing to the local mirror: {}", err);
                let mut jobs = self.mirror.get_all().await?;
                let id = JobId::allocate_local(Utc::now().timestamp_millis(), |candidate| {
                    jobs.iter().any(|job| job.id.value() == candidate)
                });
                let record = draft.into_record(id, now_timestamp());
                jobs.insert(0, record.clone());
                self.mirror.save_all(&jobs).await?;
                Ok(Synced::local(record))
            }
            Err(err) => Err(err),
        }
    }

    async fn update(
        &self,
        session: &mut SyncSession,
        id: JobId,
        draft: JobDraft,
    ) -> Result<Synced<Option<JobRecord>>, AppError> {
        let outcome = match self.remote.update(id, &draft).await {
            Ok(record) => Synced::remote(Some(record)),
            Err(err) if err.is_remote_unavailable() => {
                warn!("Remote update failed, merging into the local mirror: {}", err);
                let mut jobs = self.mirror.get_all().await?;
                match jobs.iter_mut().find(|job| job.id == id) {
                    Some(job) => {
                        draft.apply_to(job);
                        let updated = job.clone();
                        self.mirror.save_all(&jobs).await?;
                        Synced::local(Some(updated))
                    }
                    None => {
                        debug!("Update target {} not in the mirror, nothing to merge", id);
                        Synced::local(None)
                    }
                }
            }
            Err(err) => return Err(err),
        };

        // Successful submit completion closes the edit session, on either path.
        if session.editing_id() == Some(id) {
            session.finish_edit();
        }
        Ok(outcome)
    }

    async fn delete(
        &self,
        _session: &mut SyncSession,
        id: JobId,
    ) -> Result<Synced<()>, AppError> {
        match self.remote.delete(id).await {
            Ok(()) => Ok(Synced::remote(())),
            Err(err) if err.is_remote_unavailable() => {
                warn!("Remote delete failed, removing from the local mirror: {}", err);
                let mut jobs = self.mirror.get_all().await?;
                let before = jobs.len();
                jobs.retain(|job| job.id != id);
                if jobs.len() == before {
                    debug!("Delete target {} not in the mirror, nothing to remove", id);
                    return Ok(Synced::local(()));
                }
                self.mirror.save_all(&jobs).await?;
                Ok(Synced::local(()))
            }
            Err(err) => Err(err),
        }
    }
}
