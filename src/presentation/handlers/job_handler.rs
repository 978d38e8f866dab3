use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::application::ports::RemoteJobStore;
use crate::application::services::JobSyncServiceTrait;
use crate::domain::entities::SyncSession;
use crate::domain::value_objects::JobId;
use crate::presentation::dto::{ConnectivityReport, JobFormDto, JobView, MutationView, Validate};
use crate::shared::AppError;

/// Admin-facing operations over the job collection. Holds the session so the
/// cached list and the edit target survive across calls; whether a submit
/// creates or updates is decided here, from that state, never by the caller.
pub struct JobAdminHandler {
    job_service: Arc<dyn JobSyncServiceTrait>,
    remote: Arc<dyn RemoteJobStore>,
    session: RwLock<SyncSession>,
}

impl JobAdminHandler {
    pub fn new(job_service: Arc<dyn JobSyncServiceTrait>, remote: Arc<dyn RemoteJobStore>) -> Self {
        Self {
            job_service,
            remote,
            session: RwLock::new(SyncSession::new()),
        }
    }

    pub async fn list_jobs(&self) -> Result<Vec<JobView>, AppError> {
        let mut session = self.session.write().await;
        let listed = self.job_service.list(&mut session).await?;
        Ok(listed.value.into_iter().map(JobView::from).collect())
    }

    /// Starts editing the cached record with this id and returns it for form
    /// prefill. Only the last fetched list is consulted; an id that is not in
    /// the cache is reported missing even if the remote store knows it.
    pub async fn begin_edit(&self, id: i64) -> Result<JobView, AppError> {
        let job_id = JobId::new(id).map_err(AppError::MalformedInput)?;
        let mut session = self.session.write().await;
        let record = session.begin_edit(job_id).map_err(AppError::NotFound)?;
        Ok(JobView::from(record.clone()))
    }

    /// Submits the job form. While an edit session is open this updates the
    /// edited record; otherwise it creates a new one.
    pub async fn submit_job(&self, form: JobFormDto) -> Result<MutationView, AppError> {
        form.validate().map_err(AppError::MalformedInput)?;
        let draft = form.into_draft();

        let mut session = self.session.write().await;
        match session.editing_id() {
            Some(id) => {
                let outcome = self.job_service.update(&mut session, id, draft).await?;
                let message = if outcome.served_locally() {
                    "Remote store unavailable. Job updated in the local mirror."
                } else {
                    "Job Updated Successfully!"
                };
                Ok(MutationView {
                    message: message.to_string(),
                    job: outcome.value.map(JobView::from),
                })
            }
            None => {
                let outcome = self.job_service.create(&mut session, draft).await?;
                let message = if outcome.served_locally() {
                    "Remote store unavailable. Job saved to the local mirror."
                } else {
                    "Job Posted Successfully!"
                };
                Ok(MutationView {
                    message: message.to_string(),
                    job: Some(JobView::from(outcome.value)),
                })
            }
        }
    }

    pub async fn cancel_edit(&self) -> Result<Value, AppError> {
        let mut session = self.session.write().await;
        session.cancel_edit();
        Ok(json!({ "success": true }))
    }

    pub async fn delete_job(&self, id: i64) -> Result<MutationView, AppError> {
        let job_id = JobId::new(id).map_err(AppError::MalformedInput)?;
        let mut session = self.session.write().await;
        let outcome = self.job_service.delete(&mut session, job_id).await?;
        let message = if outcome.served_locally() {
            "Remote store unavailable. Job deleted from the local mirror."
        } else {
            "Job Deleted Successfully!"
        };
        Ok(MutationView {
            message: message.to_string(),
            job: None,
        })
    }

    /// Probes the remote store directly, without the fallback path. Failure
    /// is part of the report, not an error.
    pub async fn check_remote(&self) -> ConnectivityReport {
        match self.remote.list().await {
            Ok(records) => ConnectivityReport {
                reachable: true,
                records: Some(records.len()),
                detail: format!("Remote store responded with {} records", records.len()),
            },
            Err(err) => ConnectivityReport {
                reachable: false,
                records: None,
                detail: err.to_string(),
            },
        }
    }
}
