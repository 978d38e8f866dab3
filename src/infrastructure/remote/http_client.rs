use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::application::ports::{ApplicationGateway, RemoteJobStore};
use crate::domain::entities::{FreelanceApplication, JobDraft, JobRecord};
use crate::domain::value_objects::{JobId, JobStatus};
use crate::shared::config::RemoteConfig;
use crate::shared::error::AppError;

/// Mutation responses arrive as `{"message": ..., "data": [record]}`; the
/// stored record rides in `data`.
#[derive(Debug, Deserialize)]
struct MutationEnvelope {
    message: String,
    #[serde(default)]
    data: Vec<JobRecord>,
}

#[derive(Debug, Deserialize)]
struct SubmitEnvelope {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP adapter for the job site's API. Calls are single-shot and carry no
/// client-imposed timeout; whatever the transport defaults to is what
/// applies. Every failure mode — transport error, non-2xx status, body that
/// will not decode — maps to `AppError::RemoteUnavailable`.
pub struct HttpRemoteStore {
    http_client: reqwest::Client,
    jobs_url: String,
    applications_url: String,
}

impl HttpRemoteStore {
    pub fn new(config: &RemoteConfig) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder().build()?;
        Ok(Self {
            http_client,
            jobs_url: config.jobs_endpoint(),
            applications_url: config.applications_endpoint(),
        })
    }

    /// Wire payload for create/update: the draft's fields, with `status`
    /// resolved to its default when the form did not set one, and the target
    /// id spliced in for updates.
    fn job_body(draft: &JobDraft, id: Option<JobId>) -> Result<Value, AppError> {
        let mut body = serde_json::to_value(draft)?;
        if draft.status.is_none() {
            body["status"] = serde_json::to_value(JobStatus::default())?;
        }
        if let Some(id) = id {
            body["id"] = Value::from(id.value());
        }
        Ok(body)
    }

    async fn error_from_response(response: reqwest::Response) -> AppError {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);
        AppError::remote_status(status, message)
    }

    async fn stored_record(response: reqwest::Response) -> Result<JobRecord, AppError> {
        let envelope = response.json::<MutationEnvelope>().await?;
        debug!("Remote store confirmed: {}", envelope.message);
        envelope
            .data
            .into_iter()
            .next()
            .ok_or_else(|| AppError::remote("Response did not include the stored record"))
    }
}

#[async_trait]
impl RemoteJobStore for HttpRemoteStore {
    async fn list(&self) -> Result<Vec<JobRecord>, AppError> {
        debug!("Fetching job list from {}", self.jobs_url);
        let response = self.http_client.get(&self.jobs_url).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(response.json::<Vec<JobRecord>>().await?)
    }

    async fn create(&self, draft: &JobDraft) -> Result<JobRecord, AppError> {
        let body = Self::job_body(draft, None)?;
        let response = self
            .http_client
            .post(&self.jobs_url)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Self::stored_record(response).await
    }

    async fn update(&self, id: JobId, draft: &JobDraft) -> Result<JobRecord, AppError> {
        let body = Self::job_body(draft, Some(id))?;
        let response = self
            .http_client
            .put(&self.jobs_url)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Self::stored_record(response).await
    }

    async fn delete(&self, id: JobId) -> Result<(), AppError> {
        let body = serde_json::json!({ "id": id.value() });
        let response = self
            .http_client
            .delete(&self.jobs_url)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }
}

#[async_trait]
impl ApplicationGateway for HttpRemoteStore {
    async fn submit(&self, application: &FreelanceApplication) -> Result<String, AppError> {
        let response = self
            .http_client
            .post(&self.applications_url)
            .json(application)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        let envelope = response.json::<SubmitEnvelope>().await?;
        Ok(envelope.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_body_defaults_status_to_active() {
        let draft = JobDraft {
            title: "Clerk Post".to_string(),
            department: Some("X".to_string()),
            ..Default::default()
        };

        let body = HttpRemoteStore::job_body(&draft, None).unwrap();
        assert_eq!(body["status"], "Active");
        assert_eq!(body["title"], "Clerk Post");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn job_body_keeps_submitted_status_and_adds_id() {
        let draft = JobDraft {
            title: "Clerk Post".to_string(),
            status: Some(JobStatus::Unknown("Closed".to_string())),
            ..Default::default()
        };

        let body = HttpRemoteStore::job_body(&draft, Some(JobId::new(42).unwrap())).unwrap();
        assert_eq!(body["status"], "Closed");
        assert_eq!(body["id"], 42);
    }

    #[test]
    fn mutation_envelope_reads_first_record() {
        let raw = r#"{
            "message": "Job Added",
            "data": [{
                "id": 11,
                "title": "Clerk Post",
                "status": "Active",
                "created_at": "2026-08-21T10:00:00.000Z"
            }]
        }"#;
        let envelope: MutationEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.message, "Job Added");
        assert_eq!(envelope.data[0].id.value(), 11);
    }

    #[test]
    fn error_body_extracts_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"Method Not Allowed"}"#).unwrap();
        assert_eq!(body.error, "Method Not Allowed");
    }
}
