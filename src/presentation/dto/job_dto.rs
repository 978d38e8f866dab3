use serde::{Deserialize, Serialize};

use crate::domain::entities::{JobDraft, JobRecord};
use crate::domain::value_objects::JobStatus;
use crate::presentation::dto::Validate;

/// The admin job form as submitted. Field names match the wire contract, so
/// this doubles as the JSON shape accepted from scripts driving the tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobFormDto {
    pub title: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub vacancy: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub last_date: Option<String>,
    #[serde(default)]
    pub apply_link: Option<String>,
    #[serde(default)]
    pub short_desc: Option<String>,
    #[serde(default)]
    pub full_desc: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Validate for JobFormDto {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Job title is required".to_string());
        }
        Ok(())
    }
}

impl JobFormDto {
    pub fn into_draft(self) -> JobDraft {
        JobDraft {
            title: self.title,
            department: self.department,
            location: self.location,
            vacancy: self.vacancy,
            salary: self.salary,
            last_date: self.last_date,
            apply_link: self.apply_link,
            short_desc: self.short_desc,
            full_desc: self.full_desc,
            status: self.status.as_deref().map(JobStatus::from),
        }
    }
}

/// Outward representation of one job record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobView {
    pub id: i64,
    pub title: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub vacancy: Option<String>,
    pub salary: Option<String>,
    pub last_date: Option<String>,
    pub apply_link: Option<String>,
    pub short_desc: Option<String>,
    pub full_desc: Option<String>,
    pub status: String,
    pub created_at: String,
}

impl From<JobRecord> for JobView {
    fn from(record: JobRecord) -> Self {
        Self {
            id: record.id.value(),
            title: record.title,
            department: record.department,
            location: record.location,
            vacancy: record.vacancy,
            salary: record.salary,
            last_date: record.last_date,
            apply_link: record.apply_link,
            short_desc: record.short_desc,
            full_desc: record.full_desc,
            status: record.status.as_str().to_string(),
            created_at: record.created_at,
        }
    }
}

/// Result of a mutating operation: the confirmation the UI shows, plus the
/// stored record when one is available. The shape is identical whichever
/// store served the operation; only the message text differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationView {
    pub message: String,
    pub job: Option<JobView>,
}

/// Outcome of a direct remote reachability probe. Diagnostic only: the probe
/// bypasses the fallback path and never touches the cached list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectivityReport {
    pub reachable: bool,
    pub records: Option<usize>,
    pub detail: String,
}
