use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{JobId, JobStatus};

/// A job posting as stored remotely and in the local mirror.
///
/// `created_at` stays a plain ISO-8601 string: the remote store stamps its
/// own timestamps and orders by them, and the mirror must round-trip whatever
/// form it received without reformatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
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
    pub status: JobStatus,
    pub created_at: String,
}

/// The submitted job form: everything an admin can type, nothing the stores
/// assign. `None` means the field was not submitted and must stay untouched
/// on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDraft {
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
    pub status: Option<JobStatus>,
}

impl JobDraft {
    /// Shallow-merge the submitted fields over an existing record. Fields the
    /// form did not submit keep their stored values; `id` and `created_at`
    /// are never touched.
    pub fn apply_to(&self, record: &mut JobRecord) {
        record.title = self.title.clone();
        if let Some(v) = &self.department {
            record.department = Some(v.clone());
        }
        if let Some(v) = &self.location {
            record.location = Some(v.clone());
        }
        if let Some(v) = &self.vacancy {
            record.vacancy = Some(v.clone());
        }
        if let Some(v) = &self.salary {
            record.salary = Some(v.clone());
        }
        if let Some(v) = &self.last_date {
            record.last_date = Some(v.clone());
        }
        if let Some(v) = &self.apply_link {
            record.apply_link = Some(v.clone());
        }
        if let Some(v) = &self.short_desc {
            record.short_desc = Some(v.clone());
        }
        if let Some(v) = &self.full_desc {
            record.full_desc = Some(v.clone());
        }
        if let Some(v) = &self.status {
            record.status = v.clone();
        }
    }

    /// Materialize a brand-new record from this draft, for mirror-side
    /// creation. Status defaults to `Active` when the form did not set one.
    pub fn into_record(self, id: JobId, created_at: String) -> JobRecord {
        JobRecord {
            id,
            title: self.title,
            department: self.department,
            location: self.location,
            vacancy: self.vacancy,
            salary: self.salary,
            last_date: self.last_date,
            apply_link: self.apply_link,
            short_desc: self.short_desc,
            full_desc: self.full_desc,
            status: self.status.unwrap_or_default(),
            created_at,
        }
    }
}

/// Current wall-clock time in the `toISOString` shape the stores carry.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The demo dataset an empty mirror presents: exactly these two records, in
/// this order.
pub fn seed_jobs() -> Vec<JobRecord> {
    vec![
        JobRecord {
            id: JobId::from_raw(1),
            title: "Senior Frontend Developer".to_string(),
            department: Some("Engineering".to_string()),
            location: Some("Remote".to_string()),
            vacancy: Some("2".to_string()),
            salary: Some("$120,000 - $150,000".to_string()),
            last_date: Some("2026-12-31".to_string()),
            apply_link: Some("https://example.com/careers/frontend".to_string()),
            short_desc: Some("Own the job portal's admin dashboard.".to_string()),
            full_desc: Some(
                "We are looking for a senior frontend developer to join our team.".to_string(),
            ),
            status: JobStatus::Active,
            created_at: "2024-01-02T09:00:00.000Z".to_string(),
        },
        JobRecord {
            id: JobId::from_raw(2),
            title: "Product Manager".to_string(),
            department: Some("Product".to_string()),
            location: Some("Hybrid".to_string()),
            vacancy: Some("1".to_string()),
            salary: Some("$110,000 - $140,000".to_string()),
            last_date: Some("2026-11-30".to_string()),
            apply_link: Some("https://example.com/careers/pm".to_string()),
            short_desc: Some("Lead product strategy and development.".to_string()),
            full_desc: Some(
                "Lead product strategy and development across the hiring platform.".to_string(),
            ),
            status: JobStatus::Active,
            created_at: "2024-01-01T09:00:00.000Z".to_string(),
        },
    ]
}
