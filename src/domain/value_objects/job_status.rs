use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Publication status of a job record.
///
/// The admin flow only ever writes `Active`; anything else found in a store
/// is preserved verbatim so a round-trip never rewrites data it does not
/// understand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Active,
    Unknown(String),
}

impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Active => "Active",
            JobStatus::Unknown(value) => value.as_str(),
        }
    }
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Active
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for JobStatus {
    fn from(value: &str) -> Self {
        match value {
            "Active" => JobStatus::Active,
            other => JobStatus::Unknown(other.to_string()),
        }
    }
}

impl Serialize for JobStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JobStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(JobStatus::from(value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_round_trips() {
        let status: JobStatus = serde_json::from_str("\"Active\"").unwrap();
        assert_eq!(status, JobStatus::Active);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"Active\"");
    }

    #[test]
    fn unknown_status_is_preserved() {
        let status: JobStatus = serde_json::from_str("\"Archived\"").unwrap();
        assert_eq!(status, JobStatus::Unknown("Archived".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"Archived\"");
    }
}
