use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Job record identifier.
///
/// Remote ids come from the API's database sequence; locally assigned ids are
/// wall-clock milliseconds. Both are plain integers, but persisted blobs may
/// carry them as JSON numbers or as numeric strings, so deserialization
/// accepts either form and normalizes to the canonical integer here. All
/// comparisons are numeric; `42` and `"42"` name the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(i64);

impl JobId {
    pub fn new(value: i64) -> Result<Self, String> {
        if value <= 0 {
            return Err(format!("Job id must be a positive integer, got {value}"));
        }
        Ok(Self(value))
    }

    /// Constructor for ids already known valid: built-in records and
    /// wall-clock allocation.
    pub(crate) const fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Allocate a wall-clock id for a record created in the local store.
    /// `taken` reports collisions (two creates in the same millisecond);
    /// candidates are bumped until free so ids stay unique per store.
    pub fn allocate_local(now_ms: i64, taken: impl Fn(i64) -> bool) -> Self {
        let mut candidate = now_ms.max(1);
        while taken(candidate) {
            candidate += 1;
        }
        Self(candidate)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<JobId> for i64 {
    fn from(value: JobId) -> Self {
        value.0
    }
}

impl FromStr for JobId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("Job id must be an integer, got {s:?}"))?;
        Self::new(value)
    }
}

impl Serialize for JobId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(JobId(n)),
            Raw::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(JobId)
                .map_err(|_| de::Error::custom(format!("invalid job id: {s:?}"))),
        }
    }
}
