use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub remote: RemoteConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Origin of the job site's API, without a trailing path.
    pub base_url: String,
    pub jobs_path: String,
    pub applications_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
    pub database_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig {
                base_url: "http://localhost:8888".to_string(),
                jobs_path: "/api/manageJobs".to_string(),
                applications_path: "/api/submitFreelance".to_string(),
            },
            storage: StorageConfig {
                data_dir: default_data_dir(),
                database_file: "jobdesk.db".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("JOBDESK_REMOTE_URL") {
            if !v.trim().is_empty() {
                cfg.remote.base_url = v.trim().to_string();
            }
        }
        if let Ok(v) = std::env::var("JOBDESK_JOBS_PATH") {
            if !v.trim().is_empty() {
                cfg.remote.jobs_path = v.trim().to_string();
            }
        }
        if let Ok(v) = std::env::var("JOBDESK_APPLICATIONS_PATH") {
            if !v.trim().is_empty() {
                cfg.remote.applications_path = v.trim().to_string();
            }
        }
        if let Ok(v) = std::env::var("JOBDESK_DATA_DIR") {
            if !v.trim().is_empty() {
                cfg.storage.data_dir = v.trim().to_string();
            }
        }
        if let Ok(v) = std::env::var("JOBDESK_DATABASE_FILE") {
            if !v.trim().is_empty() {
                cfg.storage.database_file = v.trim().to_string();
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.remote.base_url.starts_with("http://") && !self.remote.base_url.starts_with("https://")
        {
            return Err("Remote base_url must start with http:// or https://".to_string());
        }
        if !self.remote.jobs_path.starts_with('/') {
            return Err("Remote jobs_path must start with '/'".to_string());
        }
        if !self.remote.applications_path.starts_with('/') {
            return Err("Remote applications_path must start with '/'".to_string());
        }
        if self.storage.data_dir.trim().is_empty() {
            return Err("Storage data_dir must not be empty".to_string());
        }
        if self.storage.database_file.trim().is_empty() {
            return Err("Storage database_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl RemoteConfig {
    pub fn jobs_endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.jobs_path)
    }

    pub fn applications_endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.applications_path
        )
    }
}

impl StorageConfig {
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.database_file)
    }
}

fn default_data_dir() -> String {
    dirs::data_dir()
        .map(|p| p.join("jobdesk"))
        .unwrap_or_else(|| PathBuf::from("./data"))
        .to_string_lossy()
        .to_string()
}
