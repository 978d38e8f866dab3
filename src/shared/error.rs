use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Remote store unavailable: {message}")]
    RemoteUnavailable {
        status: Option<u16>,
        message: String,
    },

    #[error("Invalid input: {0}")]
    MalformedInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Remote failure without an HTTP status (transport error, bad body).
    pub fn remote(message: impl Into<String>) -> Self {
        AppError::RemoteUnavailable {
            status: None,
            message: message.into(),
        }
    }

    pub fn remote_status(status: u16, message: impl Into<String>) -> Self {
        AppError::RemoteUnavailable {
            status: Some(status),
            message: message.into(),
        }
    }

    /// True for every failure that triggers the local fallback path.
    pub fn is_remote_unavailable(&self) -> bool {
        matches!(self, AppError::RemoteUnavailable { .. })
    }

    /// Stable machine-readable code for the UI layer.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::RemoteUnavailable { .. } => "REMOTE_UNAVAILABLE",
            AppError::MalformedInput(_) => "MALFORMED_INPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Storage(_) => "STORAGE",
            AppError::Serialization(_) => "SERIALIZATION",
            AppError::Config(_) => "CONFIG",
            AppError::Internal(_) => "INTERNAL",
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::RemoteUnavailable {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_errors_trigger_fallback() {
        assert!(AppError::remote("connection refused").is_remote_unavailable());
        assert!(AppError::remote_status(500, "boom").is_remote_unavailable());
        assert!(!AppError::NotFound("job 7".into()).is_remote_unavailable());
    }

    #[test]
    fn display_includes_message() {
        let err = AppError::remote_status(503, "service down");
        assert_eq!(err.to_string(), "Remote store unavailable: service down");
    }
}
