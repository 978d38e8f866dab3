pub mod application_dto;
pub mod job_dto;

use serde::{Deserialize, Serialize};

use crate::shared::AppError;

pub use application_dto::ApplicationFormDto;
pub use job_dto::{ConnectivityReport, JobFormDto, JobView, MutationView};

/// Uniform envelope every dispatched command resolves to. Both stores
/// produce the same shape; failures carry a message and a stable code.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub error_code: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            error_code: None,
        }
    }

    pub fn from_app_error(error: AppError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
            error_code: Some(error.code().to_string()),
        }
    }

    pub fn from_result(result: crate::shared::Result<T>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::from_app_error(err),
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_carries_message_and_code() {
        let response: ApiResponse<()> =
            ApiResponse::from_app_error(AppError::MalformedInput("Job title is required".into()));
        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("Invalid input: Job title is required")
        );
        assert_eq!(response.error_code.as_deref(), Some("MALFORMED_INPUT"));
    }

    #[test]
    fn success_envelope_has_no_error_fields() {
        let response = ApiResponse::success(1);
        assert!(response.success);
        assert_eq!(response.data, Some(1));
        assert!(response.error.is_none());
        assert!(response.error_code.is_none());
    }
}
