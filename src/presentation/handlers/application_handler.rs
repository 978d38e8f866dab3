use std::sync::Arc;

use crate::application::services::FreelanceServiceTrait;
use crate::presentation::dto::{ApplicationFormDto, Validate};
use crate::shared::AppError;

/// Candidate-facing handler for the freelance application form.
pub struct ApplicationHandler {
    freelance_service: Arc<dyn FreelanceServiceTrait>,
}

impl ApplicationHandler {
    pub fn new(freelance_service: Arc<dyn FreelanceServiceTrait>) -> Self {
        Self { freelance_service }
    }

    pub async fn submit(&self, form: ApplicationFormDto) -> Result<String, AppError> {
        form.validate().map_err(AppError::MalformedInput)?;
        self.freelance_service.submit(form.into_application()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FreelanceApplication;
    use async_trait::async_trait;

    struct AcceptingService;

    #[async_trait]
    impl FreelanceServiceTrait for AcceptingService {
        async fn submit(&self, application: FreelanceApplication) -> Result<String, AppError> {
            Ok(format!("Received application from {}", application.name))
        }
    }

    #[tokio::test]
    async fn valid_form_reaches_the_service() {
        let handler = ApplicationHandler::new(Arc::new(AcceptingService));
        let form = ApplicationFormDto {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };

        let message = handler.submit(form).await.unwrap();
        assert_eq!(message, "Received application from Ada");
    }

    #[tokio::test]
    async fn blank_name_is_rejected_in_the_handler() {
        let handler = ApplicationHandler::new(Arc::new(AcceptingService));
        let form = ApplicationFormDto {
            name: String::new(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };

        let err = handler.submit(form).await.unwrap_err();
        assert!(matches!(err, AppError::MalformedInput(_)));
    }
}
