use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::application::ports::ApplicationGateway;
use crate::domain::entities::FreelanceApplication;
use crate::shared::error::AppError;

#[async_trait]
pub trait FreelanceServiceTrait: Send + Sync {
    /// Validate and submit one application. A missing name or email fails
    /// with `MalformedInput` before any network call; remote failures
    /// surface to the caller since applications have no local fallback.
    async fn submit(&self, application: FreelanceApplication) -> Result<String, AppError>;
}

pub struct FreelanceService {
    gateway: Arc<dyn ApplicationGateway>,
}

impl FreelanceService {
    pub fn new(gateway: Arc<dyn ApplicationGateway>) -> Self {
        Self { gateway }
    }

    fn validate(application: &FreelanceApplication) -> Result<(), AppError> {
        if application.name.trim().is_empty() || application.email.trim().is_empty() {
            return Err(AppError::MalformedInput(
                "Name and Email are required.".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl FreelanceServiceTrait for FreelanceService {
    async fn submit(&self, application: FreelanceApplication) -> Result<String, AppError> {
        Self::validate(&application)?;
        let message = self.gateway.submit(&application).await?;
        info!("Freelance application submitted for {}", application.name);
        Ok(message)
    }
}
