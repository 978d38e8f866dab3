use async_trait::async_trait;

use crate::domain::entities::FreelanceApplication;
use crate::shared::error::AppError;

/// Submission endpoint for freelance applications. Remote-only: there is no
/// mirror to fall back to, so failures surface to the caller.
#[async_trait]
pub trait ApplicationGateway: Send + Sync {
    /// Submit one application; returns the server's confirmation message.
    async fn submit(&self, application: &FreelanceApplication) -> Result<String, AppError>;
}
