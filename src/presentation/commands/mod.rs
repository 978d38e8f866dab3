use serde::Serialize;
use serde_json::Value;

use crate::presentation::dto::{ApiResponse, ApplicationFormDto, JobFormDto};
use crate::shared::AppError;
use crate::state::AppState;

/// Every operation the admin surface exposes. Front ends construct one of
/// these and hand it to [`dispatch`]; the handlers are never called directly,
/// so the create-or-update decision always goes through the edit session.
#[derive(Debug, Clone)]
pub enum AdminCommand {
    ListJobs,
    BeginEdit { id: i64 },
    SubmitJob(JobFormDto),
    CancelEdit,
    DeleteJob { id: i64 },
    SubmitApplication(ApplicationFormDto),
    CheckRemote,
}

pub async fn dispatch(state: &AppState, command: AdminCommand) -> ApiResponse<Value> {
    match command {
        AdminCommand::ListJobs => respond(state.job_handler.list_jobs().await),
        AdminCommand::BeginEdit { id } => respond(state.job_handler.begin_edit(id).await),
        AdminCommand::SubmitJob(form) => respond(state.job_handler.submit_job(form).await),
        AdminCommand::CancelEdit => respond(state.job_handler.cancel_edit().await),
        AdminCommand::DeleteJob { id } => respond(state.job_handler.delete_job(id).await),
        AdminCommand::SubmitApplication(form) => {
            respond(state.application_handler.submit(form).await)
        }
        AdminCommand::CheckRemote => respond(Ok(state.job_handler.check_remote().await)),
    }
}

fn respond<T: Serialize>(result: Result<T, AppError>) -> ApiResponse<Value> {
    let result = result.and_then(|value| serde_json::to_value(value).map_err(AppError::from));
    ApiResponse::from_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respond_flattens_ok_values_into_json() {
        let response = respond(Ok(vec!["a", "b"]));
        assert!(response.success);
        assert_eq!(response.data, Some(serde_json::json!(["a", "b"])));
    }

    #[test]
    fn respond_keeps_the_error_envelope() {
        let response: ApiResponse<Value> =
            respond::<Value>(Err(AppError::NotFound("No job with id 9".to_string())));
        assert!(!response.success);
        assert_eq!(response.error_code.as_deref(), Some("NOT_FOUND"));
    }
}
