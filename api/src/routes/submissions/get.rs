use axum::extract::State;
use db::models::assignment_submission;
use serde::Deserialize;
use services::assignment_submission_service::{AssignmentSubmissionService, SubmissionCheck};
use util::state::AppState;

use crate::extract::QueryParams;
use crate::response::{ApiResult, ok};

/// GET /submit-assignment
///
/// Every submission, oldest first. An empty table yields an empty list.
pub async fn list_submissions(State(state): State<AppState>) -> ApiResult<Vec<assignment_submission::Model>> {
    let all = AssignmentSubmissionService::new(state.db_clone()).list_all().await?;
    Ok(ok(all, "Submissions retrieved successfully"))
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionQuery {
    pub user_email: String,
    pub course_id: String,
}

/// GET /check-submission?userEmail&courseId
///
/// A missing submission is not an error:
///
/// ```json
/// { "success": true, "data": { "exists": false, "canSubmit": true }, "message": "..." }
/// ```
pub async fn check_submission(
    State(state): State<AppState>,
    QueryParams(q): QueryParams<SubmissionQuery>,
) -> ApiResult<SubmissionCheck> {
    let check = AssignmentSubmissionService::new(state.db_clone())
        .check_status(q.user_email.trim(), q.course_id.trim())
        .await?;

    Ok(ok(check, "Submission status retrieved"))
}
