use axum::extract::{Path, State};
use db::models::assignment_submission::{self, SubmissionStatus};
use serde::Deserialize;
use services::assignment_submission_service::AssignmentSubmissionService;
use util::state::AppState;

use crate::extract::JsonBody;
use crate::response::{ApiResult, ok};

#[derive(Debug, Deserialize)]
pub struct SetMarkRequest {
    pub mark: i64,
    /// Defaults to `Graded` when omitted.
    #[serde(default)]
    pub status: Option<SubmissionStatus>,
}

/// PUT /set-mark/assignment/{id}
///
/// ### Request Body
/// ```json
/// { "mark": 85, "status": "graded" }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated submission
/// - `404 Not Found` if no submission has this id
pub async fn set_mark(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<SetMarkRequest>,
) -> ApiResult<assignment_submission::Model> {
    let status = req.status.unwrap_or(SubmissionStatus::Graded);

    let updated = AssignmentSubmissionService::new(state.db_clone())
        .grade(&id, req.mark, status)
        .await?;

    Ok(ok(updated, "Mark updated successfully"))
}
