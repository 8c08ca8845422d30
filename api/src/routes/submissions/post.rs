use axum::{Extension, extract::State};
use db::models::assignment_submission;
use serde::Deserialize;
use services::assignment_submission_service::{AssignmentSubmissionService, NewSubmission};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::extract::JsonBody;
use crate::response::{ApiError, ApiResult, ok};

/// Only `courseId` and `userEmail` are required; name and link are stored
/// as given.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitAssignmentRequest {
    pub course_id: String,
    pub user_email: String,
    pub assignment_name: String,
    pub assignment_link: String,
}

/// POST /submit-assignment
///
/// Students submit for themselves; admins may submit on anyone's behalf.
///
/// ### Request Body
/// ```json
/// {
///   "courseId": "2f1c...",
///   "userEmail": "ada@example.com",
///   "assignmentName": "Week 1",
///   "assignmentLink": "https://github.com/ada/week1"
/// }
/// ```
///
/// ### Responses
/// - `200 OK` with the new `Pending` submission
/// - `400 Bad Request` if `courseId` or `userEmail` is missing, or if this
///   user already submitted for this course
/// - `403 Forbidden` when submitting for someone else without the `Admin` role
pub async fn submit_assignment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(req): JsonBody<SubmitAssignmentRequest>,
) -> ApiResult<assignment_submission::Model> {
    let user_email = req.user_email.trim();
    if !user_email.is_empty() && !user.may_act_for(user_email) {
        return Err(ApiError::forbidden("You may only submit your own assignments"));
    }

    let created = AssignmentSubmissionService::new(state.db_clone())
        .submit(NewSubmission {
            course_id: req.course_id.trim().to_owned(),
            user_email: user_email.to_owned(),
            assignment_name: req.assignment_name,
            assignment_link: req.assignment_link,
        })
        .await?;

    Ok(ok(created, "Assignment submitted successfully"))
}
