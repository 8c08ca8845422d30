use axum::{Extension, extract::State};
use db::models::enrollment;
use serde::Deserialize;
use services::enrollment_service::EnrollmentService;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::extract::JsonBody;
use crate::response::{ApiError, ApiResult, ok};

/// Missing fields deserialize as empty and are rejected by the service with
/// a `400`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EnrollRequest {
    pub email: String,
    pub course_id: String,
}

/// POST /enroll
///
/// Students enroll themselves; admins may enroll anyone.
///
/// ### Request Body
/// ```json
/// { "email": "ada@example.com", "courseId": "2f1c..." }
/// ```
///
/// ### Responses
/// - `200 OK` with the enrollment record
/// - `400 Bad Request` if a field is missing or the user is already enrolled
/// - `403 Forbidden` when enrolling someone else without the `Admin` role
/// - `404 Not Found` if no user has this email
pub async fn enroll(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(req): JsonBody<EnrollRequest>,
) -> ApiResult<enrollment::Model> {
    let email = req.email.trim();
    if !email.is_empty() && !user.may_act_for(email) {
        return Err(ApiError::forbidden("You may only enroll yourself"));
    }

    let created = EnrollmentService::new(state.db_clone())
        .enroll(email, req.course_id.trim())
        .await?;

    Ok(ok(created, "Enrolled successfully"))
}
