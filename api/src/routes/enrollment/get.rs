use axum::extract::State;
use db::models::course;
use serde::{Deserialize, Serialize};
use services::enrollment_service::EnrollmentService;
use util::state::AppState;

use crate::extract::QueryParams;
use crate::response::{ApiResult, ok};

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EnrollmentQuery {
    pub email: String,
    pub course_id: String,
}

#[derive(Debug, Serialize)]
pub struct EnrollmentStatus {
    pub enrolled: bool,
}

/// GET /check-enrollment?email&courseId
///
/// ### Responses
/// - `200 OK` with `{ "enrolled": bool }`
/// - `400 Bad Request` if a parameter is missing
/// - `404 Not Found` if no user has this email
pub async fn check_enrollment(
    State(state): State<AppState>,
    QueryParams(q): QueryParams<EnrollmentQuery>,
) -> ApiResult<EnrollmentStatus> {
    let enrolled = EnrollmentService::new(state.db_clone())
        .is_enrolled(q.email.trim(), q.course_id.trim())
        .await?;

    Ok(ok(EnrollmentStatus { enrolled }, "Enrollment status retrieved"))
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct MyClassesQuery {
    pub email: String,
}

/// GET /myclasses?email
///
/// Courses the user is enrolled in. Enrollments pointing at unknown courses
/// are left out.
pub async fn my_classes(
    State(state): State<AppState>,
    QueryParams(q): QueryParams<MyClassesQuery>,
) -> ApiResult<Vec<course::Model>> {
    let courses = EnrollmentService::new(state.db_clone())
        .list_enrolled_courses(q.email.trim())
        .await?;

    Ok(ok(courses, "Enrolled courses retrieved"))
}
