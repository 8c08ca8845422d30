use axum::extract::{Path, State};
use db::models::course;
use util::state::AppState;

use crate::response::{ApiError, ApiResult, ok};

/// GET /courses
pub async fn list_courses(State(state): State<AppState>) -> ApiResult<Vec<course::Model>> {
    let courses = course::Model::find_all(state.db()).await?;
    Ok(ok(courses, "Courses retrieved successfully"))
}

/// GET /courses/{id}
///
/// ### Responses
/// - `200 OK` with the course
/// - `404 Not Found` if no course has this id
pub async fn get_course(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<course::Model> {
    let found = course::Model::find_by_id(state.db(), &id)
        .await?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;
    Ok(ok(found, "Course retrieved successfully"))
}
