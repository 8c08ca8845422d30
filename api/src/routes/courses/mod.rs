//! # Courses Routes Module
//!
//! Reading the catalogue is public; creating courses needs an `Admin` session.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use crate::auth::guards::allow_admin;
use get::{get_course, list_courses};
use post::create_course;

pub mod get;
pub mod post;

/// - `POST /courses` → `create_course` (admin only)
/// - `GET /courses` → `list_courses`
/// - `GET /courses/{id}` → `get_course`
pub fn course_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            post(create_course).route_layer(from_fn_with_state(app_state, allow_admin)),
        )
        .route("/courses", get(list_courses))
        .route("/courses/{id}", get(get_course))
}
