//! # Submission Routes Module
//!
//! Students submit and check their own status with any valid session;
//! listing and grading need an `Admin` session.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use util::state::AppState;

use crate::auth::guards::{allow_admin, allow_authenticated};
use get::{check_submission, list_submissions};
use post::submit_assignment;
use put::set_mark;

pub mod get;
pub mod post;
pub mod put;

/// - `POST /submit-assignment` → `submit_assignment` (authenticated)
/// - `GET /submit-assignment` → `list_submissions` (admin only)
/// - `GET /check-submission?userEmail&courseId` → `check_submission` (authenticated)
/// - `PUT /set-mark/assignment/{id}` → `set_mark` (admin only)
pub fn submission_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/submit-assignment",
            post(submit_assignment).route_layer(from_fn_with_state(app_state.clone(), allow_authenticated)),
        )
        .route(
            "/submit-assignment",
            get(list_submissions).route_layer(from_fn_with_state(app_state.clone(), allow_admin)),
        )
        .route(
            "/check-submission",
            get(check_submission).route_layer(from_fn_with_state(app_state.clone(), allow_authenticated)),
        )
        .route(
            "/set-mark/assignment/{id}",
            put(set_mark).route_layer(from_fn_with_state(app_state, allow_admin)),
        )
}
