//! # Enrollment Routes Module
//!
//! Every route here requires a valid session.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;
use get::{check_enrollment, my_classes};
use post::enroll;

pub mod get;
pub mod post;

/// - `POST /enroll` → `enroll`
/// - `GET /check-enrollment?email&courseId` → `check_enrollment`
/// - `GET /myclasses?email` → `my_classes`
pub fn enrollment_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/enroll", post(enroll))
        .route("/check-enrollment", get(check_enrollment))
        .route("/myclasses", get(my_classes))
        .route_layer(from_fn_with_state(app_state, allow_authenticated))
}
