//! HTTP route entry point.
//!
//! Routes are organized by domain and mounted at the root:
//! - `/health` → liveness check (public)
//! - `/users`, `/user/update/{email}` → signup, lookup and profile updates
//! - `/admin` → admin directory (admin only)
//! - `/courses` → course catalogue
//! - `/enroll`, `/check-enrollment`, `/myclasses` → enrollment
//! - `/submit-assignment`, `/check-submission`, `/set-mark/assignment/{id}` → submissions and grading
//! - `/jwt`, `/verify-token`, `/logout` → session cookie handling
//!
//! Guards are attached per method with `route_layer`, so a single path may
//! mix public, authenticated and admin-only methods.

use axum::Router;
use util::state::AppState;

use crate::routes::{
    admin::admin_routes, auth::auth_routes, courses::course_routes, enrollment::enrollment_routes,
    health::health_routes, submissions::submission_routes, users::users_routes,
};

pub mod admin;
pub mod auth;
pub mod courses;
pub mod enrollment;
pub mod health;
pub mod submissions;
pub mod users;

/// Builds the complete application router with `app_state` applied.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(users_routes(app_state.clone()))
        .merge(admin_routes(app_state.clone()))
        .merge(course_routes(app_state.clone()))
        .merge(enrollment_routes(app_state.clone()))
        .merge(submission_routes(app_state.clone()))
        .merge(auth_routes(app_state.clone()))
        .with_state(app_state)
}
