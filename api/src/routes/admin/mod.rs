//! # Admin Routes Module
//!
//! The admin directory. Every method requires an `Admin` session.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use crate::auth::guards::allow_admin;
use get::list_admins;
use post::create_admin;

pub mod get;
pub mod post;

/// - `POST /admin` → `create_admin`
/// - `GET /admin` → `list_admins`
pub fn admin_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/admin", post(create_admin))
        .route("/admin", get(list_admins))
        .route_layer(from_fn_with_state(app_state, allow_admin))
}
