//! # Auth Routes Module
//!
//! Session issuance and teardown over the `token` cookie.
//!
//! - `post.rs`: `POST /jwt`, `POST /logout`
//! - `get.rs`: `GET /verify-token`

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;
use get::verify_token;
use post::{issue_token, logout};

pub mod get;
pub mod post;

/// - `POST /jwt` → `issue_token`
/// - `GET /verify-token` → `verify_token` (authenticated)
/// - `POST /logout` → `logout`
pub fn auth_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/jwt", post(issue_token))
        .route(
            "/verify-token",
            get(verify_token).route_layer(from_fn_with_state(app_state, allow_authenticated)),
        )
        .route("/logout", post(logout))
}
