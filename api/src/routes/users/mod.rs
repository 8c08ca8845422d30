//! # Users Routes Module
//!
//! - `post.rs`: signup
//! - `get.rs`: list users or fetch one by email
//! - `put.rs`: profile updates
//!
//! Signup and lookup are public; profile updates need a session.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;
use get::get_users;
use post::create_user;
use put::update_user;

pub mod get;
pub mod post;
pub mod put;

/// - `POST /users` → `create_user`
/// - `GET /users[?email=]` → `get_users`
/// - `PUT /user/update/{email}` → `update_user` (authenticated)
pub fn users_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users", get(get_users))
        .route(
            "/user/update/{email}",
            put(update_user).route_layer(from_fn_with_state(app_state, allow_authenticated)),
        )
}
