use api::auth::session::{claims_for, encode_claims};
use api::routes::routes;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use chrono::Utc;
use db::models::user::Role;
use db::test_utils::setup_test_db;
use serde_json::Value;
use util::state::{AppState, CookiePolicy, SessionKeys};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Router over a fresh in-memory database, plus the state it was built with.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let state = AppState::new(db, SessionKeys::from_secret(TEST_SECRET), CookiePolicy::SameSiteStrict);
    (routes(state.clone()), state)
}

/// A valid session token for `email` with `role`, signed with the test key.
pub fn token_for(email: &str, role: Role) -> String {
    let claims = claims_for(email, role, Utc::now());
    encode_claims(&SessionKeys::from_secret(TEST_SECRET), &claims).unwrap()
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// JSON request with an optional bearer token.
pub fn send_json(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(t));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Bodiless GET with an optional bearer token.
pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(t));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
