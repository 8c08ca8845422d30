//! Route guards, applied with `from_fn_with_state` as route layers.
//!
//! Each guard verifies the session, stores the resulting [`AuthUser`] in the
//! request extensions for handlers, and short-circuits with the auth error
//! envelope otherwise.

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use db::models::user::Role;
use util::state::AppState;

use crate::auth::claims::AuthUser;
use crate::auth::session::{AuthError, ensure_role};

/// Verifies the session and inserts the `AuthUser` back into the request.
async fn extract_and_insert_authuser(
    state: &AppState,
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), AuthError> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, state).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Basic guard to ensure the request carries a valid session.
pub async fn allow_authenticated(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let (req, _user) = extract_and_insert_authuser(&state, req).await?;
    Ok(next.run(req).await)
}

/// Admin-only guard.
pub async fn allow_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let (req, user) = extract_and_insert_authuser(&state, req).await?;

    if let Err(e) = ensure_role(&user.0, Role::Admin) {
        tracing::warn!(email = user.email(), path = %req.uri().path(), "Admin route denied");
        return Err(e);
    }

    Ok(next.run(req).await)
}
