use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::{TypedHeader, cookie::CookieJar};
use headers::{Authorization, authorization::Bearer};
use util::state::AppState;

use crate::auth::claims::AuthUser;
use crate::auth::session::{AuthError, SESSION_COOKIE, verify_session};

/// Extracts a verified `AuthUser` from the request.
///
/// The session token is read from the `token` cookie, falling back to an
/// `Authorization: Bearer` header.
///
/// # Errors
/// - `401 Unauthorized` if neither carries a token.
/// - `403 Forbidden` if the token's signature or expiry check fails.
///
/// # Example
/// ```ignore
/// async fn protected_route(user: AuthUser) -> impl IntoResponse {
///     // User is now available
/// }
/// ```
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = session_token(parts, state).await;
        verify_session(state.sessions(), token.as_deref()).map(AuthUser)
    }
}

/// Raw session token presented with the request, if any.
async fn session_token(parts: &mut Parts, state: &AppState) -> Option<String> {
    let from_cookie = CookieJar::from_headers(&parts.headers)
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty());

    if from_cookie.is_some() {
        return from_cookie;
    }

    TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
        .await
        .ok()
        .map(|TypedHeader(Authorization(bearer))| bearer.token().to_owned())
}
