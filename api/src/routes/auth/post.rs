use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::cookie::CookieJar;
use chrono::{DateTime, Utc};
use db::models::user::Role;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::auth::session::{cleared_session_cookie, issue_session, session_cookie};
use crate::extract::JsonBody;
use crate::response::{ApiError, ApiResponse, Empty};

#[derive(Debug, Deserialize, Validate)]
pub struct IssueTokenRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub email: String,
    pub role: Role,
    pub expires_at: DateTime<Utc>,
}

/// POST /jwt
///
/// Signs a 24-hour session for an existing user and sets it as the `token`
/// cookie (`HttpOnly`; `Secure` with `SameSite=None` in production,
/// `SameSite=Strict` elsewhere).
///
/// ### Request Body
/// ```json
/// { "email": "ada@example.com" }
/// ```
///
/// ### Responses
/// - `200 OK` + `Set-Cookie`
/// ```json
/// {
///   "success": true,
///   "data": { "email": "ada@example.com", "role": "Student", "expiresAt": "2026-01-02T10:00:00Z" },
///   "message": "Session issued"
/// }
/// ```
/// - `404 Not Found` if no user has this email
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(req): JsonBody<IssueTokenRequest>,
) -> Result<(StatusCode, CookieJar, Json<ApiResponse<SessionResponse>>), ApiError> {
    req.validate()?;

    let session = issue_session(state.db(), state.sessions(), req.email.trim()).await?;
    let jar = jar.add(session_cookie(session.token, state.cookie_policy()));

    let body = SessionResponse {
        email: session.email,
        role: session.role,
        expires_at: session.expires_at,
    };

    Ok((StatusCode::OK, jar, Json(ApiResponse::success(body, "Session issued"))))
}

/// POST /logout
///
/// Expires the `token` cookie. Always succeeds, with or without a session.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (StatusCode, CookieJar, Json<ApiResponse<Empty>>) {
    let jar = jar.add(cleared_session_cookie(state.cookie_policy()));
    (StatusCode::OK, jar, Json(ApiResponse::success(Empty, "Logged out")))
}
