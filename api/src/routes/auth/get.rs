use axum::Extension;
use db::models::user::Role;
use serde::Serialize;

use crate::auth::AuthUser;
use crate::response::{ApiResult, ok};

#[derive(Debug, Serialize)]
pub struct VerifiedSession {
    pub email: String,
    pub role: Role,
}

/// GET /verify-token
///
/// Echoes the identity carried by the presented session.
///
/// ### Responses
/// - `200 OK` with `{ "email": ..., "role": ... }`
/// - `401 Unauthorized` with no session
/// - `403 Forbidden` for a tampered or expired session
pub async fn verify_token(Extension(AuthUser(claims)): Extension<AuthUser>) -> ApiResult<VerifiedSession> {
    Ok(ok(
        VerifiedSession {
            email: claims.sub,
            role: claims.role,
        },
        "Session is valid",
    ))
}
