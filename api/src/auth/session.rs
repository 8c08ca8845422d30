use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, Duration, Utc};
use db::models::user::{self, Role};
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};
use sea_orm::{DatabaseConnection, DbErr};
use util::state::{CookiePolicy, SessionKeys};

use crate::auth::claims::Claims;
use crate::response::ApiError;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// Sessions are valid for a fixed 24 hours after issuance.
pub const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("{0}")]
    Forbidden(String),

    #[error("User not found")]
    UnknownUser,

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Token encoding failed: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden(_) => StatusCode::FORBIDDEN,
            AuthError::UnknownUser => StatusCode::NOT_FOUND,
            AuthError::Database(_) | AuthError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let status = err.status();
        if status.is_server_error() {
            tracing::error!(error = %err, "Session handling failed");
            return ApiError::new(status, "Internal server error");
        }
        ApiError::new(status, err.to_string())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

/// A freshly signed session credential.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub email: String,
    pub role: Role,
    pub expires_at: DateTime<Utc>,
}

/// Builds the claims for a session starting at `now`.
pub fn claims_for(email: &str, role: Role, now: DateTime<Utc>) -> Claims {
    Claims {
        sub: email.to_owned(),
        role,
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(SESSION_TTL_HOURS)).timestamp() as usize,
    }
}

pub fn encode_claims(keys: &SessionKeys, claims: &Claims) -> Result<String, AuthError> {
    Ok(encode(&Header::new(Algorithm::HS256), claims, keys.encoding_key())?)
}

/// Signs a 24-hour session for the user with `email`.
///
/// A user without a stored role is issued a `Student` session.
///
/// # Errors
/// - `UnknownUser` if no user has this email.
pub async fn issue_session(
    db: &DatabaseConnection,
    keys: &SessionKeys,
    email: &str,
) -> Result<IssuedSession, AuthError> {
    let found = user::Model::find_by_email(db, email)
        .await?
        .ok_or(AuthError::UnknownUser)?;

    let now = Utc::now();
    let claims = claims_for(&found.email, found.effective_role(), now);
    let token = encode_claims(keys, &claims)?;

    tracing::info!(email = %found.email, role = %claims.role, "Session issued");

    Ok(IssuedSession {
        token,
        email: found.email,
        role: claims.role,
        expires_at: now + Duration::hours(SESSION_TTL_HOURS),
    })
}

/// Checks signature and expiry of a presented credential.
///
/// # Errors
/// - `Unauthenticated` if no (or an empty) credential was presented.
/// - `Forbidden` if the signature or expiry check fails.
pub fn verify_session(keys: &SessionKeys, credential: Option<&str>) -> Result<Claims, AuthError> {
    let token = credential
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::Unauthenticated)?;

    decode::<Claims>(token, keys.decoding_key(), &Validation::new(Algorithm::HS256))
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "Rejected session credential");
            AuthError::Forbidden("Invalid or expired token".into())
        })
}

/// `verify_session` plus a role match.
pub fn require_role(keys: &SessionKeys, credential: Option<&str>, role: Role) -> Result<Claims, AuthError> {
    let claims = verify_session(keys, credential)?;
    ensure_role(&claims, role)?;
    Ok(claims)
}

/// Fails with `Forbidden` unless the verified claims carry `role`.
pub fn ensure_role(claims: &Claims, role: Role) -> Result<(), AuthError> {
    if claims.role == role {
        Ok(())
    } else {
        Err(AuthError::Forbidden(format!("{role} access required")))
    }
}

/// Session cookie carrying `token`, flagged per `policy`.
pub fn session_cookie(token: String, policy: CookiePolicy) -> Cookie<'static> {
    with_policy(Cookie::new(SESSION_COOKIE, token), policy)
}

/// Cookie value that instructs the browser to drop the session.
pub fn cleared_session_cookie(policy: CookiePolicy) -> Cookie<'static> {
    let mut cookie = with_policy(Cookie::new(SESSION_COOKIE, ""), policy);
    cookie.make_removal();
    cookie
}

fn with_policy(mut cookie: Cookie<'static>, policy: CookiePolicy) -> Cookie<'static> {
    cookie.set_http_only(true);
    cookie.set_path("/");
    match policy {
        CookiePolicy::CrossSiteSecure => {
            cookie.set_secure(true);
            cookie.set_same_site(SameSite::None);
        }
        CookiePolicy::SameSiteStrict => {
            cookie.set_secure(false);
            cookie.set_same_site(SameSite::Strict);
        }
    }
    cookie
}
