//! Application state container shared across axum route handlers and services.
//!
//! Holds the long-lived database handle and the session signing keys. It is
//! cloned into every handler through axum's `State<T>` extractor; the clones
//! share the underlying connection pool.

use jsonwebtoken::{DecodingKey, EncodingKey};
use sea_orm::DatabaseConnection;

/// HMAC keys used to sign and verify session credentials.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// How the session cookie is flagged when it is set or cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CookiePolicy {
    /// `Secure; SameSite=None`, for cross-site production frontends.
    CrossSiteSecure,
    /// `SameSite=Strict` without `Secure`, for local development over http.
    #[default]
    SameSiteStrict,
}

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    sessions: SessionKeys,
    cookie_policy: CookiePolicy,
}

impl AppState {
    /// Creates a new `AppState` from an already connected database handle.
    ///
    /// # Arguments
    ///
    /// * `db` - SeaORM connection, acquired once at process start.
    /// * `sessions` - Keys for issuing and verifying session tokens.
    /// * `cookie_policy` - Flags applied to the session cookie.
    pub fn new(db: DatabaseConnection, sessions: SessionKeys, cookie_policy: CookiePolicy) -> Self {
        Self {
            db,
            sessions,
            cookie_policy,
        }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a cloned copy of the database connection.
    ///
    /// Useful for services that take ownership of their handle.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }

    pub fn sessions(&self) -> &SessionKeys {
        &self.sessions
    }

    pub fn cookie_policy(&self) -> CookiePolicy {
        self.cookie_policy
    }
}
