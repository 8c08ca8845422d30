use db::models::user::Role;
use serde::{Deserialize, Serialize};

/// JWT payload. `sub` is the user's email.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iat: usize,
    pub exp: usize,
}

/// Verified caller identity, available to handlers behind a guard.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn email(&self) -> &str {
        &self.0.sub
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn is_admin(&self) -> bool {
        self.0.role == Role::Admin
    }

    /// Whether the caller may read or write records owned by `email`:
    /// their own, or anyone's for an admin.
    pub fn may_act_for(&self, email: &str) -> bool {
        self.is_admin() || self.email() == email
    }
}
