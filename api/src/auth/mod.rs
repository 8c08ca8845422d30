//! Session auth gate.
//!
//! Sessions are stateless HS256 JWTs carried in the `token` cookie (or an
//! `Authorization: Bearer` header). `session` issues and verifies them,
//! `extractors` turns a request into an [`AuthUser`], `guards` are the
//! middleware layered onto route groups, and `middleware` holds request logging.

pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;
pub mod session;

pub use claims::{AuthUser, Claims};
pub use session::{AuthError, SESSION_COOKIE, issue_session, require_role, verify_session};
