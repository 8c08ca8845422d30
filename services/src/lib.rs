//! Business rules on top of the record store.
//!
//! Each service owns a clone of the injected `DatabaseConnection`; the
//! clones share one pool, so services are cheap to build per request.

pub mod assignment_submission_service;
pub mod enrollment_service;
pub mod error;
pub mod user_service;

pub use error::{ServiceError, ServiceResult};
