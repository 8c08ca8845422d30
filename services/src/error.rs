use sea_orm::{DbErr, SqlErr};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures raised by the enrollment, submission and user services.
///
/// Everything except `Database` is a client error and is reported back with
/// its message; `Database` covers connectivity, timeouts and unexpected
/// persistence faults.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("User {email} is already enrolled in course {course_id}")]
    AlreadyEnrolled { email: String, course_id: String },

    #[error("An assignment has already been submitted by {user_email} for course {course_id}")]
    DuplicateSubmission {
        course_id: String,
        user_email: String,
    },

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl ServiceError {
    /// True for errors caused by the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ServiceError::Database(_))
    }
}

/// Detects a rejected write caused by a UNIQUE index or constraint.
pub fn is_unique_violation(err: &DbErr) -> bool {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return true;
    }
    err.to_string().contains("UNIQUE constraint failed")
}

/// Rejects blank required inputs with a `Validation` error.
pub(crate) fn require(field: &str, value: &str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::Validation(format!("{field} is required")));
    }
    Ok(())
}
