//! Enrollment rules: a user is enrolled in a given course at most once.

use db::models::{course, enrollment, user};
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::error::{ServiceError, ServiceResult, is_unique_violation, require};

#[derive(Clone)]
pub struct EnrollmentService {
    db: DatabaseConnection,
}

impl EnrollmentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls `email` in `course_id`.
    ///
    /// The course id is not checked against the course table.
    ///
    /// # Errors
    /// - `Validation` if either input is blank.
    /// - `NotFound` if no user has this email.
    /// - `AlreadyEnrolled` if the pair already exists, including when a
    ///   concurrent call inserted it between our check and our write.
    pub async fn enroll(&self, email: &str, course_id: &str) -> ServiceResult<enrollment::Model> {
        require("email", email)?;
        require("courseId", course_id)?;

        self.require_user(email).await?;

        if enrollment::Model::exists(&self.db, email, course_id).await? {
            warn!(email, course_id, "Rejected duplicate enrollment");
            return Err(already_enrolled(email, course_id));
        }

        match enrollment::Model::create(&self.db, email, course_id).await {
            Ok(row) => {
                info!(email, course_id, "User enrolled");
                Ok(row)
            }
            Err(e) if is_unique_violation(&e) => {
                warn!(email, course_id, "Lost enrollment race; pair already present");
                Err(already_enrolled(email, course_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Membership test on the user's enrolled courses.
    pub async fn is_enrolled(&self, email: &str, course_id: &str) -> ServiceResult<bool> {
        require("email", email)?;
        require("courseId", course_id)?;

        self.require_user(email).await?;
        Ok(enrollment::Model::exists(&self.db, email, course_id).await?)
    }

    /// Ids of every course the user is enrolled in, in enrollment order.
    pub async fn enrolled_course_ids(&self, email: &str) -> ServiceResult<Vec<String>> {
        Ok(enrollment::Model::course_ids_for(&self.db, email).await?)
    }

    /// Resolves the user's enrollments to courses.
    ///
    /// Ids that match no course are dropped without error.
    pub async fn list_enrolled_courses(&self, email: &str) -> ServiceResult<Vec<course::Model>> {
        require("email", email)?;
        self.require_user(email).await?;

        let ids = self.enrolled_course_ids(email).await?;
        let courses = course::Model::find_by_ids(&self.db, &ids).await?;

        if courses.len() < ids.len() {
            warn!(
                email,
                dangling = ids.len() - courses.len(),
                "Skipped enrollments that reference unknown courses"
            );
        }
        Ok(courses)
    }

    async fn require_user(&self, email: &str) -> ServiceResult<user::Model> {
        user::Model::find_by_email(&self.db, email)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".into()))
    }
}

fn already_enrolled(email: &str, course_id: &str) -> ServiceError {
    ServiceError::AlreadyEnrolled {
        email: email.to_owned(),
        course_id: course_id.to_owned(),
    }
}
