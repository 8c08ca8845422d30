//! Assignment submissions and grading.
//!
//! Per (course, user) pair a submission moves `Absent -> Pending -> Graded`.
//! Only `submit` creates rows and only `grade` mutates them; nothing here
//! deletes a submission or moves it back to `Pending`.

use db::models::assignment_submission::{self, SubmissionStatus};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{ServiceError, ServiceResult, is_unique_violation, require};

/// Input for [`AssignmentSubmissionService::submit`].
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub course_id: String,
    pub user_email: String,
    pub assignment_name: String,
    pub assignment_link: String,
}

/// Answer to "has this user submitted for this course, and may they submit?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionCheck {
    pub exists: bool,
    pub can_submit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<i64>,
}

#[derive(Clone)]
pub struct AssignmentSubmissionService {
    db: DatabaseConnection,
}

impl AssignmentSubmissionService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new `Pending` submission with mark 0.
    ///
    /// Any existing row for the pair, graded or not, blocks the call.
    ///
    /// # Errors
    /// - `Validation` if `course_id` or `user_email` is blank.
    /// - `DuplicateSubmission` if the pair already has a row, including when
    ///   a concurrent call won the insert.
    pub async fn submit(&self, req: NewSubmission) -> ServiceResult<assignment_submission::Model> {
        require("courseId", &req.course_id)?;
        require("userEmail", &req.user_email)?;

        let existing = assignment_submission::Model::find_for(&self.db, &req.course_id, &req.user_email).await?;
        if existing.is_some() {
            warn!(course_id = %req.course_id, user_email = %req.user_email, "Rejected duplicate submission");
            return Err(duplicate(&req));
        }

        match assignment_submission::Model::create(
            &self.db,
            &req.course_id,
            &req.user_email,
            &req.assignment_name,
            &req.assignment_link,
        )
        .await
        {
            Ok(row) => {
                info!(id = %row.id, course_id = %row.course_id, user_email = %row.user_email, "Assignment submitted");
                Ok(row)
            }
            Err(e) if is_unique_violation(&e) => {
                warn!(course_id = %req.course_id, user_email = %req.user_email, "Lost submission race; pair already present");
                Err(duplicate(&req))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Reports whether a submission exists for the pair.
    ///
    /// `can_submit` is true when nothing exists or the stored mark is 0. A
    /// submission graded with an explicit 0 is therefore reported exactly
    /// like an ungraded one.
    pub async fn check_status(&self, user_email: &str, course_id: &str) -> ServiceResult<SubmissionCheck> {
        let Some(row) = assignment_submission::Model::find_for(&self.db, course_id, user_email).await? else {
            return Ok(SubmissionCheck {
                exists: false,
                can_submit: true,
                ..Default::default()
            });
        };

        Ok(SubmissionCheck {
            exists: true,
            can_submit: row.mark == 0,
            assignment_link: Some(row.assignment_link),
            mark: Some(row.mark),
        })
    }

    /// Sets `mark` and `status` on the submission with `id`.
    ///
    /// No range check is applied to `mark`.
    pub async fn grade(
        &self,
        id: &str,
        mark: i64,
        status: SubmissionStatus,
    ) -> ServiceResult<assignment_submission::Model> {
        require("id", id)?;

        let updated = assignment_submission::Model::set_mark(&self.db, id, mark, status)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Submission not found".into()))?;

        info!(id, mark, status = %status, "Submission graded");
        Ok(updated)
    }

    /// Every submission, oldest first.
    pub async fn list_all(&self) -> ServiceResult<Vec<assignment_submission::Model>> {
        Ok(assignment_submission::Model::find_all(&self.db).await?)
    }
}

fn duplicate(req: &NewSubmission) -> ServiceError {
    ServiceError::DuplicateSubmission {
        course_id: req.course_id.clone(),
        user_email: req.user_email.clone(),
    }
}
