use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

/// Grading lifecycle of a submission: `Pending` until a grader sets a mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum SubmissionStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    #[serde(alias = "pending")]
    Pending,

    #[sea_orm(string_value = "graded")]
    #[serde(alias = "graded")]
    Graded,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status_str = match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Graded => "graded",
        };
        write!(f, "{}", status_str)
    }
}

/// A user's submission for a course assignment.
///
/// At most one row exists per (`course_id`, `user_email`); the pair is backed
/// by a unique index. Both columns reference their owners by value only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assignment_submissions")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub course_id: String,
    pub user_email: String,
    pub assignment_name: String,
    pub assignment_link: String,
    /// 0 until graded.
    pub mark: i64,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a fresh `Pending` submission with mark 0.
    pub async fn create(
        db: &DatabaseConnection,
        course_id: &str,
        user_email: &str,
        assignment_name: &str,
        assignment_link: &str,
    ) -> Result<Self, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            course_id: Set(course_id.to_owned()),
            user_email: Set(user_email.to_owned()),
            assignment_name: Set(assignment_name.to_owned()),
            assignment_link: Set(assignment_link.to_owned()),
            mark: Set(0),
            status: Set(SubmissionStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id.to_owned()).one(db).await
    }

    pub async fn find_for(
        db: &DatabaseConnection,
        course_id: &str,
        user_email: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::UserEmail.eq(user_email))
            .one(db)
            .await
    }

    pub async fn count_for(
        db: &DatabaseConnection,
        course_id: &str,
        user_email: &str,
    ) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::UserEmail.eq(user_email))
            .count(db)
            .await
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().order_by_asc(Column::CreatedAt).all(db).await
    }

    /// Writes `mark` and `status` onto exactly the row with `id`.
    ///
    /// Returns `None` when no such row exists.
    pub async fn set_mark(
        db: &DatabaseConnection,
        id: &str,
        mark: i64,
        status: SubmissionStatus,
    ) -> Result<Option<Self>, DbErr> {
        let Some(existing) = Self::find_by_id(db, id).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        active.mark = Set(mark);
        active.status = Set(status);
        active.updated_at = Set(Utc::now());
        active.update(db).await.map(Some)
    }
}
