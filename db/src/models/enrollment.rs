use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::Serialize;

/// One row per (user, course) enrollment; the pair is unique.
///
/// `course_id` is a weak reference: nothing checks that the course exists.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "enrollments")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_email: String,
    pub course_id: String,
    pub enrolled_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserEmail",
        to = "super::user::Column::Email",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        user_email: &str,
        course_id: &str,
    ) -> Result<Self, DbErr> {
        ActiveModel {
            user_email: Set(user_email.to_owned()),
            course_id: Set(course_id.to_owned()),
            enrolled_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn exists(
        db: &DatabaseConnection,
        user_email: &str,
        course_id: &str,
    ) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::UserEmail.eq(user_email))
            .filter(Column::CourseId.eq(course_id))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    /// Course ids for a user, in enrollment order.
    pub async fn course_ids_for(db: &DatabaseConnection, user_email: &str) -> Result<Vec<String>, DbErr> {
        Ok(Entity::find()
            .filter(Column::UserEmail.eq(user_email))
            .order_by_asc(Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(|e| e.course_id)
            .collect())
    }
}
