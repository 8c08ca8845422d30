use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A course offered on the platform. Content fields are opaque to the
/// enrollment and submission rules.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields supplied when a course is created; the id is generated.
#[derive(Debug, Clone, Default)]
pub struct NewCourse {
    pub title: String,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<f64>,
}

impl Model {
    pub async fn create(db: &DatabaseConnection, course: NewCourse) -> Result<Self, DbErr> {
        ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            title: Set(course.title),
            description: Set(course.description),
            instructor: Set(course.instructor),
            image_url: Set(course.image_url),
            price: Set(course.price),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().order_by_asc(Column::CreatedAt).all(db).await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id.to_owned()).one(db).await
    }

    /// Resolves ids to courses in the order given. Unknown ids are skipped.
    pub async fn find_by_ids(db: &DatabaseConnection, ids: &[String]) -> Result<Vec<Self>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut by_id: HashMap<String, Self> = Entity::find()
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();

        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }
}
