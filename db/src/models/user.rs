use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

/// Platform-wide role carried in the session credential.
///
/// Stored as its variant name; a `NULL` column reads as [`Role::Student`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Role {
    #[default]
    #[sea_orm(string_value = "Student")]
    #[serde(alias = "student")]
    Student,

    #[sea_orm(string_value = "Admin")]
    #[serde(alias = "admin")]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a user in the `users` table. Identity is the email address.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// Unique, compared case-sensitively as stored.
    #[sea_orm(unique)]
    pub email: String,
    pub role: Option<Role>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new user with the default `Student` role.
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        email: &str,
        photo_url: Option<&str>,
    ) -> Result<Self, DbErr> {
        let now = Utc::now();
        ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            role: Set(Some(Role::Student)),
            photo_url: Set(photo_url.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Self>, DbErr> {
        Entity::find().filter(Column::Email.eq(email)).one(db).await
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }

    /// Role used for authorization decisions.
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or_default()
    }

    /// Overwrites the profile fields that are `Some`, bumping `updated_at`.
    pub async fn update_profile(
        self,
        db: &DatabaseConnection,
        name: Option<&str>,
        photo_url: Option<&str>,
    ) -> Result<Self, DbErr> {
        let mut active: ActiveModel = self.into();
        if let Some(name) = name {
            active.name = Set(name.to_owned());
        }
        if let Some(photo_url) = photo_url {
            active.photo_url = Set(Some(photo_url.to_owned()));
        }
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }
}
