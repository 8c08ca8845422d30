use chrono::{DateTime, Utc};
use db::models::user::{self, Role};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::info;

use crate::enrollment_service::EnrollmentService;
use crate::error::{ServiceError, ServiceResult, is_unique_violation, require};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
}

/// Profile fields a user may change. `None` leaves the field as is.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub photo_url: Option<String>,
}

/// User as exposed over the API, with enrollments folded in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub photo_url: Option<String>,
    pub enrolled_course_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct UserService {
    db: DatabaseConnection,
}

impl UserService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Signs up a new user with the `Student` role.
    pub async fn create(&self, req: NewUser) -> ServiceResult<UserProfile> {
        require("name", &req.name)?;
        require("email", &req.email)?;

        let created = user::Model::create(&self.db, req.name.trim(), req.email.trim(), req.photo_url.as_deref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ServiceError::Conflict("A user with this email already exists".into())
                } else {
                    e.into()
                }
            })?;

        info!(email = %created.email, "User created");
        self.profile(created).await
    }

    pub async fn find_by_email(&self, email: &str) -> ServiceResult<UserProfile> {
        let found = user::Model::find_by_email(&self.db, email)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".into()))?;
        self.profile(found).await
    }

    pub async fn list(&self) -> ServiceResult<Vec<UserProfile>> {
        let mut out = Vec::new();
        for u in user::Model::find_all(&self.db).await? {
            out.push(self.profile(u).await?);
        }
        Ok(out)
    }

    /// Applies a partial profile update to the user with `email`.
    pub async fn update_profile(&self, email: &str, update: ProfileUpdate) -> ServiceResult<UserProfile> {
        if update.name.is_none() && update.photo_url.is_none() {
            return Err(ServiceError::Validation("At least one field must be provided".into()));
        }
        if let Some(name) = &update.name {
            require("name", name)?;
        }

        let existing = user::Model::find_by_email(&self.db, email)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".into()))?;

        let updated = existing
            .update_profile(&self.db, update.name.as_deref().map(str::trim), update.photo_url.as_deref())
            .await?;

        info!(email, "User profile updated");
        self.profile(updated).await
    }

    async fn profile(&self, u: user::Model) -> ServiceResult<UserProfile> {
        let enrolled_course_ids = EnrollmentService::new(self.db.clone())
            .enrolled_course_ids(&u.email)
            .await?;

        Ok(UserProfile {
            id: u.id,
            role: u.effective_role(),
            name: u.name,
            email: u.email,
            photo_url: u.photo_url,
            enrolled_course_ids,
            created_at: u.created_at,
            updated_at: u.updated_at,
        })
    }
}
