use axum::{extract::State, http::StatusCode};
use db::models::admin;
use serde::Deserialize;
use services::error::is_unique_violation;
use util::state::AppState;
use validator::Validate;

use crate::extract::JsonBody;
use crate::response::{ApiError, ApiResult, ok};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAdminRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// POST /admin
///
/// Adds an entry to the admin directory. This does not change any user's
/// role.
///
/// ### Responses
/// - `200 OK` with the stored record
/// - `400 Bad Request` on validation failure
/// - `409 Conflict` if the email is already listed
pub async fn create_admin(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateAdminRequest>,
) -> ApiResult<admin::Model> {
    req.validate()?;

    let created = admin::Model::create(state.db(), req.name.trim(), req.email.trim())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::new(StatusCode::CONFLICT, "An admin with this email already exists")
            } else {
                e.into()
            }
        })?;

    tracing::info!(email = %created.email, "Admin record created");
    Ok(ok(created, "Admin created successfully"))
}
