use axum::extract::State;
use serde::Deserialize;
use services::user_service::{NewUser, UserProfile, UserService};
use util::state::AppState;
use validator::Validate;

use crate::extract::JsonBody;
use crate::response::{ApiResult, ok};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(url(message = "Photo URL must be a valid URL"))]
    pub photo_url: Option<String>,
}

/// POST /users
///
/// Signs up a user. The role is always `Student`; promotion happens outside
/// this API.
///
/// ### Request Body
/// ```json
/// { "name": "Ada", "email": "ada@example.com", "photoUrl": "https://..." }
/// ```
///
/// ### Responses
/// - `200 OK` with the new profile
/// - `400 Bad Request` on validation failure
/// - `409 Conflict` if the email is taken
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> ApiResult<UserProfile> {
    req.validate()?;

    let profile = UserService::new(state.db_clone())
        .create(NewUser {
            name: req.name,
            email: req.email,
            photo_url: req.photo_url,
        })
        .await?;

    Ok(ok(profile, "User created successfully"))
}
