use axum::{
    Extension,
    extract::{Path, State},
};
use serde::Deserialize;
use services::user_service::{ProfileUpdate, UserProfile, UserService};
use util::state::AppState;
use validator::Validate;

use crate::auth::AuthUser;
use crate::extract::JsonBody;
use crate::response::{ApiError, ApiResult, ok};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(url(message = "Photo URL must be a valid URL"))]
    pub photo_url: Option<String>,
}

/// PUT /user/update/{email}
///
/// Patches `name` and/or `photoUrl`. Callers may only update their own
/// profile unless they hold the `Admin` role.
///
/// ### Responses
/// - `200 OK` with the updated profile
/// - `400 Bad Request` if the body changes nothing or fails validation
/// - `403 Forbidden` when updating someone else's profile
/// - `404 Not Found` if the user does not exist
pub async fn update_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(email): Path<String>,
    JsonBody(req): JsonBody<UpdateUserRequest>,
) -> ApiResult<UserProfile> {
    if !user.may_act_for(&email) {
        return Err(ApiError::forbidden("You may only update your own profile"));
    }
    req.validate()?;

    let profile = UserService::new(state.db_clone())
        .update_profile(
            &email,
            ProfileUpdate {
                name: req.name,
                photo_url: req.photo_url,
            },
        )
        .await?;

    Ok(ok(profile, "User updated successfully"))
}
