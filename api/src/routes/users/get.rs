use axum::extract::State;
use serde::{Deserialize, Serialize};
use services::user_service::{UserProfile, UserService};
use util::state::AppState;

use crate::extract::QueryParams;
use crate::response::{ApiResult, ok};

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub email: Option<String>,
}

/// Either a single profile (email lookup) or the full listing.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UserLookup {
    One(UserProfile),
    Many(Vec<UserProfile>),
}

/// GET /users[?email=]
///
/// With `email`, returns that user's profile or `404` when none matches.
/// Without it, returns every user (possibly an empty list).
pub async fn get_users(State(state): State<AppState>, QueryParams(q): QueryParams<UserQuery>) -> ApiResult<UserLookup> {
    let service = UserService::new(state.db_clone());

    match q.email.filter(|e| !e.trim().is_empty()) {
        Some(email) => {
            let profile = service.find_by_email(email.trim()).await?;
            Ok(ok(UserLookup::One(profile), "User retrieved successfully"))
        }
        None => {
            let users = service.list().await?;
            Ok(ok(UserLookup::Many(users), "Users retrieved successfully"))
        }
    }
}
