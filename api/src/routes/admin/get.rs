use axum::extract::State;
use db::models::admin;
use util::state::AppState;

use crate::response::{ApiResult, ok};

/// GET /admin
///
/// Lists the admin directory, oldest entry first.
pub async fn list_admins(State(state): State<AppState>) -> ApiResult<Vec<admin::Model>> {
    let admins = admin::Model::find_all(state.db()).await?;
    Ok(ok(admins, "Admins retrieved successfully"))
}
