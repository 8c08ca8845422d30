use axum::extract::State;
use db::models::course::{self, NewCourse};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::extract::JsonBody;
use crate::response::{ApiResult, ok};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub instructor: Option<String>,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
}

/// POST /courses
///
/// ### Request Body
/// ```json
/// {
///   "title": "Rust 101",
///   "description": "Ownership and borrowing",
///   "instructor": "Ferris",
///   "imageUrl": "https://example.com/rust.png",
///   "price": 0
/// }
/// ```
///
/// ### Responses
/// - `200 OK` with the stored course, including its generated `id`
/// - `400 Bad Request` on validation failure
pub async fn create_course(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateCourseRequest>,
) -> ApiResult<course::Model> {
    req.validate()?;

    let created = course::Model::create(
        state.db(),
        NewCourse {
            title: req.title.trim().to_owned(),
            description: req.description,
            instructor: req.instructor,
            image_url: req.image_url,
            price: req.price,
        },
    )
    .await?;

    tracing::info!(id = %created.id, title = %created.title, "Course created");
    Ok(ok(created, "Course created successfully"))
}
