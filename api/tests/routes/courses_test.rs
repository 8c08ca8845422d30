#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, get, make_test_app, send_json, token_for};
    use axum::http::StatusCode;
    use db::models::course::{self, NewCourse};
    use db::models::user::Role;
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn test_admin_creates_course() {
        let (app, _) = make_test_app().await;
        let token = token_for("root@example.com", Role::Admin);

        let req = send_json(
            "POST",
            "/courses",
            Some(&token),
            json!({ "title": "Rust 101", "instructor": "Ferris", "price": 0.0 }),
        );
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let id = json["data"]["id"].as_str().unwrap().to_owned();
        assert_eq!(json["data"]["title"], "Rust 101");

        let response = app.oneshot(get(&format!("/courses/{id}"), None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["instructor"], "Ferris");
    }

    #[tokio::test]
    #[serial]
    async fn test_student_cannot_create_course() {
        let (app, _) = make_test_app().await;
        let token = token_for("ada@example.com", Role::Student);

        let req = send_json("POST", "/courses", Some(&token), json!({ "title": "Rust 101" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    #[serial]
    async fn test_blank_title_is_bad_request() {
        let (app, _) = make_test_app().await;
        let token = token_for("root@example.com", Role::Admin);

        let req = send_json("POST", "/courses", Some(&token), json!({ "title": "" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Title is required");
    }

    #[tokio::test]
    #[serial]
    async fn test_course_listing_is_public() {
        let (app, state) = make_test_app().await;
        for title in ["Rust 101", "Rust 201"] {
            course::Model::create(
                state.db(),
                NewCourse {
                    title: title.into(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        }

        let response = app.oneshot(get("/courses", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    #[serial]
    async fn test_unknown_course_not_found() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(get("/courses/does-not-exist", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Course not found");
    }
}
