#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, get, make_test_app, send_json, token_for};
    use axum::http::StatusCode;
    use db::models::{enrollment, user::{self, Role}};
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn test_create_user_defaults_to_student() {
        let (app, _) = make_test_app().await;

        let req = send_json(
            "POST",
            "/users",
            None,
            json!({ "name": "Ada", "email": "ada@example.com", "photoUrl": "https://example.com/ada.png" }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["email"], "ada@example.com");
        assert_eq!(json["data"]["role"], "Student");
        assert_eq!(json["data"]["photoUrl"], "https://example.com/ada.png");
        assert_eq!(json["data"]["enrolledCourseIds"], json!([]));
    }

    #[tokio::test]
    #[serial]
    async fn test_create_user_duplicate_email_conflicts() {
        let (app, state) = make_test_app().await;
        user::Model::create(state.db(), "Ada", "ada@example.com", None).await.unwrap();

        let req = send_json("POST", "/users", None, json!({ "name": "Other", "email": "ada@example.com" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "A user with this email already exists");
    }

    #[tokio::test]
    #[serial]
    async fn test_create_user_invalid_email_is_bad_request() {
        let (app, _) = make_test_app().await;

        let req = send_json("POST", "/users", None, json!({ "name": "Ada", "email": "not-an-email" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Invalid email format");
    }

    #[tokio::test]
    #[serial]
    async fn test_get_user_by_email_includes_enrollments() {
        let (app, state) = make_test_app().await;
        user::Model::create(state.db(), "Ada", "ada@example.com", None).await.unwrap();
        enrollment::Model::create(state.db(), "ada@example.com", "course-1").await.unwrap();

        let response = app.oneshot(get("/users?email=ada@example.com", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["name"], "Ada");
        assert_eq!(json["data"]["enrolledCourseIds"], json!(["course-1"]));
    }

    #[tokio::test]
    #[serial]
    async fn test_get_unknown_user_is_not_found() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(get("/users?email=ghost@example.com", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn test_list_users() {
        let (app, state) = make_test_app().await;
        user::Model::create(state.db(), "Ada", "ada@example.com", None).await.unwrap();
        user::Model::create(state.db(), "Grace", "grace@example.com", None).await.unwrap();

        let response = app.oneshot(get("/users", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    #[serial]
    async fn test_update_own_profile() {
        let (app, state) = make_test_app().await;
        user::Model::create(state.db(), "Ada", "ada@example.com", None).await.unwrap();
        let token = token_for("ada@example.com", Role::Student);

        let req = send_json(
            "PUT",
            "/user/update/ada@example.com",
            Some(&token),
            json!({ "name": "Ada Lovelace" }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["name"], "Ada Lovelace");
        assert_eq!(json["data"]["role"], "Student");
    }

    #[tokio::test]
    #[serial]
    async fn test_update_other_profile_forbidden_for_student() {
        let (app, state) = make_test_app().await;
        user::Model::create(state.db(), "Ada", "ada@example.com", None).await.unwrap();
        let token = token_for("mallory@example.com", Role::Student);

        let req = send_json("PUT", "/user/update/ada@example.com", Some(&token), json!({ "name": "Pwned" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let stored = user::Model::find_by_email(state.db(), "ada@example.com").await.unwrap().unwrap();
        assert_eq!(stored.name, "Ada");
    }

    #[tokio::test]
    #[serial]
    async fn test_admin_may_update_any_profile() {
        let (app, state) = make_test_app().await;
        user::Model::create(state.db(), "Ada", "ada@example.com", None).await.unwrap();
        let token = token_for("root@example.com", Role::Admin);

        let req = send_json(
            "PUT",
            "/user/update/ada@example.com",
            Some(&token),
            json!({ "photoUrl": "https://example.com/new.png" }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["photoUrl"], "https://example.com/new.png");
    }

    #[tokio::test]
    #[serial]
    async fn test_update_unknown_user_not_found() {
        let (app, _) = make_test_app().await;
        let token = token_for("root@example.com", Role::Admin);

        let req = send_json("PUT", "/user/update/ghost@example.com", Some(&token), json!({ "name": "Ghost" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn test_update_with_empty_body_is_bad_request() {
        let (app, state) = make_test_app().await;
        user::Model::create(state.db(), "Ada", "ada@example.com", None).await.unwrap();
        let token = token_for("ada@example.com", Role::Student);

        let req = send_json("PUT", "/user/update/ada@example.com", Some(&token), json!({}));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn test_update_requires_session() {
        let (app, _) = make_test_app().await;

        let req = send_json("PUT", "/user/update/ada@example.com", None, json!({ "name": "Ada" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
    }
}
