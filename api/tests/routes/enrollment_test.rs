#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, get, make_test_app, send_json, token_for};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use db::models::course::{self, NewCourse};
    use db::models::enrollment;
    use db::models::user::{self, Role};
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    const ADA: &str = "ada@example.com";
    const BOB: &str = "bob@example.com";

    #[tokio::test]
    #[serial]
    async fn test_enroll_then_enroll_again() {
        let (app, state) = make_test_app().await;
        user::Model::create(state.db(), "Ada", ADA, None).await.unwrap();
        let token = token_for(ADA, Role::Student);
        let body = json!({ "email": ADA, "courseId": "course-1" });

        let first = app.clone().oneshot(send_json("POST", "/enroll", Some(&token), body.clone())).await.unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        let json = body_json(first).await;
        assert_eq!(json["data"]["courseId"], "course-1");

        let second = app.oneshot(send_json("POST", "/enroll", Some(&token), body)).await.unwrap();
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);
        let json = body_json(second).await;
        assert_eq!(json["success"], false);

        let ids = enrollment::Model::course_ids_for(state.db(), ADA).await.unwrap();
        assert_eq!(ids, vec!["course-1".to_string()]);
    }

    #[tokio::test]
    #[serial]
    async fn test_enroll_unknown_user_not_found() {
        let (app, _) = make_test_app().await;
        let token = token_for("ghost@example.com", Role::Student);

        let req = send_json("POST", "/enroll", Some(&token), json!({ "email": "ghost@example.com", "courseId": "c" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn test_enroll_missing_course_id_is_bad_request() {
        let (app, state) = make_test_app().await;
        user::Model::create(state.db(), "Ada", ADA, None).await.unwrap();
        let token = token_for(ADA, Role::Student);

        let req = send_json("POST", "/enroll", Some(&token), json!({ "email": ADA }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn test_enroll_requires_session() {
        let (app, _) = make_test_app().await;

        let req = send_json("POST", "/enroll", None, json!({ "email": ADA, "courseId": "c" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    async fn test_check_enrollment() {
        let (app, state) = make_test_app().await;
        user::Model::create(state.db(), "Ada", ADA, None).await.unwrap();
        enrollment::Model::create(state.db(), ADA, "course-1").await.unwrap();
        let token = token_for(ADA, Role::Student);

        let uri = format!("/check-enrollment?email={ADA}&courseId=course-1");
        let response = app.clone().oneshot(get(&uri, Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"]["enrolled"], true);

        let uri = format!("/check-enrollment?email={ADA}&courseId=course-2");
        let response = app.clone().oneshot(get(&uri, Some(&token))).await.unwrap();
        assert_eq!(body_json(response).await["data"]["enrolled"], false);

        let uri = "/check-enrollment?email=ghost@example.com&courseId=course-1";
        let response = app.oneshot(get(uri, Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn test_myclasses_skips_unknown_courses() {
        let (app, state) = make_test_app().await;
        user::Model::create(state.db(), "Ada", ADA, None).await.unwrap();
        let real = course::Model::create(
            state.db(),
            NewCourse {
                title: "Rust 101".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        enrollment::Model::create(state.db(), ADA, &real.id).await.unwrap();
        enrollment::Model::create(state.db(), ADA, "deleted-course").await.unwrap();
        let token = token_for(ADA, Role::Student);

        let response = app.oneshot(get(&format!("/myclasses?email={ADA}"), Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let courses = json["data"].as_array().unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0]["id"], real.id.as_str());
    }

    #[tokio::test]
    #[serial]
    async fn test_enroll_malformed_body_uses_envelope() {
        let (app, _) = make_test_app().await;
        let token = token_for(ADA, Role::Student);

        let req = Request::builder()
            .method("POST")
            .uri("/enroll")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from("{bad json"))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    #[serial]
    async fn test_student_cannot_enroll_someone_else() {
        let (app, state) = make_test_app().await;
        user::Model::create(state.db(), "Ada", ADA, None).await.unwrap();
        user::Model::create(state.db(), "Bob", BOB, None).await.unwrap();
        let token = token_for(BOB, Role::Student);

        let req = send_json("POST", "/enroll", Some(&token), json!({ "email": ADA, "courseId": "course-1" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["success"], false);

        let ids = enrollment::Model::course_ids_for(state.db(), ADA).await.unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_admin_enrolls_on_behalf_of_student() {
        let (app, state) = make_test_app().await;
        user::Model::create(state.db(), "Ada", ADA, None).await.unwrap();
        let token = token_for("admin@example.com", Role::Admin);

        let req = send_json("POST", "/enroll", Some(&token), json!({ "email": ADA, "courseId": "course-1" }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let ids = enrollment::Model::course_ids_for(state.db(), ADA).await.unwrap();
        assert_eq!(ids, vec!["course-1".to_string()]);
    }
}
