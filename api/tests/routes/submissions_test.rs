#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, get, make_test_app, send_json, token_for};
    use axum::http::StatusCode;
    use db::models::assignment_submission;
    use db::models::user::Role;
    use serde_json::{Value, json};
    use serial_test::serial;
    use tower::ServiceExt;

    const ADA: &str = "ada@example.com";

    fn submission_body() -> Value {
        json!({
            "courseId": "course-1",
            "userEmail": ADA,
            "assignmentName": "Week 1",
            "assignmentLink": "https://github.com/ada/week1"
        })
    }

    #[tokio::test]
    #[serial]
    async fn test_submit_then_submit_again() {
        let (app, state) = make_test_app().await;
        let token = token_for(ADA, Role::Student);

        let first = app
            .clone()
            .oneshot(send_json("POST", "/submit-assignment", Some(&token), submission_body()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        let json = body_json(first).await;
        assert_eq!(json["data"]["status"], "Pending");
        assert_eq!(json["data"]["mark"], 0);

        let second = app
            .oneshot(send_json("POST", "/submit-assignment", Some(&token), submission_body()))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);

        let count = assignment_submission::Model::count_for(state.db(), "course-1", ADA).await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_submit_missing_course_is_bad_request() {
        let (app, _) = make_test_app().await;
        let token = token_for(ADA, Role::Student);

        let mut body = submission_body();
        body["courseId"] = json!("");
        let response = app.oneshot(send_json("POST", "/submit-assignment", Some(&token), body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn test_check_submission_lifecycle() {
        let (app, state) = make_test_app().await;
        let student = token_for(ADA, Role::Student);
        let admin = token_for("root@example.com", Role::Admin);
        let uri = format!("/check-submission?userEmail={ADA}&courseId=course-1");

        let response = app.clone().oneshot(get(&uri, Some(&student))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"], json!({ "exists": false, "canSubmit": true }));

        let created = assignment_submission::Model::create(
            state.db(),
            "course-1",
            ADA,
            "Week 1",
            "https://github.com/ada/week1",
        )
        .await
        .unwrap();

        let json = body_json(app.clone().oneshot(get(&uri, Some(&student))).await.unwrap()).await;
        assert_eq!(json["data"]["exists"], true);
        assert_eq!(json["data"]["canSubmit"], true);
        assert_eq!(json["data"]["assignmentLink"], "https://github.com/ada/week1");

        let req = send_json(
            "PUT",
            &format!("/set-mark/assignment/{}", created.id),
            Some(&admin),
            json!({ "mark": 85, "status": "graded" }),
        );
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["mark"], 85);
        assert_eq!(json["data"]["status"], "Graded");

        let json = body_json(app.oneshot(get(&uri, Some(&student))).await.unwrap()).await;
        assert_eq!(json["data"]["canSubmit"], false);
        assert_eq!(json["data"]["mark"], 85);
    }

    #[tokio::test]
    #[serial]
    async fn test_set_mark_defaults_status_to_graded() {
        let (app, state) = make_test_app().await;
        let admin = token_for("root@example.com", Role::Admin);
        let created = assignment_submission::Model::create(state.db(), "course-1", ADA, "Week 1", "https://x.dev/1")
            .await
            .unwrap();

        let req = send_json("PUT", &format!("/set-mark/assignment/{}", created.id), Some(&admin), json!({ "mark": 40 }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"]["status"], "Graded");
    }

    #[tokio::test]
    #[serial]
    async fn test_set_mark_unknown_submission_not_found() {
        let (app, _) = make_test_app().await;
        let admin = token_for("root@example.com", Role::Admin);

        let req = send_json("PUT", "/set-mark/assignment/missing", Some(&admin), json!({ "mark": 10 }));
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn test_grading_is_admin_only() {
        let (app, state) = make_test_app().await;
        let student = token_for(ADA, Role::Student);
        let created = assignment_submission::Model::create(state.db(), "course-1", ADA, "Week 1", "https://x.dev/1")
            .await
            .unwrap();

        let req = send_json("PUT", &format!("/set-mark/assignment/{}", created.id), Some(&student), json!({ "mark": 100 }));
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app.oneshot(get("/submit-assignment", Some(&student))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let stored = assignment_submission::Model::find_by_id(state.db(), &created.id).await.unwrap().unwrap();
        assert_eq!(stored.mark, 0);
    }

    #[tokio::test]
    #[serial]
    async fn test_admin_lists_submissions() {
        let (app, state) = make_test_app().await;
        let admin = token_for("root@example.com", Role::Admin);

        let response = app.clone().oneshot(get("/submit-assignment", Some(&admin))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"], json!([]));

        assignment_submission::Model::create(state.db(), "course-1", ADA, "Week 1", "https://x.dev/1")
            .await
            .unwrap();
        assignment_submission::Model::create(state.db(), "course-2", ADA, "Week 1", "https://x.dev/2")
            .await
            .unwrap();

        let response = app.oneshot(get("/submit-assignment", Some(&admin))).await.unwrap();
        assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    #[serial]
    async fn test_submit_accepts_free_form_name_and_link() {
        let (app, state) = make_test_app().await;
        let token = token_for(ADA, Role::Student);

        let body = json!({
            "courseId": "course-1",
            "userEmail": ADA,
            "assignmentName": "",
            "assignmentLink": "essay.docx"
        });
        let response = app.oneshot(send_json("POST", "/submit-assignment", Some(&token), body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "Pending");
        assert_eq!(json["data"]["assignmentLink"], "essay.docx");

        let count = assignment_submission::Model::count_for(state.db(), "course-1", ADA).await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_student_cannot_submit_for_someone_else() {
        let (app, state) = make_test_app().await;
        let token = token_for("bob@example.com", Role::Student);

        let response = app
            .oneshot(send_json("POST", "/submit-assignment", Some(&token), submission_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let count = assignment_submission::Model::count_for(state.db(), "course-1", ADA).await.unwrap();
        assert_eq!(count, 0);
    }
}
