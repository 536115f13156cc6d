mod common;

#[tokio::test]
async fn create_user_returns_created_document() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({
            "name": "John Doe",
            "emailAddress": "john@example.com",
            "author": { "bio": "Tech enthusiast and blogger" }
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    assert!(body["_id"].is_string(), "created user should carry an id");
    assert_eq!(body["name"], "John Doe");
    assert_eq!(body["emailAddress"], "john@example.com");
    assert_eq!(body["author"]["bio"], "Tech enthusiast and blogger");
}

#[tokio::test]
async fn duplicate_email_is_rejected_without_second_record() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    env.create_user(&server, "John Doe", "john@example.com").await;

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({
            "name": "Johnny",
            "emailAddress": "john@example.com"
        }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert!(
        body["message"].as_str().unwrap().contains("already in use"),
        "error should mention the duplicate, got: {}",
        body
    );

    let users = env.user_repo.list().await.unwrap();
    assert_eq!(users.len(), 1, "no second record should exist");
}

#[tokio::test]
async fn create_user_requires_name_and_email() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({ "name": "", "emailAddress": "x@example.com" }))
        .await;
    response.assert_status_bad_request();

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({ "name": "No Email", "emailAddress": "" }))
        .await;
    response.assert_status_bad_request();

    let users = env.user_repo.list().await.unwrap();
    assert!(users.is_empty(), "rejected creates must not persist anything");
}

#[tokio::test]
async fn list_users_returns_everyone() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    env.create_user(&server, "John Doe", "john@example.com").await;
    env.create_user(&server, "Jane Smith", "jane@example.com").await;

    let response = server.get("/api/users").await;
    let body = response.json::<Vec<serde_json::Value>>();
    assert_eq!(body.len(), 2);
}
