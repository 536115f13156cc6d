mod common;

#[tokio::test]
async fn tag_search_returns_exact_matches_only() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let john = env.create_user(&server, "John Doe", "john@example.com").await;
    let john_id = john["_id"].as_str().unwrap();

    env.create_blog(&server, "Tech Trends 2024", john_id, &["technology", "trends"])
        .await;
    env.create_blog(&server, "Travel Diaries", john_id, &["travel"]).await;

    let response = server.get("/api/blogs/tags/technology").await;
    let body = response.json::<Vec<serde_json::Value>>();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "Tech Trends 2024");
}

#[tokio::test]
async fn tag_search_is_case_sensitive() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let john = env.create_user(&server, "John Doe", "john@example.com").await;
    env.create_blog(
        &server,
        "Tech Trends 2024",
        john["_id"].as_str().unwrap(),
        &["technology"],
    )
    .await;

    let response = server.get("/api/blogs/tags/Technology").await;
    let body = response.json::<Vec<serde_json::Value>>();
    assert!(body.is_empty());
}

#[tokio::test]
async fn tag_search_resolves_author() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let john = env.create_user(&server, "John Doe", "john@example.com").await;
    env.create_blog(
        &server,
        "Tech Trends 2024",
        john["_id"].as_str().unwrap(),
        &["technology"],
    )
    .await;

    let response = server.get("/api/blogs/tags/technology").await;
    let body = response.json::<Vec<serde_json::Value>>();
    assert_eq!(body[0]["author"]["name"], "John Doe");
}

#[tokio::test]
async fn tag_search_ignores_the_selected_author() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let john = env.create_user(&server, "John Doe", "john@example.com").await;
    let bob = env.create_user(&server, "Bob Wilson", "bob@example.com").await;

    env.create_blog(
        &server,
        "Tech Trends 2024",
        john["_id"].as_str().unwrap(),
        &["technology"],
    )
    .await;
    env.create_blog(
        &server,
        "Gadget Reviews",
        bob["_id"].as_str().unwrap(),
        &["technology"],
    )
    .await;

    // Tag search spans all authors
    let response = server.get("/api/blogs/tags/technology").await;
    let body = response.json::<Vec<serde_json::Value>>();
    assert_eq!(body.len(), 2);
}
