use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::mongo::Mongo;

use penna::db::blog_repository::{BlogRepository, MongoBlogRepository};
use penna::db::user_repository::{MongoUserRepository, UserRepository};
use penna::state::AppState;

/// Holds the running MongoDB container and provides the Axum router for
/// integration tests.
///
/// The container is kept alive for as long as this struct lives. When
/// dropped, it is stopped and cleaned up automatically.
pub struct TestEnv {
    _mongo: ContainerAsync<Mongo>,
    pub router: Router,
    pub user_repo: Arc<dyn UserRepository>,
    pub blog_repo: Arc<dyn BlogRepository>,
}

impl TestEnv {
    /// Spin up MongoDB and build an Axum router wired to real repositories.
    pub async fn start() -> Self {
        let mongo_container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let mongo_port = mongo_container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");
        let mongo_uri = format!("mongodb://127.0.0.1:{}", mongo_port);
        let mongo_client = mongodb::Client::with_uri_str(&mongo_uri)
            .await
            .expect("Failed to connect to MongoDB");
        let mongo_db = mongo_client.database("penna_test");

        let user_repo_impl = MongoUserRepository::new(&mongo_db);
        user_repo_impl
            .ensure_indexes()
            .await
            .expect("Failed to create the unique email index");
        let user_repo: Arc<dyn UserRepository> = Arc::new(user_repo_impl);
        let blog_repo: Arc<dyn BlogRepository> = Arc::new(MongoBlogRepository::new(&mongo_db));

        let leptos_options = leptos::prelude::LeptosOptions::builder()
            .output_name("penna")
            .build();

        let app_state = AppState {
            user_repo: user_repo.clone(),
            blog_repo: blog_repo.clone(),
            leptos_options,
        };

        // --- Build Router (API routes only, no Leptos SSR) ---
        let router = Router::new()
            .route(
                "/api/users",
                get(penna::api::users::list_users_handler)
                    .post(penna::api::users::create_user_handler),
            )
            .route(
                "/api/blogs",
                get(penna::api::blogs::list_blogs_handler)
                    .post(penna::api::blogs::create_blog_handler),
            )
            .route(
                "/api/blogs/{id}",
                put(penna::api::blogs::replace_blog_handler)
                    .delete(penna::api::blogs::delete_blog_handler),
            )
            .route(
                "/api/blogs/{id}/comments",
                post(penna::api::blogs::append_comment_handler),
            )
            .route(
                "/api/blogs/tags/{tag}",
                get(penna::api::blogs::list_by_tag_handler),
            )
            .with_state(app_state);

        Self {
            _mongo: mongo_container,
            router,
            user_repo,
            blog_repo,
        }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.router.clone())
    }

    /// Build a `TestServer` that does NOT expect success by default (for error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .build(self.router.clone())
    }

    /// Helper: create a user via the API and return the response body.
    pub async fn create_user(
        &self,
        server: &axum_test::TestServer,
        name: &str,
        email: &str,
    ) -> serde_json::Value {
        server
            .post("/api/users")
            .json(&serde_json::json!({
                "name": name,
                "emailAddress": email
            }))
            .await
            .json::<serde_json::Value>()
    }

    /// Helper: create a blog with one entry via the API and return the
    /// response body.
    pub async fn create_blog(
        &self,
        server: &axum_test::TestServer,
        name: &str,
        author_id: &str,
        tags: &[&str],
    ) -> serde_json::Value {
        server
            .post("/api/blogs")
            .json(&serde_json::json!({
                "name": name,
                "URL": "https://blog.example.com",
                "author": author_id,
                "blogEntry": [{
                    "article": "Latest trends in technology...",
                    "comment": []
                }],
                "tags": tags
            }))
            .await
            .json::<serde_json::Value>()
    }
}
