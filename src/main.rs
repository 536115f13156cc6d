#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::routing::{get, post, put};
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use penna::api;
    use penna::app::App;
    use penna::db::blog_repository::MongoBlogRepository;
    use penna::db::user_repository::MongoUserRepository;
    use penna::state::AppState;
    use std::sync::Arc;
    use tower_http::cors::CorsLayer;
    use tower_http::services::ServeDir;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "penna=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting Penna server...");

    // Load Leptos options from Cargo.toml metadata
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let site_root = leptos_options.site_root.to_string();

    // PORT overrides the cargo-leptos site address
    let mut addr = leptos_options.site_addr;
    if let Ok(port) = std::env::var("PORT") {
        match port.parse() {
            Ok(port) => addr.set_port(port),
            Err(_) => tracing::warn!("Ignoring unparsable PORT value '{}'", port),
        }
    }

    // Connect to MongoDB
    let mongo_uri =
        std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let mongo_db_name =
        std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "penna".to_string());

    let mongo_client = mongodb::Client::with_uri_str(&mongo_uri)
        .await
        .expect("Failed to connect to MongoDB");
    let mongo_db = mongo_client.database(&mongo_db_name);

    let user_repo = MongoUserRepository::new(&mongo_db);
    user_repo
        .ensure_indexes()
        .await
        .expect("Failed to create the unique email index");
    let user_repo: Arc<dyn penna::db::user_repository::UserRepository> = Arc::new(user_repo);
    let blog_repo: Arc<dyn penna::db::blog_repository::BlogRepository> =
        Arc::new(MongoBlogRepository::new(&mongo_db));

    tracing::info!("Connected to MongoDB at {}", mongo_uri);

    if std::env::var("SEED_DEMO_DATA").as_deref() == Ok("true") {
        penna::seeder::seed_demo_data(user_repo.as_ref(), blog_repo.as_ref()).await;
    }

    // Build application state
    let app_state = AppState {
        user_repo,
        blog_repo,
        leptos_options: leptos_options.clone(),
    };

    // Generate the Leptos route list for SSR
    let routes = generate_route_list(App);

    // Build the Axum router
    let app = Router::new()
        // API routes
        .route(
            "/api/users",
            get(api::users::list_users_handler).post(api::users::create_user_handler),
        )
        .route(
            "/api/blogs",
            get(api::blogs::list_blogs_handler).post(api::blogs::create_blog_handler),
        )
        .route(
            "/api/blogs/{id}",
            put(api::blogs::replace_blog_handler).delete(api::blogs::delete_blog_handler),
        )
        .route(
            "/api/blogs/{id}/comments",
            post(api::blogs::append_comment_handler),
        )
        .route(
            "/api/blogs/tags/{tag}",
            get(api::blogs::list_by_tag_handler),
        )
        // Leptos SSR routes
        .leptos_routes(&app_state, routes, {
            move || {
                penna::app::App()
            }
        })
        // Static files (including the compiled CSS/WASM bundle)
        .fallback_service(ServeDir::new(&site_root))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start the server
    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

// When compiled for WASM (client-side), there's no main function.
// The hydrate() function in lib.rs handles client-side initialization.
#[cfg(not(feature = "ssr"))]
fn main() {
    // This is intentionally empty.
    // Client-side hydration is handled by lib.rs::hydrate()
}
