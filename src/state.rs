use std::sync::Arc;

use crate::db::blog_repository::BlogRepository;
use crate::db::user_repository::UserRepository;

/// Shared application state for the Axum/Leptos server.
///
/// Repositories are injected as trait objects so tests can substitute
/// in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    pub user_repo: Arc<dyn UserRepository>,
    pub blog_repo: Arc<dyn BlogRepository>,
    pub leptos_options: leptos::prelude::LeptosOptions,
}

impl axum::extract::FromRef<AppState> for leptos::prelude::LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}
