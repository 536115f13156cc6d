use crate::db::models::User;
use crate::db::user_repository::UserRepository;
use crate::error::AppError;

/// Core listing logic — separated from the HTTP layer for testability.
pub async fn process_list_users(repo: &dyn UserRepository) -> Result<Vec<User>, AppError> {
    repo.list().await
}

/// Core creation logic.
///
/// Required-field validation happens here; email uniqueness is the
/// repository's concern (it owns the index).
pub async fn process_create_user(
    repo: &dyn UserRepository,
    user: User,
) -> Result<User, AppError> {
    if user.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    if user.email_address.trim().is_empty() {
        return Err(AppError::Validation("emailAddress is required".into()));
    }

    repo.create(user).await
}

/// Axum handler for `GET /api/users`.
#[cfg(feature = "ssr")]
pub async fn list_users_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
) -> Result<axum::Json<Vec<User>>, AppError> {
    let users = process_list_users(state.user_repo.as_ref()).await?;
    Ok(axum::Json(users))
}

/// Axum handler for `POST /api/users`.
#[cfg(feature = "ssr")]
pub async fn create_user_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::Json(user): axum::Json<User>,
) -> Result<(axum::http::StatusCode, axum::Json<User>), AppError> {
    let created = process_create_user(state.user_repo.as_ref(), user).await?;
    Ok((axum::http::StatusCode::CREATED, axum::Json(created)))
}
