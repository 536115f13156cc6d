use serde::{Deserialize, Serialize};

use crate::db::blog_repository::BlogRepository;
use crate::db::models::{Blog, Comment, ResolvedBlog};
use crate::error::AppError;

/// Response body for a blog deletion. The exact message is part of the
/// public contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Query parameters accepted by `GET /api/blogs`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogsQuery {
    pub author: Option<String>,
}

fn validate_blog(blog: &Blog) -> Result<(), AppError> {
    if blog.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    if blog.url.trim().is_empty() {
        return Err(AppError::Validation("URL is required".into()));
    }
    if blog.author.trim().is_empty() {
        return Err(AppError::Validation("author is required".into()));
    }
    for entry in &blog.blog_entry {
        if entry.article.trim().is_empty() {
            return Err(AppError::Validation("entry article is required".into()));
        }
    }
    Ok(())
}

/// Core listing logic — separated from the HTTP layer for testability.
pub async fn process_list_blogs(
    repo: &dyn BlogRepository,
    author: Option<&str>,
) -> Result<Vec<ResolvedBlog>, AppError> {
    repo.list(author).await
}

/// Core creation logic.
pub async fn process_create_blog(
    repo: &dyn BlogRepository,
    blog: Blog,
) -> Result<Blog, AppError> {
    validate_blog(&blog)?;
    repo.create(blog).await
}

/// Core replace logic. Replacing a missing id is an explicit not-found.
pub async fn process_replace_blog(
    repo: &dyn BlogRepository,
    id: &str,
    blog: Blog,
) -> Result<Blog, AppError> {
    validate_blog(&blog)?;
    repo.replace(id, blog).await
}

/// Core delete logic. Idempotent: a missing id still yields the standard
/// confirmation.
pub async fn process_delete_blog(
    repo: &dyn BlogRepository,
    id: &str,
) -> Result<DeleteResponse, AppError> {
    repo.delete(id).await?;
    Ok(DeleteResponse {
        message: "Blog deleted".to_string(),
    })
}

/// Core comment-append logic.
pub async fn process_append_comment(
    repo: &dyn BlogRepository,
    id: &str,
    comment: Comment,
) -> Result<Blog, AppError> {
    if comment.comment.trim().is_empty() {
        return Err(AppError::Validation("comment is required".into()));
    }
    repo.append_comment(id, comment).await
}

/// Core tag-filter logic. Matching is exact and case-sensitive.
pub async fn process_list_by_tag(
    repo: &dyn BlogRepository,
    tag: &str,
) -> Result<Vec<ResolvedBlog>, AppError> {
    repo.list_by_tag(tag).await
}

/// Axum handler for `GET /api/blogs`.
#[cfg(feature = "ssr")]
pub async fn list_blogs_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::extract::Query(query): axum::extract::Query<BlogsQuery>,
) -> Result<axum::Json<Vec<ResolvedBlog>>, AppError> {
    let blogs = process_list_blogs(state.blog_repo.as_ref(), query.author.as_deref()).await?;
    Ok(axum::Json(blogs))
}

/// Axum handler for `POST /api/blogs`.
#[cfg(feature = "ssr")]
pub async fn create_blog_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::Json(blog): axum::Json<Blog>,
) -> Result<(axum::http::StatusCode, axum::Json<Blog>), AppError> {
    let created = process_create_blog(state.blog_repo.as_ref(), blog).await?;
    Ok((axum::http::StatusCode::CREATED, axum::Json(created)))
}

/// Axum handler for `PUT /api/blogs/{id}`.
#[cfg(feature = "ssr")]
pub async fn replace_blog_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::Json(blog): axum::Json<Blog>,
) -> Result<axum::Json<Blog>, AppError> {
    let updated = process_replace_blog(state.blog_repo.as_ref(), &id, blog).await?;
    Ok(axum::Json(updated))
}

/// Axum handler for `DELETE /api/blogs/{id}`.
#[cfg(feature = "ssr")]
pub async fn delete_blog_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::extract::Path(id): axum::extract::Path<String>,
) -> Result<axum::Json<DeleteResponse>, AppError> {
    let response = process_delete_blog(state.blog_repo.as_ref(), &id).await?;
    Ok(axum::Json(response))
}

/// Axum handler for `POST /api/blogs/{id}/comments`.
#[cfg(feature = "ssr")]
pub async fn append_comment_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::Json(comment): axum::Json<Comment>,
) -> Result<(axum::http::StatusCode, axum::Json<Blog>), AppError> {
    let updated = process_append_comment(state.blog_repo.as_ref(), &id, comment).await?;
    Ok((axum::http::StatusCode::CREATED, axum::Json(updated)))
}

/// Axum handler for `GET /api/blogs/tags/{tag}`.
#[cfg(feature = "ssr")]
pub async fn list_by_tag_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::extract::Path(tag): axum::extract::Path<String>,
) -> Result<axum::Json<Vec<ResolvedBlog>>, AppError> {
    let blogs = process_list_by_tag(state.blog_repo.as_ref(), &tag).await?;
    Ok(axum::Json(blogs))
}
