//! Browser-side REST client for the `/api` endpoints.
//!
//! Errors are flattened to display strings: the server's `{"message"}` body
//! when present, the transport error otherwise. Callers feed them straight
//! into the toast notification.

use serde::de::DeserializeOwned;

use crate::api::blogs::DeleteResponse;
use crate::db::models::{Blog, Comment, ResolvedBlog, User};

/// The API origin. In the browser this is the page's own origin; the native
/// fallback only exists so the module typechecks server-side (the fetch
/// functions never run there).
fn api_base() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://127.0.0.1:3000".to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "http://127.0.0.1:3000".to_string()
    }
}

async fn into_result<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, String> {
    if response.status().is_success() {
        response.json::<T>().await.map_err(|e| e.to_string())
    } else {
        let status = response.status();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("message")?.as_str().map(str::to_string));
        Err(message.unwrap_or_else(|| format!("Request failed with status {}", status)))
    }
}

pub async fn fetch_users() -> Result<Vec<User>, String> {
    let response = reqwest::get(format!("{}/api/users", api_base()))
        .await
        .map_err(|e| e.to_string())?;
    into_result(response).await
}

pub async fn fetch_blogs(author: &str) -> Result<Vec<ResolvedBlog>, String> {
    let response = reqwest::get(format!("{}/api/blogs?author={}", api_base(), author))
        .await
        .map_err(|e| e.to_string())?;
    into_result(response).await
}

pub async fn fetch_blogs_by_tag(tag: &str) -> Result<Vec<ResolvedBlog>, String> {
    let response = reqwest::get(format!("{}/api/blogs/tags/{}", api_base(), tag))
        .await
        .map_err(|e| e.to_string())?;
    into_result(response).await
}

pub async fn create_blog(blog: &Blog) -> Result<Blog, String> {
    let response = reqwest::Client::new()
        .post(format!("{}/api/blogs", api_base()))
        .json(blog)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    into_result(response).await
}

pub async fn update_blog(id: &str, blog: &Blog) -> Result<Blog, String> {
    let response = reqwest::Client::new()
        .put(format!("{}/api/blogs/{}", api_base(), id))
        .json(blog)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    into_result(response).await
}

pub async fn delete_blog(id: &str) -> Result<DeleteResponse, String> {
    let response = reqwest::Client::new()
        .delete(format!("{}/api/blogs/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    into_result(response).await
}

pub async fn add_comment(blog_id: &str, comment: &Comment) -> Result<Blog, String> {
    let response = reqwest::Client::new()
        .post(format!("{}/api/blogs/{}/comments", api_base(), blog_id))
        .json(comment)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    into_result(response).await
}
