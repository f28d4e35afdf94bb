//! # Handlers 模块
//!
//! HTTP 接口实现。文章读取是阻塞 IO，统一放到 `spawn_blocking` 中执行。

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use portfolio_core::SiteContent;
use portfolio_core::blog::BlogPost;
use serde_json::json;
use tracing::error;

use super::AppState;
use crate::resources::ResourceError;

/// 博客列表失败时的错误消息
pub const LIST_FAILED_MESSAGE: &str = "Failed to load blog posts";

/// `GET /api/blog`
///
/// 成功时带 `Cache-Control`；失败时返回 500 和空列表，前端据此显示空状态。
pub async fn list_posts(State(state): State<AppState>) -> Response {
    let blog = state.blog.clone();
    match flatten(tokio::task::spawn_blocking(move || blog.list()).await) {
        Ok(posts) => (
            StatusCode::OK,
            [(header::CACHE_CONTROL, state.cache.header_value())],
            Json(posts),
        )
            .into_response(),
        Err(message) => {
            error!(parent: state.logger.span(), error = %message, "博客列表加载失败");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": LIST_FAILED_MESSAGE, "posts": [] })),
            )
                .into_response()
        }
    }
}

/// `GET /api/blog/{slug}`
pub async fn get_post(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let blog = state.blog.clone();
    let lookup = slug.clone();
    let result: Result<Option<BlogPost>, String> =
        flatten(tokio::task::spawn_blocking(move || blog.find(&lookup)).await);

    match result {
        Ok(Some(post)) => (
            [(header::CACHE_CONTROL, state.cache.header_value())],
            Json(post),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Post not found: {slug}") })),
        )
            .into_response(),
        Err(message) => {
            error!(parent: state.logger.span(), slug = %slug, error = %message, "博客文章加载失败");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to load blog post" })),
            )
                .into_response()
        }
    }
}

/// `GET /api/content`
pub async fn site_content() -> Json<SiteContent> {
    Json(SiteContent::get())
}

/// 合并任务错误与业务错误
fn flatten<T>(
    result: Result<Result<T, ResourceError>, tokio::task::JoinError>,
) -> Result<T, String> {
    match result {
        Ok(inner) => inner.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    }
}
