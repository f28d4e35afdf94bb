//! # Server 模块
//!
//! axum 路由与服务启动。
//!
//! | 路由 | 说明 |
//! |------|------|
//! | `GET /api/blog` | 全部文章（日期倒序） |
//! | `GET /api/blog/{slug}` | 单篇文章 |
//! | `GET /api/content` | 站点静态内容 |
//! | 其他 | 静态文件目录（`ServeDir`） |

pub mod handlers;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use portfolio_core::Logger;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use crate::blog_loader::BlogStore;
use crate::config::{AppConfig, CacheConfig};
use crate::resources::{FsSource, ResourceSource};

/// 请求处理共享状态
#[derive(Clone, Debug)]
pub struct AppState {
    pub blog: BlogStore,
    /// 前端静态文件目录
    pub static_dir: PathBuf,
    pub cache: CacheConfig,
    pub logger: Logger,
}

impl AppState {
    /// 根据配置构建状态
    pub fn from_config(config: &AppConfig, logger: Logger) -> Self {
        let content: Arc<dyn ResourceSource> = Arc::new(FsSource::new(&config.content_dir));
        Self {
            blog: BlogStore::new(content, config.excerpt_chars, logger.child("blog")),
            static_dir: config.static_dir.clone(),
            cache: config.cache.clone(),
            logger: logger.child("http"),
        }
    }
}

/// 构建路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/blog", get(handlers::list_posts))
        .route("/api/blog/{slug}", get(handlers::get_post))
        .route("/api/content", get(handlers::site_content))
        .fallback_service(ServeDir::new(&state.static_dir))
        .layer(middleware::from_fn_with_state(state.clone(), log_request))
        .with_state(state)
}

/// 请求日志中间件
async fn log_request(
    axum::extract::State(state): axum::extract::State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        parent: state.logger.span(),
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "请求完成"
    );
    response
}

/// 启动 HTTP 服务，收到 Ctrl-C 后优雅退出
pub async fn serve(config: &AppConfig, logger: Logger) -> std::io::Result<()> {
    let addr = config
        .socket_addr()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let state = AppState::from_config(config, logger.clone());
    let listener = TcpListener::bind(addr).await?;

    info!(
        parent: logger.span(),
        addr = %listener.local_addr()?,
        content_dir = ?config.content_dir,
        static_dir = ?config.static_dir,
        "服务已启动"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("收到退出信号，正在关闭");
    }
}
