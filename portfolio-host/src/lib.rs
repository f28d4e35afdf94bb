//! # Portfolio Host
//!
//! 作品集站点的宿主层：读取配置与内容目录，通过 HTTP 提供博客接口和前端静态文件。
//!
//! ## 架构说明
//!
//! Host 层负责：
//! - 配置加载（文件 + 命令行）
//! - 内容目录读取（markdown、静态文件）
//! - 日志输出
//! - HTTP 路由
//!
//! 文章解析、排序、缺省值规则都在 `portfolio-core` 中，Host 层只负责 IO。

pub mod blog_loader;
pub mod config;
pub mod logging;
pub mod resources;
pub mod server;

pub use blog_loader::BlogStore;
pub use config::{AppConfig, CacheConfig, ConfigError, ConfigOverrides};
pub use resources::{FsSource, ResourceError, ResourceSource};
pub use server::{AppState, router, serve};
