//! # Logging 模块
//!
//! 初始化 `tracing-subscriber` 的终端输出。

use portfolio_core::Logger;
use tracing::Level;

/// 服务名，作为根 span 的 service 字段
pub const SERVICE_NAME: &str = "portfolio-host";

/// 安装全局 subscriber
///
/// 重复调用会返回错误（全局 subscriber 只能设置一次）。
pub fn init(level: Level) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
}

/// 宿主层的根日志句柄
pub fn root_logger() -> Logger {
    Logger::root(SERVICE_NAME)
}
