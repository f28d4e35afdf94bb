//! # Config 模块
//!
//! 服务配置管理，集中管理所有配置项。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件 (config.json)
//! 3. 默认值（最低）

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

/// 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 监听地址
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// 博客 markdown 目录
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// 前端静态文件目录
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// 日志级别（trace / debug / info / warn / error）
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// 缓存配置
    #[serde(default)]
    pub cache: CacheConfig,

    /// 自动摘要长度（字符数）
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,
}

/// 博客列表的 HTTP 缓存配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// 共享缓存有效期（秒）
    #[serde(default = "default_s_maxage_secs")]
    pub s_maxage_secs: u64,

    /// 过期后仍可返回旧内容的时长（秒）
    #[serde(default = "default_stale_while_revalidate_secs")]
    pub stale_while_revalidate_secs: u64,
}

impl CacheConfig {
    /// `Cache-Control` 响应头的值
    pub fn header_value(&self) -> String {
        format!(
            "public, s-maxage={}, stale-while-revalidate={}",
            self.s_maxage_secs, self.stale_while_revalidate_secs
        )
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            s_maxage_secs: default_s_maxage_secs(),
            stale_while_revalidate_secs: default_stale_while_revalidate_secs(),
        }
    }
}

// 默认值函数
fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content/blog")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_s_maxage_secs() -> u64 {
    3600
}

fn default_stale_while_revalidate_secs() -> u64 {
    86400
}

fn default_excerpt_chars() -> usize {
    portfolio_core::blog::DEFAULT_EXCERPT_CHARS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            content_dir: default_content_dir(),
            static_dir: default_static_dir(),
            log_level: default_log_level(),
            cache: CacheConfig::default(),
            excerpt_chars: default_excerpt_chars(),
        }
    }
}

/// 命令行覆盖项，`None` 表示不覆盖
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_addr: Option<String>,
    pub content_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl AppConfig {
    /// 加载配置文件
    ///
    /// 如果文件不存在或解析失败，返回默认配置并打印警告。
    /// 此时日志系统尚未初始化，所以直接输出到终端。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            println!("⚠️ 配置文件不存在: {:?}，使用默认配置", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => {
                    println!("✅ 配置文件加载成功: {:?}", path);
                    config
                }
                Err(e) => {
                    eprintln!("⚠️ 配置文件解析失败: {}，使用默认配置", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("⚠️ 配置文件读取失败: {}，使用默认配置", e);
                Self::default()
            }
        }
    }

    /// 保存配置到文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        fs::write(path, json).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// 应用命令行覆盖
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(bind_addr) = overrides.bind_addr {
            self.bind_addr = bind_addr;
        }
        if let Some(content_dir) = overrides.content_dir {
            self.content_dir = content_dir;
        }
        if let Some(static_dir) = overrides.static_dir {
            self.static_dir = static_dir;
        }
        if let Some(log_level) = overrides.log_level {
            self.log_level = log_level;
        }
        self
    }

    /// 解析后的监听地址
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr.parse().map_err(|_| {
            ConfigError::ValidationFailed(format!("监听地址无效: {}", self.bind_addr))
        })
    }

    /// 解析后的日志级别
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level.parse().map_err(|_| {
            ConfigError::ValidationFailed(format!("日志级别无效: {}", self.log_level))
        })
    }

    /// 验证配置有效性
    ///
    /// 内容目录是否存在不在这里检查：目录缺失时博客接口返回 500，服务仍可启动。
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        self.level()?;

        if self.excerpt_chars == 0 {
            return Err(ConfigError::ValidationFailed(
                "摘要长度必须大于 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// 配置错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 序列化失败
    #[error("配置序列化失败: {0}")]
    SerializationFailed(String),
    /// IO 错误
    #[error("配置 IO 错误: {0}")]
    IoError(String),
    /// 验证失败
    #[error("配置验证失败: {0}")]
    ValidationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.excerpt_chars, 150);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cache_header() {
        assert_eq!(
            CacheConfig::default().header_value(),
            "public, s-maxage=3600, stale-while-revalidate=86400"
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let loaded: AppConfig =
            serde_json::from_str(r#"{ "log_level": "debug", "cache": { "s_maxage_secs": 60 } }"#)
                .unwrap();
        assert_eq!(loaded.log_level, "debug");
        assert_eq!(loaded.cache.s_maxage_secs, 60);
        assert_eq!(loaded.cache.stale_while_revalidate_secs, 86400);
        assert_eq!(loaded.content_dir, PathBuf::from("content/blog"));
    }

    #[test]
    fn test_load_missing_or_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(AppConfig::load(dir.path().join("none.json")), AppConfig::default());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert_eq!(AppConfig::load(&broken), AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = AppConfig {
            excerpt_chars: 80,
            ..AppConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(&path), config);
    }

    #[test]
    fn test_overrides_win() {
        let config = AppConfig::default().with_overrides(ConfigOverrides {
            bind_addr: Some("0.0.0.0:8080".to_string()),
            log_level: Some("warn".to_string()),
            ..ConfigOverrides::default()
        });
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.level(), Ok(Level::WARN));
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();

        config.bind_addr = "not an address".to_string();
        assert!(config.validate().is_err());
        config.bind_addr = default_bind_addr();

        config.log_level = "loud".to_string();
        assert!(config.validate().is_err());
        config.log_level = default_log_level();

        config.excerpt_chars = 0;
        assert!(config.validate().is_err());
    }
}
