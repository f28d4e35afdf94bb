//! # Error 模块
//!
//! 定义 portfolio-core 中使用的错误类型。

use thiserror::Error;

/// 组件配置错误
///
/// 所有组件在构造时校验参数，非法配置直接返回错误（fail fast），
/// 运行期间不再产生错误。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 动画间隔必须大于 0
    #[error("动画间隔必须大于 0，实际为 {speed_ms}ms")]
    InvalidSpeed { speed_ms: u128 },

    /// 最大迭代次数必须至少为 1
    #[error("最大迭代次数必须至少为 1，实际为 {max_iterations}")]
    InvalidMaxIterations { max_iterations: u32 },

    /// 字符集为空
    #[error("字符集不能为空")]
    EmptyCharset,

    /// 可见阈值超出范围
    #[error("可见阈值必须在 0.0 - 1.0 之间，实际为 {threshold}")]
    InvalidThreshold { threshold: f64 },

    /// 数值参数无效（负数、NaN 等）
    #[error("参数 '{param}' 的值无效: {message}")]
    InvalidParameter { param: String, message: String },
}

/// 博客文章解析错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlogError {
    /// frontmatter 块没有闭合
    #[error("frontmatter 缺少结束分隔符 '---'")]
    UnterminatedFrontmatter,

    /// frontmatter 不是合法的 YAML
    #[error("frontmatter 解析失败: {message}")]
    InvalidFrontmatter { message: String },

    /// frontmatter 顶层不是映射
    #[error("frontmatter 顶层必须是键值映射")]
    FrontmatterNotMapping,
}
