//! # Log 模块
//!
//! 显式注入的日志句柄。
//!
//! 组件不持有全局 logger，而是在构造时接收一个 [`Logger`]，
//! 通过 `tracing` 的 span 层级携带上下文（service / component）。
//! 真正的输出后端由宿主层的 subscriber 决定，core 不关心日志写到哪里。
//!
//! ```rust,ignore
//! let root = Logger::root("web");
//! let anim = RevealAnimator::new("Developer", options, root.child("RevealAnimator"))?;
//! ```

use tracing::Span;

/// 日志句柄
///
/// 内部是一个 `tracing::Span`，克隆开销很小。
#[derive(Debug, Clone)]
pub struct Logger {
    span: Span,
}

impl Logger {
    /// 创建带 service 字段的根句柄
    pub fn root(service: &'static str) -> Self {
        Self {
            span: tracing::info_span!("service", service),
        }
    }

    /// 不输出任何内容的句柄（测试、预览用）
    pub fn disabled() -> Self {
        Self {
            span: Span::none(),
        }
    }

    /// 派生子句柄，附加 component 字段
    pub fn child(&self, component: &'static str) -> Self {
        Self {
            span: tracing::debug_span!(parent: &self.span, "component", component),
        }
    }

    /// 底层 span
    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::disabled()
    }
}
