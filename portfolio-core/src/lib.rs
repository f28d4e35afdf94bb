//! # Portfolio Core
//!
//! 作品集站点的纯逻辑核心库。
//!
//! ## 架构概述
//!
//! `portfolio-core` 不依赖任何 IO、渲染或真实时钟。
//! 所有带时间行为的组件都由宿主层通过 `advance(dt)` 推进：
//!
//! ```text
//! Host                               Core
//!   │── on_intersection / on_pointer_enter ──►│
//!   │── advance(dt) ─────────────────────────►│ tick()
//!   │◄── displayed / visible / style ─────────│
//! ```
//!
//! ## 核心类型
//!
//! - [`RevealAnimator`]：字符解密动画
//! - [`ViewportTrigger`]：一次性的视口可见触发器
//! - [`TickSource`]：定时器抽象（[`Interval`] / [`Timeout`]）
//! - [`BlogPost`]：博客文章模型
//! - [`Logger`]：注入到组件中的日志句柄
//!
//! ## 模块结构
//!
//! - [`reveal`]：解密动画
//! - [`viewport`]：视口触发与相交计算
//! - [`section`]：触发器与解密标题的组合
//! - [`motion`]：缓动、滑入样式、平滑滚动、瀑布流背景
//! - [`blog`]：frontmatter 解析与文章模型
//! - [`content`]：站点静态内容
//! - [`timer`]：tick 源
//! - [`error`]：错误类型定义

pub mod blog;
pub mod content;
pub mod error;
pub mod log;
pub mod motion;
pub mod reveal;
pub mod section;
pub mod timer;
pub mod viewport;

// 重导出核心类型
pub use blog::{BlogPost, Frontmatter, PostDefaults};
pub use content::SiteContent;
pub use error::{BlogError, ConfigError};
pub use log::Logger;
pub use motion::{
    MasonryBackground, MasonryOptions, Offset, SlideDirection, SlideStyle, SmoothScroll,
    SmoothScrollConfig,
};
pub use reveal::{Activation, RevealAnimator, RevealDirection, RevealOptions, RevealPhase};
pub use section::RevealSection;
pub use timer::{Interval, TickSource, Timeout};
pub use viewport::{ElementId, Rect, RootMargin, TriggerState, ViewportOptions, ViewportTrigger};
