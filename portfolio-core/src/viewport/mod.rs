//! # Viewport 模块
//!
//! 视口触发器：元素第一次"足够可见"时触发一次性的可见事件。
//!
//! ## 状态转换
//!
//! ```text
//! Watching ──ratio >= threshold──► Triggered ──(delay 到期)──► visible = true
//!     │                                │
//!     └──────── dispose() ─────────────┴──────► Disposed
//! ```
//!
//! - 触发后不再关心后续的相交变化（one-shot）
//! - `delay` 为 0 时在触发的同时翻转 `visible`
//! - `Disposed` 之后任何事件、任何时间推进都不会再修改状态

mod geometry;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::log::Logger;
use crate::motion::{Offset, SlideDirection, SlideStyle, initial_offset};
use crate::timer::{TickSource, Timeout};

pub use geometry::{Rect, RootMargin, intersection_ratio};

/// 默认可见阈值
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// 被观察元素的标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

/// 触发器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportOptions {
    /// 可见阈值（相交比例）
    pub threshold: f64,
    pub root_margin: RootMargin,
    /// 触发到可见之间的延迟
    pub delay: Duration,
    /// 滑入方向
    pub direction: SlideDirection,
    /// 滑入距离（像素）
    pub distance: f32,
    /// 过渡时长
    pub duration: Duration,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: RootMargin::default(),
            delay: Duration::ZERO,
            direction: SlideDirection::Up,
            distance: 30.0,
            duration: Duration::from_millis(600),
        }
    }
}

impl ViewportOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_direction(mut self, direction: SlideDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold {
                threshold: self.threshold,
            });
        }
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(ConfigError::InvalidParameter {
                param: "distance".to_string(),
                message: format!("必须是非负数，实际为 {}", self.distance),
            });
        }
        Ok(())
    }
}

/// 触发器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// 正在观察
    Watching,
    /// 已触发（可能仍在等待 delay）
    Triggered,
    /// 已销毁
    Disposed,
}

/// 视口触发器
#[derive(Debug)]
pub struct ViewportTrigger {
    element: ElementId,
    options: ViewportOptions,
    state: TriggerState,
    visible: bool,
    /// 触发后等待 delay 的定时器
    pending: Option<Timeout>,
    logger: Logger,
}

impl ViewportTrigger {
    /// 开始观察元素
    ///
    /// 每个元素生命周期只观察一次；重新挂载应创建新的触发器。
    pub fn observe(
        element: ElementId,
        options: ViewportOptions,
        logger: Logger,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        debug!(
            parent: logger.span(),
            element = %element,
            threshold = options.threshold,
            delay_ms = options.delay.as_millis() as u64,
            "开始观察元素"
        );

        Ok(Self {
            element,
            options,
            state: TriggerState::Watching,
            visible: false,
            pending: None,
            logger,
        })
    }

    /// 相交变化事件
    ///
    /// # 返回
    /// 本次事件是否触发了（Watching → Triggered）
    pub fn on_intersection(&mut self, ratio: f64) -> bool {
        if self.state != TriggerState::Watching {
            return false;
        }
        if ratio.is_nan() || ratio < self.options.threshold {
            return false;
        }

        self.state = TriggerState::Triggered;
        debug!(parent: self.logger.span(), element = %self.element, ratio, "元素进入视口");

        if self.options.delay.is_zero() {
            self.show();
        } else {
            self.pending = Some(Timeout::new(self.options.delay));
        }
        true
    }

    /// 根据几何信息计算相交比例并投递事件
    pub fn on_layout(&mut self, element: Rect, viewport: Rect) -> bool {
        let ratio = intersection_ratio(element, viewport, self.options.root_margin);
        self.on_intersection(ratio)
    }

    /// 推进虚拟时间
    ///
    /// # 返回
    /// 本次推进是否让 `visible` 翻转
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.state != TriggerState::Triggered {
            return false;
        }

        let fired = match self.pending.as_mut() {
            Some(timeout) => timeout.advance(dt) > 0,
            None => false,
        };
        if fired {
            self.pending = None;
            self.show();
        }
        fired
    }

    /// 断开观察并取消未到期的延迟
    ///
    /// 可在任意状态调用，重复调用无副作用。
    pub fn dispose(&mut self) {
        if self.state == TriggerState::Disposed {
            return;
        }

        if let Some(mut timeout) = self.pending.take() {
            timeout.cancel();
        }
        self.state = TriggerState::Disposed;
        debug!(parent: self.logger.span(), element = %self.element, visible = self.visible, "停止观察元素");
    }

    fn show(&mut self) {
        self.visible = true;
        debug!(parent: self.logger.span(), element = %self.element, "元素可见");
    }

    /// 是否已可见
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// 当前状态
    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// 被观察的元素
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// 配置
    pub fn options(&self) -> &ViewportOptions {
        &self.options
    }

    /// 进入前的初始位移
    pub fn initial_offset(&self) -> Offset {
        initial_offset(self.options.direction, self.options.distance)
    }

    /// 当前应用的过渡样式
    pub fn style(&self) -> SlideStyle {
        if self.visible {
            SlideStyle::shown(self.options.duration, self.options.delay)
        } else {
            SlideStyle::hidden(self.initial_offset(), self.options.duration, self.options.delay)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger(options: ViewportOptions) -> ViewportTrigger {
        ViewportTrigger::observe(ElementId(1), options, Logger::disabled()).unwrap()
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_fires_on_first_ratio_above_threshold() {
        let mut t = trigger(ViewportOptions::default());

        assert!(!t.on_intersection(0.05));
        assert!(!t.is_visible());
        assert_eq!(t.state(), TriggerState::Watching);

        assert!(t.on_intersection(0.15));
        assert!(t.is_visible());
        assert_eq!(t.state(), TriggerState::Triggered);

        // 之后的变化全部忽略
        assert!(!t.on_intersection(0.3));
        assert!(!t.on_intersection(0.0));
        assert!(t.is_visible());
    }

    #[test]
    fn test_ratio_equal_to_threshold_fires() {
        let mut t = trigger(ViewportOptions::default());
        assert!(t.on_intersection(0.1));
    }

    #[test]
    fn test_nan_ratio_ignored() {
        let mut t = trigger(ViewportOptions::default());
        assert!(!t.on_intersection(f64::NAN));
        assert_eq!(t.state(), TriggerState::Watching);
    }

    #[test]
    fn test_delay_before_visible() {
        let mut t = trigger(ViewportOptions::default().with_delay(ms(100)));

        assert!(t.on_intersection(1.0));
        assert!(!t.is_visible());

        assert!(!t.advance(ms(99)));
        assert!(!t.is_visible());
        assert!(t.advance(ms(1)));
        assert!(t.is_visible());
        assert!(!t.advance(ms(1000)));
    }

    #[test]
    fn test_advance_while_watching_does_nothing() {
        let mut t = trigger(ViewportOptions::default().with_delay(ms(10)));
        assert!(!t.advance(ms(1000)));
        assert!(!t.is_visible());
    }

    #[test]
    fn test_dispose_cancels_pending_delay() {
        let mut t = trigger(ViewportOptions::default().with_delay(ms(100)));
        t.on_intersection(0.5);
        t.advance(ms(50));

        t.dispose();
        t.dispose();
        assert_eq!(t.state(), TriggerState::Disposed);
        assert!(!t.advance(ms(1000)));
        assert!(!t.on_intersection(1.0));
        assert!(!t.is_visible());
    }

    #[test]
    fn test_dispose_while_watching() {
        let mut t = trigger(ViewportOptions::default());
        t.dispose();
        assert!(!t.on_intersection(1.0));
        assert!(!t.is_visible());
    }

    #[test]
    fn test_on_layout_uses_root_margin() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let mut t = trigger(ViewportOptions::default());

        // 顶部 40px 进入视口，但被底部 -50px 的 margin 抵消
        assert!(!t.on_layout(Rect::new(0.0, 760.0, 100.0, 100.0), viewport));
        // 顶部 100px 进入视口，扣掉 margin 剩 50%
        assert!(t.on_layout(Rect::new(0.0, 700.0, 100.0, 100.0), viewport));
    }

    #[test]
    fn test_style_before_and_after() {
        let mut t = trigger(
            ViewportOptions::default()
                .with_direction(SlideDirection::Left)
                .with_distance(40.0),
        );
        let before = t.style();
        assert_eq!(before.offset, Offset::new(-40.0, 0.0));
        assert_eq!(before.opacity, 0.0);

        t.on_intersection(1.0);
        let after = t.style();
        assert_eq!(after.offset, Offset::zero());
        assert_eq!(after.opacity, 1.0);
        assert_eq!(after.duration, ms(600));
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let err = ViewportTrigger::observe(
            ElementId(1),
            ViewportOptions::default().with_threshold(1.5),
            Logger::disabled(),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidThreshold { threshold: 1.5 });
    }
}
