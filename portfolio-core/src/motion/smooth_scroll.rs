//! # SmoothScroll 模块
//!
//! 平滑滚动：滚轮 / 触摸输入不直接跳到目标位置，而是在 `duration` 内
//! 按缓动曲线插值过去。每次新的输入都从当前位置重新开始插值。

use std::time::Duration;

use tracing::debug;

use super::EasingFunction;
use crate::error::ConfigError;
use crate::log::Logger;

/// 平滑滚动配置
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScrollConfig {
    /// 单次插值时长
    pub duration: Duration,
    /// 缓动函数
    pub easing: EasingFunction,
    /// 滚轮位移倍率
    pub wheel_multiplier: f32,
    /// 触摸位移倍率
    pub touch_multiplier: f32,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(1200),
            easing: EasingFunction::EaseOutExpo,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
        }
    }
}

impl SmoothScrollConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration.is_zero() {
            return Err(ConfigError::InvalidParameter {
                param: "duration".to_string(),
                message: "必须大于 0".to_string(),
            });
        }
        for (param, value) in [
            ("wheel_multiplier", self.wheel_multiplier),
            ("touch_multiplier", self.touch_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidParameter {
                    param: param.to_string(),
                    message: format!("必须是正数，实际为 {value}"),
                });
            }
        }
        Ok(())
    }
}

/// 滚动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// 滚动事件
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    /// 当前滚动位置
    pub scroll: f32,
    /// 本次插值的方向
    pub direction: ScrollDirection,
    /// 整体进度 scroll / limit（0.0 - 1.0）
    pub progress: f32,
}

/// 平滑滚动控制器
#[derive(Debug)]
pub struct SmoothScroll {
    config: SmoothScrollConfig,
    /// 最大滚动距离
    limit: f32,
    /// 当前位置
    current: f32,
    /// 本次插值起点
    from: f32,
    /// 目标位置
    target: f32,
    elapsed: Duration,
    animating: bool,
    /// 上一次记录日志时所在的四分位
    last_quarter: u8,
    disposed: bool,
    logger: Logger,
}

impl SmoothScroll {
    /// 创建平滑滚动控制器
    ///
    /// `limit` 为可滚动的最大距离，负值按 0 处理。
    pub fn new(config: SmoothScrollConfig, limit: f32, logger: Logger) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(parent: logger.span(), limit, "初始化平滑滚动");

        Ok(Self {
            config,
            limit: limit.max(0.0),
            current: 0.0,
            from: 0.0,
            target: 0.0,
            elapsed: Duration::ZERO,
            animating: false,
            last_quarter: 0,
            disposed: false,
            logger,
        })
    }

    /// 滚轮输入
    pub fn on_wheel(&mut self, delta: f32) {
        let target = self.target + delta * self.config.wheel_multiplier;
        self.scroll_to(target);
    }

    /// 触摸输入
    pub fn on_touch(&mut self, delta: f32) {
        let target = self.target + delta * self.config.touch_multiplier;
        self.scroll_to(target);
    }

    /// 平滑滚动到指定位置（会被钳制到 `0..=limit`）
    pub fn scroll_to(&mut self, target: f32) {
        if self.disposed {
            return;
        }

        let target = target.clamp(0.0, self.limit);
        if target == self.current {
            self.target = target;
            self.animating = false;
            return;
        }

        self.from = self.current;
        self.target = target;
        self.elapsed = Duration::ZERO;
        self.animating = true;
    }

    /// 推进虚拟时间
    ///
    /// # 返回
    /// 位置发生变化时返回滚动事件
    pub fn advance(&mut self, dt: Duration) -> Option<ScrollEvent> {
        if self.disposed || !self.animating {
            return None;
        }

        self.elapsed += dt;
        let t = self.elapsed.as_secs_f32() / self.config.duration.as_secs_f32();
        if t >= 1.0 {
            self.current = self.target;
            self.animating = false;
        } else {
            let eased = self.config.easing.apply(t);
            self.current = self.from + (self.target - self.from) * eased;
        }

        let direction = if self.target >= self.from {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        let event = ScrollEvent {
            scroll: self.current,
            direction,
            progress: self.progress(),
        };

        let quarter = (event.progress * 4.0).floor() as u8;
        if quarter != self.last_quarter {
            self.last_quarter = quarter;
            debug!(
                parent: self.logger.span(),
                progress = (event.progress * 100.0).round(),
                scroll = event.scroll,
                direction = ?event.direction,
                "滚动进度"
            );
        }

        Some(event)
    }

    /// 内容尺寸变化
    pub fn resize(&mut self, limit: f32) {
        self.limit = limit.max(0.0);
        self.current = self.current.min(self.limit);
        self.from = self.from.min(self.limit);
        self.target = self.target.min(self.limit);
    }

    /// 销毁，停止所有插值
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.animating = false;
        debug!(parent: self.logger.span(), "销毁平滑滚动实例");
    }

    /// 当前位置
    pub fn scroll(&self) -> f32 {
        self.current
    }

    /// 目标位置
    pub fn target(&self) -> f32 {
        self.target
    }

    /// 整体进度
    pub fn progress(&self) -> f32 {
        if self.limit <= 0.0 {
            0.0
        } else {
            self.current / self.limit
        }
    }

    /// 是否正在插值
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// 是否已销毁
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
