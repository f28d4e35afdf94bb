//! # Transform 模块
//!
//! 滑入过渡的位移与样式。

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 二维位移（像素）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    /// 创建新的位移
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// 零位移
    pub const fn zero() -> Self {
        Self { dx: 0.0, dy: 0.0 }
    }

    /// CSS transform 表示
    ///
    /// 单轴位移输出 `translateX` / `translateY`，零位移输出
    /// `translateX(0) translateY(0)`。
    pub fn to_css(self) -> String {
        match (self.dx == 0.0, self.dy == 0.0) {
            (true, true) => "translateX(0) translateY(0)".to_string(),
            (false, true) => format!("translateX({}px)", self.dx),
            (true, false) => format!("translateY({}px)", self.dy),
            (false, false) => format!("translate({}px, {}px)", self.dx, self.dy),
        }
    }
}

/// 滑入方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideDirection {
    /// 从左侧滑入
    Left,
    /// 从右侧滑入
    Right,
    /// 向上滑入（初始位于下方）
    #[default]
    Up,
    /// 向下滑入（初始位于上方）
    Down,
}

/// 计算进入前的初始位移
///
/// Left → (-d, 0)，Right → (+d, 0)，Up → (0, +d)，Down → (0, -d)。
pub fn initial_offset(direction: SlideDirection, distance: f32) -> Offset {
    match direction {
        SlideDirection::Left => Offset::new(-distance, 0.0),
        SlideDirection::Right => Offset::new(distance, 0.0),
        SlideDirection::Up => Offset::new(0.0, distance),
        SlideDirection::Down => Offset::new(0.0, -distance),
    }
}

/// 过渡样式快照
///
/// 宿主直接把它映射成元素的内联样式。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideStyle {
    pub offset: Offset,
    pub opacity: f32,
    pub duration: Duration,
    pub delay: Duration,
}

impl SlideStyle {
    /// 进入前：初始位移 + 透明
    pub fn hidden(offset: Offset, duration: Duration, delay: Duration) -> Self {
        Self {
            offset,
            opacity: 0.0,
            duration,
            delay,
        }
    }

    /// 进入后：归位 + 不透明
    pub fn shown(duration: Duration, delay: Duration) -> Self {
        Self {
            offset: Offset::zero(),
            opacity: 1.0,
            duration,
            delay,
        }
    }

    /// 内联 CSS
    pub fn to_css(&self) -> String {
        format!(
            "transform: {}; opacity: {}; transition-duration: {}ms; transition-delay: {}ms",
            self.offset.to_css(),
            self.opacity,
            self.duration.as_millis(),
            self.delay.as_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_offset_per_direction() {
        assert_eq!(initial_offset(SlideDirection::Left, 30.0), Offset::new(-30.0, 0.0));
        assert_eq!(initial_offset(SlideDirection::Right, 30.0), Offset::new(30.0, 0.0));
        assert_eq!(initial_offset(SlideDirection::Up, 30.0), Offset::new(0.0, 30.0));
        assert_eq!(initial_offset(SlideDirection::Down, 30.0), Offset::new(0.0, -30.0));
    }

    #[test]
    fn test_offset_css() {
        assert_eq!(Offset::new(-30.0, 0.0).to_css(), "translateX(-30px)");
        assert_eq!(Offset::new(0.0, 20.0).to_css(), "translateY(20px)");
        assert_eq!(Offset::zero().to_css(), "translateX(0) translateY(0)");
    }

    #[test]
    fn test_style_css() {
        let style = SlideStyle::hidden(
            initial_offset(SlideDirection::Left, 30.0),
            Duration::from_millis(600),
            Duration::from_millis(100),
        );
        assert_eq!(
            style.to_css(),
            "transform: translateX(-30px); opacity: 0; transition-duration: 600ms; transition-delay: 100ms"
        );
    }
}
