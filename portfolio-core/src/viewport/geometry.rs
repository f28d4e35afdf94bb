//! # Geometry 模块
//!
//! 视口相交计算。
//!
//! 与浏览器 IntersectionObserver 的口径一致：
//! - root 矩形先按 root margin 扩展（负值收缩），顺序为 top / right / bottom / left
//! - 相交比例 = 相交面积 / 元素面积
//! - 面积为 0 的元素：落在 root 内为 1.0，否则为 0.0

use serde::{Deserialize, Serialize};

/// 轴对齐矩形（像素）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// 按 margin 扩展（负值收缩）
    pub fn expand(&self, margin: RootMargin) -> Rect {
        Rect {
            x: self.x - margin.left,
            y: self.y - margin.top,
            width: (self.width + margin.left + margin.right).max(0.0),
            height: (self.height + margin.top + margin.bottom).max(0.0),
        }
    }

    /// 相交区域；贴边（零面积）也算相交
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// root margin（像素），CSS 顺序 top / right / bottom / left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl Default for RootMargin {
    /// 底部收缩 50px，元素稍微进入视口一点才算可见
    fn default() -> Self {
        Self::new(0.0, 0.0, -50.0, 0.0)
    }
}

impl From<[f64; 4]> for RootMargin {
    fn from([top, right, bottom, left]: [f64; 4]) -> Self {
        Self::new(top, right, bottom, left)
    }
}

/// 计算元素与视口的相交比例（0.0 - 1.0）
pub fn intersection_ratio(element: Rect, viewport: Rect, margin: RootMargin) -> f64 {
    let root = viewport.expand(margin);
    let Some(overlap) = element.intersection(&root) else {
        return 0.0;
    };

    let area = element.area();
    if area == 0.0 {
        return 1.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}
