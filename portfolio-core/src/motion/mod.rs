//! # Motion 模块
//!
//! 装饰性动效：缓动、滑入位移、平滑滚动、瀑布流背景入场。
//!
//! 与 [`crate::reveal`] / [`crate::viewport`] 一样，这里的类型都不接触真实时间，
//! 由宿主通过 `advance(dt)` 推进。

mod easing;
mod masonry;
mod smooth_scroll;
mod transform;

pub use easing::EasingFunction;
pub use masonry::{
    AnimateFrom, ENTRANCE_DELAY, MAX_VISIBLE_ITEMS, MasonryBackground, MasonryOptions,
    MasonryTile,
};
pub use smooth_scroll::{ScrollDirection, ScrollEvent, SmoothScroll, SmoothScrollConfig};
pub use transform::{Offset, SlideDirection, SlideStyle, initial_offset};
