//! # Masonry 模块
//!
//! 首屏瀑布流背景的入场编排。
//!
//! 挂载后等待一个短暂的延迟统一触发入场，各图块再按下标错开
//! `transition-delay`，形成依次浮现的效果。背景只是装饰，
//! 最多展示 [`MAX_VISIBLE_ITEMS`] 个图块。

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Offset, SlideStyle};
use crate::content::MasonryItem;
use crate::error::ConfigError;
use crate::log::Logger;
use crate::timer::{TickSource, Timeout};

/// 最多展示的图块数
pub const MAX_VISIBLE_ITEMS: usize = 4;

/// 挂载到入场之间的延迟
pub const ENTRANCE_DELAY: Duration = Duration::from_millis(100);

/// 入场位移距离（像素）
pub const ENTRANCE_DISTANCE: f32 = 20.0;

/// 入场后的透明度（背景几乎不可见）
pub const SHOWN_OPACITY: f32 = 0.03;

/// 入场过渡时长
pub const TRANSITION_DURATION: Duration = Duration::from_millis(700);

/// 悬停时的缩放比例
pub const HOVER_SCALE: f32 = 0.98;

/// 入场方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimateFrom {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}

impl AnimateFrom {
    /// 入场前的初始位移
    pub fn initial_offset(self) -> Offset {
        match self {
            AnimateFrom::Bottom => Offset::new(0.0, ENTRANCE_DISTANCE),
            AnimateFrom::Top => Offset::new(0.0, -ENTRANCE_DISTANCE),
            AnimateFrom::Left => Offset::new(-ENTRANCE_DISTANCE, 0.0),
            AnimateFrom::Right => Offset::new(ENTRANCE_DISTANCE, 0.0),
        }
    }
}

/// 背景配置
#[derive(Debug, Clone, PartialEq)]
pub struct MasonryOptions {
    /// 相邻图块的错开时间（秒）
    pub stagger: f32,
    pub animate_from: AnimateFrom,
    /// 悬停时轻微缩小
    pub scale_on_hover: bool,
    /// 未聚焦时模糊
    pub blur_to_focus: bool,
}

impl Default for MasonryOptions {
    fn default() -> Self {
        Self {
            stagger: 0.05,
            animate_from: AnimateFrom::Bottom,
            scale_on_hover: true,
            blur_to_focus: true,
        }
    }
}

/// 单个图块的渲染描述
#[derive(Debug, Clone, PartialEq)]
pub struct MasonryTile {
    pub item: MasonryItem,
    pub style: SlideStyle,
    /// 悬停时的缩放比例，`None` 表示不缩放
    pub hover_scale: Option<f32>,
    /// 未悬停时是否模糊（悬停时清晰）
    pub blurred: bool,
}

/// 瀑布流背景
#[derive(Debug)]
pub struct MasonryBackground {
    items: Vec<MasonryItem>,
    options: MasonryOptions,
    entrance: Timeout,
    visible: bool,
    disposed: bool,
    logger: Logger,
}

impl MasonryBackground {
    /// 挂载背景，开始入场计时
    pub fn mount(
        items: &[MasonryItem],
        options: MasonryOptions,
        logger: Logger,
    ) -> Result<Self, ConfigError> {
        if !options.stagger.is_finite() || options.stagger < 0.0 {
            return Err(ConfigError::InvalidParameter {
                param: "stagger".to_string(),
                message: format!("必须是非负数，实际为 {}", options.stagger),
            });
        }

        let items: Vec<MasonryItem> = items.iter().take(MAX_VISIBLE_ITEMS).cloned().collect();
        debug!(parent: logger.span(), item_count = items.len(), "挂载瀑布流背景");

        Ok(Self {
            items,
            options,
            entrance: Timeout::new(ENTRANCE_DELAY),
            visible: false,
            disposed: false,
            logger,
        })
    }

    /// 推进虚拟时间
    ///
    /// # 返回
    /// 本次推进是否触发了入场
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.disposed || self.visible {
            return false;
        }

        if self.entrance.advance(dt) > 0 {
            self.visible = true;
            debug!(parent: self.logger.span(), "瀑布流背景入场");
            return true;
        }
        false
    }

    /// 卸载，取消未触发的入场
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.entrance.cancel();
        self.disposed = true;
    }

    /// 第 `index` 个图块的过渡延迟（`index * stagger * 1000` 毫秒）
    pub fn stagger_delay(&self, index: usize) -> Duration {
        let millis = index as f32 * (self.options.stagger * 1000.0);
        Duration::from_millis(millis.round() as u64)
    }

    /// 当前所有图块的样式
    pub fn tiles(&self) -> Vec<MasonryTile> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let delay = self.stagger_delay(index);
                let style = if self.visible {
                    SlideStyle {
                        offset: Offset::zero(),
                        opacity: SHOWN_OPACITY,
                        duration: TRANSITION_DURATION,
                        delay,
                    }
                } else {
                    SlideStyle::hidden(
                        self.options.animate_from.initial_offset(),
                        TRANSITION_DURATION,
                        delay,
                    )
                };
                MasonryTile {
                    item: item.clone(),
                    style,
                    hover_scale: self.options.scale_on_hover.then_some(HOVER_SCALE),
                    blurred: self.options.blur_to_focus,
                }
            })
            .collect()
    }

    /// 是否已入场
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// 配置
    pub fn options(&self) -> &MasonryOptions {
        &self.options
    }
}
