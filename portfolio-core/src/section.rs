//! # Section 模块
//!
//! 页面分区的组合：一个 [`ViewportTrigger`] 包裹若干 [`RevealAnimator`]。
//!
//! 分区变为可见时，向所有 `ViewEnter` 模式的标题投递进入视口事件；
//! `Hover` 模式的标题仍然只响应指针事件。两类组件之间没有共享状态，
//! 分区只负责转发事件和推进时间。

use std::time::Duration;

use rand::Rng;
use rand::rngs::StdRng;

use crate::log::Logger;
use crate::reveal::RevealAnimator;
use crate::viewport::{Rect, ViewportTrigger};

/// 带滑入效果和解密标题的分区
#[derive(Debug)]
pub struct RevealSection<R = StdRng> {
    trigger: ViewportTrigger,
    headlines: Vec<RevealAnimator<R>>,
    /// 是否已经向标题投递过进入视口事件
    entered: bool,
    logger: Logger,
}

impl<R: Rng> RevealSection<R> {
    /// 组合触发器与标题
    pub fn new(trigger: ViewportTrigger, headlines: Vec<RevealAnimator<R>>, logger: Logger) -> Self {
        Self {
            trigger,
            headlines,
            entered: false,
            logger,
        }
    }

    /// 相交比例事件
    pub fn on_intersection(&mut self, ratio: f64) {
        self.trigger.on_intersection(ratio);
        self.propagate_visibility();
    }

    /// 几何变化事件
    pub fn on_layout(&mut self, element: Rect, viewport: Rect) {
        self.trigger.on_layout(element, viewport);
        self.propagate_visibility();
    }

    /// 指针移入第 `index` 个标题
    pub fn on_pointer_enter(&mut self, index: usize) -> bool {
        self.headlines
            .get_mut(index)
            .is_some_and(|headline| headline.on_pointer_enter())
    }

    /// 推进虚拟时间
    ///
    /// 先推进已在播放的标题，再处理触发器：本次推进中刚被激活的标题
    /// 从激活时刻开始计时。
    pub fn advance(&mut self, dt: Duration) {
        for headline in &mut self.headlines {
            headline.advance(dt);
        }
        self.trigger.advance(dt);
        self.propagate_visibility();
    }

    /// 卸载分区：断开观察并停止所有标题动画
    pub fn dispose(&mut self) {
        self.trigger.dispose();
        for headline in &mut self.headlines {
            headline.dispose();
        }
    }

    fn propagate_visibility(&mut self) {
        if self.entered || !self.trigger.is_visible() {
            return;
        }

        self.entered = true;
        let started = self
            .headlines
            .iter_mut()
            .map(|headline| headline.on_view_enter())
            .filter(|started| *started)
            .count();
        tracing::debug!(parent: self.logger.span(), started, "分区进入视口");
    }

    pub fn trigger(&self) -> &ViewportTrigger {
        &self.trigger
    }

    pub fn headlines(&self) -> &[RevealAnimator<R>] {
        &self.headlines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{Activation, RevealOptions, RevealPhase};
    use crate::viewport::{ElementId, ViewportOptions};

    fn section(delay_ms: u64) -> RevealSection {
        let trigger = ViewportTrigger::observe(
            ElementId(7),
            ViewportOptions::default().with_delay(Duration::from_millis(delay_ms)),
            Logger::disabled(),
        )
        .unwrap();
        let on_view = RevealAnimator::seeded(
            "Projects",
            RevealOptions::default()
                .with_activation(Activation::ViewEnter)
                .with_max_iterations(3),
            1,
            Logger::disabled(),
        )
        .unwrap();
        let on_hover =
            RevealAnimator::seeded("Hover me", RevealOptions::default(), 2, Logger::disabled())
                .unwrap();
        RevealSection::new(trigger, vec![on_view, on_hover], Logger::disabled())
    }

    #[test]
    fn test_view_enter_starts_only_view_headlines() {
        let mut s = section(0);
        s.on_intersection(0.5);

        assert!(s.trigger().is_visible());
        assert_eq!(s.headlines()[0].phase(), RevealPhase::Animating);
        assert_eq!(s.headlines()[1].phase(), RevealPhase::Idle);

        s.advance(Duration::from_millis(150));
        assert_eq!(s.headlines()[0].displayed(), "Projects");
        assert!(s.headlines()[0].is_revealed());
    }

    #[test]
    fn test_delay_postpones_headlines() {
        let mut s = section(100);
        s.on_intersection(1.0);
        assert_eq!(s.headlines()[0].phase(), RevealPhase::Idle);

        s.advance(Duration::from_millis(100));
        assert_eq!(s.headlines()[0].phase(), RevealPhase::Animating);
    }

    #[test]
    fn test_headline_starts_counting_at_activation() {
        let mut s = section(100);
        s.on_intersection(1.0);

        s.advance(Duration::from_millis(100));
        assert!(s.headlines()[0].is_animating());
        assert_eq!(s.headlines()[0].iteration(), 0);

        s.advance(Duration::from_millis(50));
        assert_eq!(s.headlines()[0].iteration(), 1);
    }

    #[test]
    fn test_pointer_enter_by_index() {
        let mut s = section(0);
        assert!(!s.on_pointer_enter(0));
        assert!(s.on_pointer_enter(1));
        assert!(!s.on_pointer_enter(5));
    }

    #[test]
    fn test_dispose_stops_everything() {
        let mut s = section(0);
        s.on_intersection(1.0);
        s.dispose();
        let before = s.headlines()[0].displayed().to_string();

        s.advance(Duration::from_secs(10));
        assert_eq!(s.headlines()[0].displayed(), before);
        assert!(s.headlines().iter().all(|h| h.is_disposed()));
    }
}
