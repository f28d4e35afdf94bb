//! # Reveal 模块
//!
//! 字符解密动画：文本先被随机字符"加密"，随着迭代推进按方向逐步显现，
//! 最终确定性地落在目标文本上。
//!
//! ## 状态转换
//!
//! ```text
//! Idle ──activate()──► Animating ──tick() × max_iterations──► Revealed
//!  │                                                          (终态)
//!  └── target 为空时构造即 Revealed
//! ```
//!
//! 动画节奏由 [`Interval`] tick 源驱动：宿主调用 `advance(dt)`，
//! 测试可以直接调用 `tick()` 同步推进。

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::log::Logger;
use crate::timer::{Interval, TickSource};

/// 默认字符集
pub const DEFAULT_CHARSET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

/// 默认 tick 间隔（毫秒）
pub const DEFAULT_SPEED_MS: u64 = 50;

/// 默认最大迭代次数
pub const DEFAULT_MAX_ITERATIONS: u32 = 15;

/// 显现方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealDirection {
    /// 从左到右
    Left,
    /// 从右到左
    Right,
    /// 从中点向两端扩散
    #[default]
    Center,
}

impl RevealDirection {
    /// 第 `iteration` 次迭代时，`index` 位置是否已经确定
    ///
    /// `index` 必须小于 `len`。
    pub fn is_settled(self, index: usize, len: usize, iteration: u32) -> bool {
        let iteration = iteration as usize;
        match self {
            RevealDirection::Left => index <= iteration,
            RevealDirection::Right => len - 1 - index <= iteration,
            RevealDirection::Center => {
                // |i - floor(len/2)| <= iteration / 2，两边同乘 2 避免浮点
                let center = len / 2;
                2 * index.abs_diff(center) <= iteration
            }
        }
    }
}

/// 触发方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    /// 指针移入时开始
    #[default]
    Hover,
    /// 进入视口时开始
    ViewEnter,
}

/// 动画阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// 等待触发
    #[default]
    Idle,
    /// 正在播放
    Animating,
    /// 已显现（终态）
    Revealed,
}

/// 解密动画配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealOptions {
    /// 每次 tick 的间隔
    pub speed: Duration,
    /// 最大迭代次数，达到后强制显现全部字符
    pub max_iterations: u32,
    /// 随机字符集
    pub charset: String,
    /// 显现方向
    pub direction: RevealDirection,
    /// 触发方式
    pub activation: Activation,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            speed: Duration::from_millis(DEFAULT_SPEED_MS),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            charset: DEFAULT_CHARSET.to_string(),
            direction: RevealDirection::default(),
            activation: Activation::default(),
        }
    }
}

impl RevealOptions {
    /// 设置 tick 间隔
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }

    /// 设置最大迭代次数
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// 设置字符集
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// 设置显现方向
    pub fn with_direction(mut self, direction: RevealDirection) -> Self {
        self.direction = direction;
        self
    }

    /// 设置触发方式
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.speed.is_zero() {
            return Err(ConfigError::InvalidSpeed {
                speed_ms: self.speed.as_millis(),
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidMaxIterations {
                max_iterations: self.max_iterations,
            });
        }
        if self.charset.is_empty() {
            return Err(ConfigError::EmptyCharset);
        }
        Ok(())
    }
}

/// 字符解密动画
///
/// 泛型参数 `R` 是随机数源，测试中可以注入固定种子的 RNG。
#[derive(Debug)]
pub struct RevealAnimator<R = StdRng> {
    /// 目标文本（按字符存储）
    target: Vec<char>,
    /// 当前显示文本，字符数始终等于 target
    displayed: String,
    phase: RevealPhase,
    iteration: u32,
    options: RevealOptions,
    charset: Vec<char>,
    /// 播放期间的 tick 源
    ticker: Option<Interval>,
    disposed: bool,
    rng: R,
    logger: Logger,
}

impl RevealAnimator<StdRng> {
    /// 创建动画，使用系统熵初始化随机数源
    pub fn new(target: &str, options: RevealOptions, logger: Logger) -> Result<Self, ConfigError> {
        Self::with_rng(target, options, StdRng::from_entropy(), logger)
    }

    /// 创建动画，使用固定种子（可复现）
    pub fn seeded(
        target: &str,
        options: RevealOptions,
        seed: u64,
        logger: Logger,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(target, options, StdRng::seed_from_u64(seed), logger)
    }
}

impl<R: Rng> RevealAnimator<R> {
    /// 创建动画并指定随机数源
    ///
    /// 配置非法时返回错误；空文本合法，构造后直接处于 `Revealed`。
    pub fn with_rng(
        target: &str,
        options: RevealOptions,
        rng: R,
        logger: Logger,
    ) -> Result<Self, ConfigError> {
        options.validate()?;

        let phase = if target.is_empty() {
            RevealPhase::Revealed
        } else {
            RevealPhase::Idle
        };

        Ok(Self {
            target: target.chars().collect(),
            displayed: target.to_string(),
            phase,
            iteration: 0,
            charset: options.charset.chars().collect(),
            options,
            ticker: None,
            disposed: false,
            rng,
            logger,
        })
    }

    /// 开始动画
    ///
    /// 只有 `Idle` 状态会转换到 `Animating`，其余情况是空操作。
    ///
    /// # 返回
    /// 是否真的开始了动画
    pub fn activate(&mut self) -> bool {
        if self.disposed || self.phase != RevealPhase::Idle {
            return false;
        }

        self.phase = RevealPhase::Animating;
        self.iteration = 0;
        self.ticker = Some(Interval::new(self.options.speed));
        debug!(
            parent: self.logger.span(),
            len = self.target.len(),
            direction = ?self.options.direction,
            max_iterations = self.options.max_iterations,
            "解密动画开始"
        );
        true
    }

    /// 指针移入事件（仅 `Hover` 模式响应）
    pub fn on_pointer_enter(&mut self) -> bool {
        self.options.activation == Activation::Hover && self.activate()
    }

    /// 进入视口事件（仅 `ViewEnter` 模式响应）
    pub fn on_view_enter(&mut self) -> bool {
        self.options.activation == Activation::ViewEnter && self.activate()
    }

    /// 推进一次迭代
    ///
    /// # 返回
    /// - `true`: 动画仍在进行中
    /// - `false`: 动画未开始、已结束或已销毁
    pub fn tick(&mut self) -> bool {
        if self.disposed || self.phase != RevealPhase::Animating {
            return false;
        }

        self.iteration += 1;

        if self.iteration >= self.options.max_iterations {
            self.finish();
            return false;
        }

        let len = self.target.len();
        let direction = self.options.direction;
        let iteration = self.iteration;
        let mut next = String::with_capacity(self.displayed.len());
        for (index, &ch) in self.target.iter().enumerate() {
            if direction.is_settled(index, len, iteration) {
                next.push(ch);
            } else {
                let pick = self.rng.gen_range(0..self.charset.len());
                next.push(self.charset[pick]);
            }
        }
        self.displayed = next;

        trace!(parent: self.logger.span(), iteration, displayed = %self.displayed, "解密 tick");
        true
    }

    /// 推进虚拟时间，按 tick 源到期次数调用 [`tick`](Self::tick)
    ///
    /// # 返回
    /// 动画是否仍在进行中
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.disposed {
            return false;
        }

        let fired = match self.ticker.as_mut() {
            Some(ticker) => ticker.advance(dt),
            None => return false,
        };

        for _ in 0..fired {
            if !self.tick() {
                break;
            }
        }
        self.is_animating()
    }

    /// 销毁动画，取消 tick 源
    ///
    /// 可在任意阶段调用，重复调用无副作用。
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        if let Some(ticker) = self.ticker.as_mut() {
            ticker.cancel();
        }
        self.ticker = None;
        self.disposed = true;
        debug!(parent: self.logger.span(), phase = ?self.phase, "解密动画已销毁");
    }

    fn finish(&mut self) {
        self.iteration = self.options.max_iterations;
        self.displayed = self.target.iter().collect();
        self.phase = RevealPhase::Revealed;
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.cancel();
        }
        self.ticker = None;
        debug!(parent: self.logger.span(), text = %self.displayed, "解密动画完成");
    }

    /// 当前显示文本
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// 目标文本
    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// 当前阶段
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// 当前迭代次数
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// 配置
    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// 是否正在播放
    pub fn is_animating(&self) -> bool {
        self.phase == RevealPhase::Animating && !self.disposed
    }

    /// 是否已显现
    pub fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    /// 是否已销毁
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(target: &str, options: RevealOptions) -> RevealAnimator {
        RevealAnimator::seeded(target, options, 7, Logger::disabled()).unwrap()
    }

    fn run_to_end(anim: &mut RevealAnimator) -> u32 {
        let mut ticks = 0;
        while anim.tick() {
            ticks += 1;
        }
        ticks + 1
    }

    #[test]
    fn test_converges_for_all_directions() {
        let targets = ["Developer", "a", "ab", "hello world", "全栈开发者", "odd"];
        let directions = [
            RevealDirection::Left,
            RevealDirection::Right,
            RevealDirection::Center,
        ];

        for target in targets {
            for direction in directions {
                let mut anim = animator(
                    target,
                    RevealOptions::default()
                        .with_direction(direction)
                        .with_max_iterations(6),
                );
                assert!(anim.activate());

                let ticks = run_to_end(&mut anim);
                assert_eq!(ticks, 6, "{target} / {direction:?}");
                assert_eq!(anim.displayed(), target);
                assert_eq!(anim.phase(), RevealPhase::Revealed);
                assert_eq!(anim.iteration(), 6);
            }
        }
    }

    #[test]
    fn test_displayed_length_matches_target_every_tick() {
        let target = "Developer";
        let mut anim = animator(target, RevealOptions::default());
        anim.activate();

        loop {
            assert_eq!(anim.displayed().chars().count(), target.chars().count());
            assert!(anim.iteration() <= anim.options().max_iterations);
            if !anim.tick() {
                break;
            }
        }
        assert_eq!(anim.displayed(), target);
    }

    #[test]
    fn test_left_direction_settles_prefix() {
        let mut anim = animator(
            "abcdefgh",
            RevealOptions::default()
                .with_direction(RevealDirection::Left)
                .with_charset("#"),
        );
        anim.activate();

        anim.tick();
        assert_eq!(anim.displayed(), "ab######");
        anim.tick();
        assert_eq!(anim.displayed(), "abc#####");
    }

    #[test]
    fn test_right_direction_settles_suffix() {
        let mut anim = animator(
            "abcdefgh",
            RevealOptions::default()
                .with_direction(RevealDirection::Right)
                .with_charset("#"),
        );
        anim.activate();

        anim.tick();
        assert_eq!(anim.displayed(), "######gh");
        anim.tick();
        assert_eq!(anim.displayed(), "#####fgh");
    }

    #[test]
    fn test_center_direction_grows_outward() {
        let mut anim = animator(
            "abcdefg",
            RevealOptions::default()
                .with_direction(RevealDirection::Center)
                .with_charset("#"),
        );
        anim.activate();

        // 中点 index 3，iteration 1 时只有距离 0 的位置确定
        anim.tick();
        assert_eq!(anim.displayed(), "###d###");
        anim.tick();
        assert_eq!(anim.displayed(), "##cde##");
        anim.tick();
        assert_eq!(anim.displayed(), "##cde##");
        anim.tick();
        assert_eq!(anim.displayed(), "#bcdef#");
    }

    #[test]
    fn test_unsettled_positions_use_charset() {
        let charset = "xyz";
        let mut anim = animator(
            "ABCDEFGHIJ",
            RevealOptions::default()
                .with_direction(RevealDirection::Left)
                .with_charset(charset),
        );
        anim.activate();
        anim.tick();

        for ch in anim.displayed().chars().skip(2) {
            assert!(charset.contains(ch), "unexpected {ch}");
        }
    }

    #[test]
    fn test_activate_is_idempotent() {
        let options = RevealOptions::default().with_direction(RevealDirection::Left);
        let mut once = animator("Portfolio", options.clone());
        let mut twice = animator("Portfolio", options);

        assert!(once.activate());
        assert!(twice.activate());
        assert!(!twice.activate());

        loop {
            let a = once.tick();
            let b = twice.tick();
            assert_eq!(a, b);
            assert_eq!(once.displayed(), twice.displayed());
            if !a {
                break;
            }
        }
    }

    #[test]
    fn test_activate_after_revealed_is_noop() {
        let mut anim = animator("ok", RevealOptions::default().with_max_iterations(1));
        anim.activate();
        anim.tick();
        assert!(anim.is_revealed());

        assert!(!anim.activate());
        assert_eq!(anim.phase(), RevealPhase::Revealed);
        assert!(!anim.tick());
        assert_eq!(anim.displayed(), "ok");
    }

    #[test]
    fn test_tick_before_activate_is_noop() {
        let mut anim = animator("idle", RevealOptions::default());
        assert!(!anim.tick());
        assert_eq!(anim.iteration(), 0);
        assert_eq!(anim.phase(), RevealPhase::Idle);
        assert_eq!(anim.displayed(), "idle");
    }

    #[test]
    fn test_empty_target_is_revealed() {
        let mut anim = animator("", RevealOptions::default());
        assert_eq!(anim.phase(), RevealPhase::Revealed);
        assert_eq!(anim.displayed(), "");
        assert!(!anim.activate());
        assert_eq!(anim.iteration(), 0);
    }

    #[test]
    fn test_single_iteration_settles_on_first_tick() {
        let mut anim = animator(
            "Center of attention",
            RevealOptions::default().with_max_iterations(1),
        );
        anim.activate();
        assert!(!anim.tick());
        assert_eq!(anim.displayed(), "Center of attention");
        assert!(anim.is_revealed());
    }

    #[test]
    fn test_dispose_stops_all_mutation() {
        let mut anim = animator("Developer", RevealOptions::default());
        anim.activate();
        anim.tick();
        let snapshot = anim.displayed().to_string();
        let phase = anim.phase();

        anim.dispose();
        anim.dispose();
        assert!(anim.is_disposed());

        for _ in 0..50 {
            assert!(!anim.tick());
            assert!(!anim.advance(Duration::from_millis(50)));
        }
        assert_eq!(anim.displayed(), snapshot);
        assert_eq!(anim.phase(), phase);
        assert!(!anim.activate());
    }

    #[test]
    fn test_advance_drives_ticks_by_speed() {
        let mut anim = animator(
            "Developer",
            RevealOptions::default()
                .with_speed(Duration::from_millis(50))
                .with_max_iterations(4),
        );

        // 未激活时推进无效
        assert!(!anim.advance(Duration::from_millis(500)));
        assert_eq!(anim.iteration(), 0);

        anim.activate();
        assert!(anim.advance(Duration::from_millis(49)));
        assert_eq!(anim.iteration(), 0);
        assert!(anim.advance(Duration::from_millis(1)));
        assert_eq!(anim.iteration(), 1);

        // 一次推进足够长，多余的到期次数被丢弃
        assert!(!anim.advance(Duration::from_millis(1000)));
        assert_eq!(anim.iteration(), 4);
        assert_eq!(anim.displayed(), "Developer");
    }

    #[test]
    fn test_activation_mode_filters_events() {
        let mut hover = animator("hover", RevealOptions::default());
        assert!(!hover.on_view_enter());
        assert!(hover.on_pointer_enter());

        let mut view = animator(
            "view",
            RevealOptions::default().with_activation(Activation::ViewEnter),
        );
        assert!(!view.on_pointer_enter());
        assert_eq!(view.phase(), RevealPhase::Idle);
        assert!(view.on_view_enter());
        assert_eq!(view.phase(), RevealPhase::Animating);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let err = RevealAnimator::new(
            "x",
            RevealOptions::default().with_max_iterations(0),
            Logger::disabled(),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidMaxIterations { max_iterations: 0 });

        let err = RevealAnimator::new(
            "x",
            RevealOptions::default().with_speed(Duration::ZERO),
            Logger::disabled(),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidSpeed { speed_ms: 0 });

        let err = RevealAnimator::new(
            "x",
            RevealOptions::default().with_charset(""),
            Logger::disabled(),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::EmptyCharset);
    }

    #[test]
    fn test_direction_deserialize() {
        let direction: RevealDirection = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(direction, RevealDirection::Right);
        let activation: Activation = serde_json::from_str("\"view_enter\"").unwrap();
        assert_eq!(activation, Activation::ViewEnter);
    }
}
