//! # Timer 模块
//!
//! Tick 源抽象。
//!
//! ## 核心设计理念
//!
//! core 不知道真实时间，所有定时行为都建模成"由宿主推进的 tick 源"：
//! - 宿主每帧调用 `advance(dt)`，tick 源返回这段时间内到期的次数
//! - 测试直接推进虚拟时间，不需要真实等待
//! - `cancel()` 之后永远不会再到期
//!
//! ```text
//! Host                         TickSource
//!   │── advance(dt) ──────────►│
//!   │◄── fired: u32 ───────────│
//! ```

use std::time::Duration;

/// Tick 源接口
pub trait TickSource {
    /// 推进虚拟时间
    ///
    /// # 返回
    /// 本次推进中到期的次数（已取消时恒为 0）
    fn advance(&mut self, dt: Duration) -> u32;

    /// 取消，之后不再到期
    fn cancel(&mut self);

    /// 是否已取消
    fn is_cancelled(&self) -> bool;

    /// 是否还会继续到期
    fn is_pending(&self) -> bool;
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// 周期定时器（对应 `setInterval`）
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
    cancelled: bool,
}

impl Interval {
    /// 创建周期定时器
    ///
    /// `period` 为零时视为已取消，避免无限到期。
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
            cancelled: period.is_zero(),
        }
    }
}

impl TickSource for Interval {
    fn advance(&mut self, dt: Duration) -> u32 {
        if self.cancelled {
            return 0;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        let period = self.period.as_nanos();
        let elapsed = self.elapsed.as_nanos();
        let rest = elapsed % period;
        // rest < period，秒数部分一定能放进 u64
        self.elapsed = Duration::new((rest / NANOS_PER_SEC) as u64, (rest % NANOS_PER_SEC) as u32);
        u32::try_from(elapsed / period).unwrap_or(u32::MAX)
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn is_pending(&self) -> bool {
        !self.cancelled
    }
}

/// 一次性定时器（对应 `setTimeout`）
#[derive(Debug, Clone)]
pub struct Timeout {
    delay: Duration,
    elapsed: Duration,
    fired: bool,
    cancelled: bool,
}

impl Timeout {
    /// 创建一次性定时器
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            elapsed: Duration::ZERO,
            fired: false,
            cancelled: false,
        }
    }

    /// 剩余时间
    pub fn remaining(&self) -> Duration {
        self.delay.saturating_sub(self.elapsed)
    }
}

impl TickSource for Timeout {
    fn advance(&mut self, dt: Duration) -> u32 {
        if self.cancelled || self.fired {
            return 0;
        }

        self.elapsed += dt;
        if self.elapsed >= self.delay {
            self.fired = true;
            1
        } else {
            0
        }
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn is_pending(&self) -> bool {
        !self.cancelled && !self.fired
    }
}
