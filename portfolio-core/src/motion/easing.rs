//! # Easing 模块
//!
//! 缓动函数，用于平滑滚动和过渡的时间插值。

/// 缓动函数类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingFunction {
    /// 线性（匀速）
    Linear,
    /// 缓出（Cubic）
    EaseOut,
    /// 缓入缓出（Cubic）
    EaseInOut,
    /// 指数缓出
    ///
    /// 平滑滚动默认使用，公式 `min(1, 1.001 - 2^(-10t))`。
    #[default]
    EaseOutExpo,
}

impl EasingFunction {
    /// 计算缓动值
    ///
    /// # 参数
    /// - `t`: 时间进度 (0.0 - 1.0)
    ///
    /// # 返回
    /// - 缓动后的进度值 (0.0 - 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOut => 1.0 - (1.0 - t).powi(3),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EasingFunction::EaseOutExpo => ease_out_expo(t),
        }
    }
}

/// 指数缓出
///
/// t = 0 时结果约为 0.001，终点钳制到 1。
fn ease_out_expo(t: f32) -> f32 {
    (1.001 - 2.0_f32.powf(-10.0 * t)).min(1.0)
}
