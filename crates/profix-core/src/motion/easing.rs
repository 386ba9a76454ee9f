//! Pure easing functions for progress samples
//!
//! Every curve maps input [0, 1] to output [0, 1].

use serde::{Deserialize, Serialize};

/// Easing curve applied to a progress sample before it is mapped to a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the end
    None,
    #[default]
    Linear,
    Cubic,
    Quintic,
    EaseOutExpo,
}

impl EasingType {
    /// Apply the easing function to a progress value
    ///
    /// `t` is clamped to [0, 1] first.
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = super::clamp(t, 0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOutExpo => ease_out_expo(t),
        }
    }
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t), exactly 1 at t = 1
#[inline]
pub fn ease_out_expo(t: f64) -> f64 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}
