//! Numeric primitives shared by every higher-level motion function.

/// Linear interpolation between two values
///
/// `t` is not restricted to `[0, 1]`; values outside extrapolate linearly.
/// Written as `a * (1 - t) + b * t` so that `t == 1` yields `b` exactly.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Bound `value` to `[min, max]`
///
/// Unlike `f64::clamp` this never panics. When `min > max` the result is
/// `min`; callers are expected to pass ordered bounds.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(0.0, 100.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 100.0, 1.0), 100.0);
        assert_eq!(lerp(3.7, -12.25, 0.0), 3.7);
        assert_eq!(lerp(3.7, -12.25, 1.0), -12.25);
    }

    #[test]
    fn test_lerp_midpoint() {
        assert_eq!(lerp(0.0, 100.0, 0.5), 50.0);
        assert_eq!(lerp(-50.0, 50.0, 0.5), 0.0);
    }

    #[test]
    fn test_lerp_extrapolates() {
        assert!((lerp(0.0, 10.0, 1.5) - 15.0).abs() < 1e-9);
        assert!((lerp(0.0, 10.0, -0.5) + 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(50.0, 0.0, 100.0), 50.0);
        assert_eq!(clamp(-10.0, 0.0, 100.0), 0.0);
        assert_eq!(clamp(150.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_clamp_reversed_bounds_does_not_panic() {
        assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn test_clamp_infinities() {
        assert_eq!(clamp(f64::INFINITY, 0.0, 1.0), 1.0);
        assert_eq!(clamp(f64::NEG_INFINITY, 0.0, 1.0), 0.0);
    }
}
