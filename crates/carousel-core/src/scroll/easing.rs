//! Settle curves
//!
//! Every curve is monotonic on [0, 1] and ends at exactly 1, so a snap never
//! passes its target slot and the last frame lands on it.

use super::timing::lerp;
use crate::config::EasingType;

impl EasingType {
    /// Eased fraction of the settle completed at time fraction `t`
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            // Jump cut: hold the start offset, then land
            EasingType::None => t.floor(),
            EasingType::Linear => t,
            EasingType::Cubic => power_out(t, 3),
            EasingType::Quintic => power_out(t, 5),
            EasingType::EaseOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - (-10.0 * t).exp2()
                }
            }
        }
    }

    /// Offset between `from` and `to` at time fraction `t`
    #[inline]
    pub fn ease(&self, from: f64, to: f64, t: f64) -> f64 {
        lerp(from, to, self.apply(t))
    }
}

/// 1 - (1 - t)^n
#[inline]
fn power_out(t: f64, n: i32) -> f64 {
    1.0 - (1.0 - t).powi(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [EasingType; 5] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_curves_start_and_land() {
        for easing in CURVES {
            assert!(easing.apply(0.0).abs() < 0.001, "{:?} at t=0", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?} at t=1", easing);
        }
        assert_eq!(EasingType::None.apply(0.99), 0.0);
    }

    #[test]
    fn test_curves_are_monotonic_without_overshoot() {
        for easing in CURVES {
            let mut prev = 0.0;
            for i in 0..=100 {
                let t = i as f64 / 100.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                assert!(v <= 1.0, "{:?} overshoots at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_between_offsets() {
        assert!((EasingType::Linear.ease(256.0, 512.0, 0.25) - 320.0).abs() < 1e-9);
        // 1 - 0.5^3
        assert!((EasingType::Cubic.ease(0.0, 100.0, 0.5) - 87.5).abs() < 1e-9);
        assert_eq!(EasingType::Quintic.ease(512.0, 256.0, 1.0), 256.0);
        assert_eq!(EasingType::Cubic.ease(10.0, 20.0, -1.0), 10.0);
    }
}
