//! Offset animation controller
//!
//! Combines easing functions and timing utilities to move the carousel
//! surface toward a snap target.

use std::time::{Duration, Instant};

use super::timing::{is_complete, progress};
use crate::config::{EasingType, ScrollConfig};

/// Active settle animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    /// Animation start time
    start: Instant,
    /// Starting offset
    from: f64,
    /// Target offset
    to: f64,
    /// Animation duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
}

/// One step of an animation, produced by [`OffsetAnimator::update`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// Interpolated offset for this frame
    pub offset: f64,
    /// True on the frame that lands on the target
    pub finished: bool,
}

/// Offset animation controller
///
/// Call `scroll_to()` to begin an animation, then `update()` each frame to
/// get the interpolated offset.
#[derive(Debug, Clone)]
pub struct OffsetAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    /// Current offset (always up-to-date)
    current: f64,
}

impl Default for OffsetAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl OffsetAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0.0,
        }
    }

    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Whether snaps are animated at all
    #[inline]
    pub fn is_smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.animation_duration_ms > 0
    }

    #[inline]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.config.animation_duration_ms)
    }

    /// Frame interval the host should tick at while animating
    #[inline]
    pub fn animation_tick_duration(&self) -> Duration {
        if self.config.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.config.animation_fps as u64)
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Final offset once the running animation lands
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Set the offset immediately (no animation)
    pub fn set_offset(&mut self, offset: f64) {
        self.animation = None;
        self.current = offset;
    }

    /// Translate the current offset and any running animation
    pub fn shift(&mut self, by: f64) {
        self.current += by;
        if let Some(anim) = self.animation.as_mut() {
            anim.from += by;
            anim.to += by;
        }
    }

    /// Start an animation toward `target`
    ///
    /// Returns true when an animation was started. When smooth scrolling is
    /// disabled the offset jumps to the target and false is returned; false is
    /// also returned when the offset already equals the target.
    pub fn scroll_to(&mut self, target: f64, now: Instant) -> bool {
        if !self.is_smooth() {
            self.set_offset(target);
            return false;
        }

        if self.current == target {
            self.animation = None;
            return false;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
            duration: self.animation_duration(),
            easing: self.config.easing,
        });
        true
    }

    /// Advance the animation and return the frame for `now`
    ///
    /// Returns None when nothing is animating.
    pub fn update(&mut self, now: Instant) -> Option<AnimationFrame> {
        let anim = self.animation.as_ref()?;

        if is_complete(anim.start, anim.duration, now) {
            self.current = anim.to;
            self.animation = None;
            Some(AnimationFrame {
                offset: self.current,
                finished: true,
            })
        } else {
            let t = progress(anim.start, anim.duration, now);
            self.current = anim.easing.ease(anim.from, anim.to, t);
            Some(AnimationFrame {
                offset: self.current,
                finished: false,
            })
        }
    }

    /// Cancel any active animation and stop at the current offset
    pub fn cancel(&mut self) {
        self.animation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth(duration_ms: u64) -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            easing: EasingType::Linear,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_jump_when_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = OffsetAnimator::new(config);

        assert!(!animator.scroll_to(100.0, Instant::now()));
        assert_eq!(animator.current(), 100.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_lands_exactly_on_target() {
        let mut animator = OffsetAnimator::new(smooth(100));
        let start = Instant::now();

        assert!(animator.scroll_to(268.0, start));
        assert_eq!(animator.target(), 268.0);

        let mid = animator.update(start + Duration::from_millis(50)).unwrap();
        assert!(!mid.finished);
        assert!((mid.offset - 134.0).abs() < 1e-9);

        let last = animator.update(start + Duration::from_millis(100)).unwrap();
        assert!(last.finished);
        assert_eq!(last.offset, 268.0);
        assert!(animator.update(start + Duration::from_millis(120)).is_none());
    }

    #[test]
    fn test_scroll_to_current_offset_is_noop() {
        let mut animator = OffsetAnimator::new(smooth(100));
        animator.set_offset(50.0);
        assert!(!animator.scroll_to(50.0, Instant::now()));
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_shift_moves_running_animation() {
        let mut animator = OffsetAnimator::new(smooth(100));
        let start = Instant::now();
        animator.scroll_to(100.0, start);
        animator.shift(1000.0);
        assert_eq!(animator.current(), 1000.0);
        assert_eq!(animator.target(), 1100.0);
    }

    #[test]
    fn test_tick_duration_fallback() {
        let config = ScrollConfig {
            animation_fps: 0,
            ..Default::default()
        };
        let animator = OffsetAnimator::new(config);
        assert_eq!(animator.animation_tick_duration(), Duration::from_millis(16));
    }
}
