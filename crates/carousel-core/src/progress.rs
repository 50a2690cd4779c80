//! Fractional scroll progress and page-boundary detection

use serde::{Deserialize, Serialize};

/// Tolerance used when deciding that progress sits on a whole page
pub const PROGRESS_EPSILON: f64 = 1e-9;

/// Scroll direction along the carousel axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward higher slots
    Forward,
    /// Toward lower slots
    Backward,
}

impl Direction {
    /// +1 for forward, -1 for backward
    #[inline]
    pub fn signum(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    fn of(value: f64) -> Self {
        if value < 0.0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}

/// Result of feeding one offset sample to the tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressEvent {
    /// The offset equals the baseline
    Rest,
    /// A whole page was traversed; the baseline moved one extent along
    Crossed(Direction),
    /// Signed sub-page progress in (-1, 1)
    Partial(f64),
}

/// Converts raw offsets into progress relative to the last page boundary
///
/// `initial_offset` is the boundary the current page settled on and
/// `final_offset` the latest sample. Each call to [`sample`](Self::sample)
/// recognizes at most one page crossing; calling it again with the same
/// offset drains the remaining whole pages of a fast fling.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollProgressTracker {
    initial_offset: f64,
    final_offset: f64,
    item_extent: f64,
}

impl ScrollProgressTracker {
    /// Create a tracker for pages `item_extent` units apart
    pub fn new(item_extent: f64) -> Self {
        Self {
            initial_offset: 0.0,
            final_offset: 0.0,
            item_extent,
        }
    }

    pub fn item_extent(&self) -> f64 {
        self.item_extent
    }

    pub fn set_item_extent(&mut self, item_extent: f64) {
        self.item_extent = item_extent;
    }

    pub fn initial_offset(&self) -> f64 {
        self.initial_offset
    }

    pub fn final_offset(&self) -> f64 {
        self.final_offset
    }

    /// Distance traveled since the baseline
    #[inline]
    pub fn delta(&self) -> f64 {
        self.final_offset - self.initial_offset
    }

    /// Raw progress in pages, unbounded
    #[inline]
    pub fn progress(&self) -> f64 {
        if self.item_extent <= 0.0 {
            return 0.0;
        }
        self.delta() / self.item_extent
    }

    /// Reset both offsets to `offset`, leaving a clean state
    pub fn reset(&mut self, offset: f64) {
        self.initial_offset = offset;
        self.final_offset = offset;
    }

    /// Move the baseline and the last sample together
    ///
    /// Used when the surface is silently reseated so progress stays continuous.
    pub fn shift(&mut self, by: f64) {
        self.initial_offset += by;
        self.final_offset += by;
    }

    /// Record `offset` as the newest sample and classify it
    pub fn sample(&mut self, offset: f64) -> ProgressEvent {
        self.final_offset = offset;
        self.evaluate()
    }

    /// Classify the stored sample against the baseline
    pub fn evaluate(&mut self) -> ProgressEvent {
        let progress = self.progress();
        let magnitude = progress.abs();

        if !magnitude.is_finite() || magnitude < PROGRESS_EPSILON {
            return ProgressEvent::Rest;
        }

        let whole = magnitude.round();
        let on_boundary = (magnitude - whole).abs() < PROGRESS_EPSILON;

        if magnitude >= 1.0 || (on_boundary && whole >= 1.0) {
            let direction = Direction::of(progress);
            self.initial_offset += direction.signum() as f64 * self.item_extent;
            if (self.final_offset - self.initial_offset).abs() < PROGRESS_EPSILON * self.item_extent {
                self.initial_offset = self.final_offset;
            }
            return ProgressEvent::Crossed(direction);
        }

        ProgressEvent::Partial(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENT: f64 = 268.0;

    #[test]
    fn test_partial_progress_is_signed() {
        let mut tracker = ScrollProgressTracker::new(EXTENT);
        tracker.reset(EXTENT);

        match tracker.sample(EXTENT + EXTENT * 0.25) {
            ProgressEvent::Partial(p) => assert!((p - 0.25).abs() < 1e-12),
            other => panic!("unexpected {:?}", other),
        }
        match tracker.sample(EXTENT - EXTENT * 0.5) {
            ProgressEvent::Partial(p) => assert!((p + 0.5).abs() < 1e-12),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_exact_page_crosses_and_rebases() {
        let mut tracker = ScrollProgressTracker::new(EXTENT);
        tracker.reset(0.0);

        assert_eq!(tracker.sample(EXTENT), ProgressEvent::Crossed(Direction::Forward));
        assert_eq!(tracker.initial_offset(), EXTENT);
        assert_eq!(tracker.evaluate(), ProgressEvent::Rest);
    }

    #[test]
    fn test_nearly_whole_page_counts_as_crossing() {
        let mut tracker = ScrollProgressTracker::new(EXTENT);
        tracker.reset(0.0);
        let almost = EXTENT * (1.0 - 1e-12);

        assert_eq!(tracker.sample(almost), ProgressEvent::Crossed(Direction::Forward));
        assert_eq!(tracker.evaluate(), ProgressEvent::Rest);
    }

    #[test]
    fn test_fling_is_drained_one_page_per_call() {
        let mut tracker = ScrollProgressTracker::new(EXTENT);
        tracker.reset(0.0);

        assert_eq!(
            tracker.sample(-2.5 * EXTENT),
            ProgressEvent::Crossed(Direction::Backward)
        );
        assert_eq!(tracker.evaluate(), ProgressEvent::Crossed(Direction::Backward));
        match tracker.evaluate() {
            ProgressEvent::Partial(p) => assert!((p + 0.5).abs() < 1e-9),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_zero_delta_is_rest() {
        let mut tracker = ScrollProgressTracker::new(EXTENT);
        tracker.reset(42.0);
        assert_eq!(tracker.sample(42.0), ProgressEvent::Rest);
    }

    #[test]
    fn test_shift_preserves_progress() {
        let mut tracker = ScrollProgressTracker::new(EXTENT);
        tracker.reset(0.0);
        tracker.sample(EXTENT * 0.4);
        tracker.shift(3.0 * EXTENT);
        assert!((tracker.progress() - 0.4).abs() < 1e-12);
        assert_eq!(tracker.initial_offset(), 3.0 * EXTENT);
    }
}
