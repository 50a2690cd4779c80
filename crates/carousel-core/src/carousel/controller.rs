use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use super::autoscroll::AutoscrollTimer;
use crate::config::{AppConfig, AutoscrollConfig, CarouselConfig, ScrollConfig};
use crate::mapper::LoopIndexMapper;
use crate::page_control::PageControlInput;
use crate::progress::{Direction, ProgressEvent, ScrollProgressTracker, PROGRESS_EPSILON};
use crate::scroll::OffsetAnimator;

/// Interaction phase of the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselState {
    /// Resting exactly on a slot
    Idle,
    /// The user is moving the surface
    Dragging,
    /// An animated snap is in flight
    Settling,
    /// Jumping silently from a phantom to its real slot
    Rebasing,
}

/// Placement of one padded slot relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlotFrame {
    pub slot: usize,
    /// Logical item rendered in this slot
    pub item: usize,
    /// Leading edge relative to the viewport's leading edge
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub phantom: bool,
}

/// Drives an infinite-looping carousel
///
/// The host forwards gestures (`begin_drag`, `drag_by`, `end_drag`) and calls
/// [`tick`](Self::tick) from its event loop; the controller moves its surface,
/// tracks page crossings and pushes `(progress, page)` to the page control.
#[derive(Debug)]
pub struct CarouselController<P: PageControlInput> {
    config: CarouselConfig,
    mapper: LoopIndexMapper,
    tracker: ScrollProgressTracker,
    surface: OffsetAnimator,
    state: CarouselState,
    current_slot: usize,
    settle_target: Option<usize>,
    autoscroll: AutoscrollTimer,
    autoscroll_enabled: bool,
    /// A fractional progress was pushed since the last settled push
    progress_in_flight: bool,
    page_control: P,
}

impl<P: PageControlInput> CarouselController<P> {
    /// Create a controller seated on the configured initial slot
    pub fn new(config: CarouselConfig, page_control: P) -> crate::Result<Self> {
        config.validate()?;
        let autoscroll = AutoscrollConfig::default();
        let mut controller = Self {
            mapper: LoopIndexMapper::new(config.item_count),
            tracker: ScrollProgressTracker::new(config.item_extent()),
            surface: OffsetAnimator::default(),
            state: CarouselState::Idle,
            current_slot: 0,
            settle_target: None,
            autoscroll: AutoscrollTimer::new(Duration::from_millis(autoscroll.interval_ms)),
            autoscroll_enabled: autoscroll.enabled,
            progress_in_flight: false,
            page_control,
            config,
        };
        controller.page_control.set_number_of_pages(controller.mapper.count());
        controller.seat(controller.config.initial_slot);
        Ok(controller)
    }

    /// Create a controller from every relevant section of the app config
    pub fn from_app_config(config: &AppConfig, page_control: P) -> crate::Result<Self> {
        Ok(Self::new(config.carousel.clone(), page_control)?
            .with_autoscroll(&config.autoscroll)
            .with_scroll(config.scroll.clone()))
    }

    /// Set autoscroll interval and enablement
    pub fn with_autoscroll(mut self, config: &AutoscrollConfig) -> Self {
        self.autoscroll = AutoscrollTimer::new(Duration::from_millis(config.interval_ms));
        self.autoscroll_enabled = config.enabled;
        self
    }

    /// Set the settle animation
    pub fn with_scroll(mut self, config: ScrollConfig) -> Self {
        self.surface.set_config(config);
        self
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn mapper(&self) -> &LoopIndexMapper {
        &self.mapper
    }

    pub fn tracker(&self) -> &ScrollProgressTracker {
        &self.tracker
    }

    pub fn current_slot(&self) -> usize {
        self.current_slot
    }

    /// Logical page derived from the current slot; None without items
    pub fn current_page(&self) -> Option<usize> {
        self.mapper.content_index(self.current_slot)
    }

    /// Current surface offset
    pub fn offset(&self) -> f64 {
        self.surface.current()
    }

    pub fn page_control(&self) -> &P {
        &self.page_control
    }

    pub fn page_control_mut(&mut self) -> &mut P {
        &mut self.page_control
    }

    pub fn into_page_control(self) -> P {
        self.page_control
    }

    pub fn is_animating(&self) -> bool {
        self.surface.is_animating()
    }

    /// Frame interval to tick at while a settle is running
    pub fn frame_interval(&self) -> Duration {
        self.surface.animation_tick_duration()
    }

    pub fn is_autoscroll_enabled(&self) -> bool {
        self.autoscroll_enabled
    }

    pub fn is_autoscroll_running(&self) -> bool {
        self.autoscroll.is_running()
    }

    /// Time until the next automatic advance
    pub fn autoscroll_remaining(&self, now: Instant) -> Option<Duration> {
        self.autoscroll.remaining(now)
    }

    /// Leading offset of a padded slot
    #[inline]
    pub fn slot_offset(&self, slot: usize) -> f64 {
        slot as f64 * self.config.item_extent()
    }

    fn max_offset(&self) -> f64 {
        self.slot_offset(self.mapper.slot_count().saturating_sub(1))
    }

    /// Replace geometry and item count
    ///
    /// A new item count rebuilds the padded range and reseats on the initial
    /// slot; a geometry-only change keeps the current slot.
    pub fn update_config(&mut self, config: CarouselConfig) -> crate::Result<()> {
        config.validate()?;
        let count_changed = config.item_count != self.mapper.count();
        let slot = if count_changed {
            config.initial_slot
        } else {
            self.current_slot
        };

        self.config = config;
        self.tracker.set_item_extent(self.config.item_extent());
        if count_changed {
            self.mapper = LoopIndexMapper::new(self.config.item_count);
            self.page_control.set_number_of_pages(self.mapper.count());
            info!(items = self.mapper.count(), "Carousel items changed");
        }
        self.seat(slot);
        if self.mapper.is_empty() {
            self.autoscroll.cancel();
        }
        Ok(())
    }

    pub fn set_scroll_config(&mut self, config: ScrollConfig) {
        self.surface.set_config(config);
    }

    /// Reconfigure autoscroll; enabling it again after a drag restarts the timer
    pub fn set_autoscroll_config(&mut self, config: &AutoscrollConfig, now: Instant) {
        self.autoscroll
            .set_interval(Duration::from_millis(config.interval_ms), now);
        self.set_autoscroll_enabled(config.enabled, now);
    }

    pub fn set_autoscroll_enabled(&mut self, enabled: bool, now: Instant) {
        self.autoscroll_enabled = enabled;
        if enabled {
            self.start_autoscroll(now);
        } else {
            self.stop_autoscroll();
        }
    }

    /// Begin automatic advancing, if enabled
    pub fn start_autoscroll(&mut self, now: Instant) {
        if !self.autoscroll_enabled || self.mapper.is_empty() {
            return;
        }
        self.autoscroll.start(now);
        debug!(
            interval_ms = self.autoscroll.interval().as_millis() as u64,
            "Autoscroll started"
        );
    }

    pub fn stop_autoscroll(&mut self) {
        if self.autoscroll.is_running() {
            debug!("Autoscroll stopped");
        }
        self.autoscroll.cancel();
    }

    /// The user put a finger down
    ///
    /// Cancels and disables autoscroll and interrupts any settle in flight.
    pub fn begin_drag(&mut self) {
        if self.mapper.is_empty() || self.state == CarouselState::Dragging {
            return;
        }
        self.stop_autoscroll();
        self.autoscroll_enabled = false;
        self.surface.cancel();
        self.settle_target = None;
        self.tracker.reset(self.slot_offset(self.current_slot));
        self.transition(CarouselState::Dragging);
        self.process_offset(self.surface.current());
    }

    /// Move the surface by `delta` units (positive moves toward later items)
    pub fn drag_by(&mut self, delta: f64) {
        if self.state != CarouselState::Dragging || !delta.is_finite() {
            return;
        }
        let mut remaining = delta;
        // Every pass but the last ends in a reseat after moving at least one
        // extent, so the drag is used up within this many passes.
        let passes = (delta.abs() / self.config.item_extent()).ceil() as usize + 2;
        for _ in 0..passes {
            let from = self.surface.current();
            let to = (from + remaining).clamp(0.0, self.max_offset());
            remaining -= to - from;
            self.surface.set_offset(to);
            self.process_offset(to);

            let reseated = self.surface.current() != to;
            if remaining.abs() < PROGRESS_EPSILON || !reseated {
                break;
            }
        }
    }

    /// Move the surface to an absolute offset
    pub fn drag_to(&mut self, offset: f64) {
        self.drag_by(offset - self.surface.current());
    }

    /// The user lifted the finger; snap one slot in the direction of travel
    pub fn end_drag(&mut self, now: Instant) {
        if self.state != CarouselState::Dragging {
            return;
        }
        let delta = self.tracker.delta();
        let target = if delta > PROGRESS_EPSILON {
            self.current_slot + 1
        } else if delta < -PROGRESS_EPSILON {
            self.current_slot.saturating_sub(1)
        } else {
            self.current_slot
        };
        self.settle_to(target, now);
    }

    /// Scroll to a logical page; out-of-range pages are clamped
    ///
    /// Requesting the slot that is already being settled on does nothing.
    pub fn scroll_to_page(&mut self, page: usize, animated: bool, now: Instant) {
        if self.state == CarouselState::Dragging {
            return;
        }
        let Some(slot) = self.mapper.to_slot(page) else {
            return;
        };
        if animated {
            self.request_settle(slot, now);
        } else {
            self.surface.cancel();
            self.seat(slot);
        }
    }

    /// Animate one slot forward
    pub fn scroll_forward(&mut self, now: Instant) {
        if self.state == CarouselState::Dragging || self.mapper.is_empty() {
            return;
        }
        let from = self.settle_target.unwrap_or(self.current_slot);
        if from + 1 < self.mapper.slot_count() {
            self.request_settle(from + 1, now);
        }
    }

    /// Animate one slot backward
    pub fn scroll_backward(&mut self, now: Instant) {
        if self.state == CarouselState::Dragging || self.mapper.is_empty() {
            return;
        }
        let from = self.settle_target.unwrap_or(self.current_slot);
        if from > 0 {
            self.request_settle(from - 1, now);
        }
    }

    /// Advance animations and the autoscroll schedule to `now`
    pub fn tick(&mut self, now: Instant) {
        if let Some(frame) = self.surface.update(now) {
            self.process_offset(frame.offset);
            if frame.finished {
                self.finish_settle();
            }
        }

        if self.autoscroll.poll(now) {
            self.on_autoscroll(now);
        }
    }

    /// Slots intersecting a viewport `viewport_width` units wide
    pub fn visible_slots(&self, viewport_width: f64) -> Vec<SlotFrame> {
        let offset = self.surface.current();
        self.mapper
            .slots()
            .filter_map(|(slot, item)| {
                let x = self.slot_offset(slot) - offset;
                let visible = x + self.config.item_width > 0.0 && x < viewport_width;
                visible.then_some(SlotFrame {
                    slot,
                    item,
                    x,
                    width: self.config.item_width,
                    height: self.config.item_height,
                    phantom: self.mapper.is_phantom(slot),
                })
            })
            .collect()
    }

    fn on_autoscroll(&mut self, now: Instant) {
        if !self.autoscroll_enabled || self.state != CarouselState::Idle {
            debug!(state = ?self.state, "Skipping autoscroll tick");
            return;
        }
        debug!(slot = self.current_slot, "Autoscroll advancing");
        self.scroll_forward(now);
    }

    fn request_settle(&mut self, slot: usize, now: Instant) {
        if self.state == CarouselState::Settling && self.settle_target == Some(slot) {
            return;
        }
        self.settle_to(slot, now);
    }

    fn settle_to(&mut self, slot: usize, now: Instant) {
        let slot = slot.min(self.mapper.slot_count().saturating_sub(1));
        let offset = self.slot_offset(slot);
        self.settle_target = Some(slot);
        self.transition(CarouselState::Settling);

        if (self.surface.current() - offset).abs() < PROGRESS_EPSILON * self.config.item_extent() {
            self.surface.set_offset(offset);
        }
        if !self.surface.scroll_to(offset, now) {
            self.process_offset(self.surface.current());
            self.finish_settle();
        }
    }

    fn finish_settle(&mut self) {
        self.settle_target = None;
        if self.mapper.is_phantom(self.current_slot) {
            self.transition(CarouselState::Rebasing);
            self.reseat_from_phantom();
        }
        self.transition(CarouselState::Idle);
        self.tracker.reset(self.surface.current());
        self.push_settled();
    }

    /// Per-sample update shared by drags and animation frames
    fn process_offset(&mut self, offset: f64) {
        let mut event = self.tracker.sample(offset);
        loop {
            match event {
                ProgressEvent::Rest => {
                    if self.progress_in_flight {
                        self.progress_in_flight = false;
                        self.page_control.set_progress(1.0);
                    }
                    break;
                }
                ProgressEvent::Crossed(direction) => {
                    self.step_slot(direction);
                    if self.state == CarouselState::Dragging {
                        self.reseat_from_phantom();
                    }
                    self.push_settled();
                    event = self.tracker.evaluate();
                }
                ProgressEvent::Partial(progress) => {
                    self.progress_in_flight = true;
                    self.page_control.set_progress(progress);
                    break;
                }
            }
        }
    }

    fn step_slot(&mut self, direction: Direction) {
        let last = self.mapper.slot_count().saturating_sub(1);
        self.current_slot = match direction {
            Direction::Forward => (self.current_slot + 1).min(last),
            Direction::Backward => self.current_slot.saturating_sub(1),
        };
        debug!(slot = self.current_slot, ?direction, "Crossed page boundary");
    }

    /// Jump from a phantom to the real slot showing the same item
    ///
    /// Offset and tracker move by the same amount, so the visible content and
    /// the fractional progress are unchanged.
    fn reseat_from_phantom(&mut self) {
        let Some(target) = self.mapper.wrap_target(self.current_slot) else {
            return;
        };
        let shift = self.slot_offset(target) - self.slot_offset(self.current_slot);
        self.surface.shift(shift);
        self.tracker.shift(shift);
        debug!(from = self.current_slot, to = target, "Reseated from phantom slot");
        self.current_slot = target;
    }

    /// Put the surface at rest on `slot` without animation
    fn seat(&mut self, slot: usize) {
        self.settle_target = None;
        self.current_slot = if self.mapper.is_empty() {
            0
        } else {
            let slot = slot.min(self.mapper.count() + 1);
            self.mapper.wrap_target(slot).unwrap_or(slot)
        };
        let offset = self.slot_offset(self.current_slot);
        self.surface.set_offset(offset);
        self.tracker.reset(offset);
        self.transition(CarouselState::Idle);
        self.push_settled();
    }

    fn push_settled(&mut self) {
        let Some(page) = self.current_page() else {
            return;
        };
        self.progress_in_flight = false;
        self.page_control.set_progress(1.0);
        self.page_control.set_current_page(page);
    }

    fn transition(&mut self, to: CarouselState) {
        if self.state != to {
            debug!(from = ?self.state, ?to, "Carousel state change");
            self.state = to;
        }
    }
}
