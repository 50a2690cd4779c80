use std::time::{Duration, Instant};

use anyhow::Result;
use carousel_core::{AppConfig, CarouselController, CarouselState, ProgressPageControl};

use crate::input::Action;
use crate::theme::Theme;

/// Terminal demo state: one carousel with its page control
#[derive(Debug)]
pub struct App {
    pub config: AppConfig,
    pub controller: CarouselController<ProgressPageControl>,
    /// Labels indexed by logical item
    pub items: Vec<String>,
    pub theme: Theme,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Column of the last mouse sample while a drag is in progress
    drag_column: Option<u16>,
}

impl App {
    pub fn new(mut config: AppConfig, theme: Theme) -> Result<Self> {
        let items = if config.ui.items.is_empty() {
            (1..=config.carousel.item_count)
                .map(|n| format!("Item {}", n))
                .collect()
        } else {
            config.carousel.item_count = config.ui.items.len();
            config.ui.items.clone()
        };

        let page_control = ProgressPageControl::from_config(&config.page_control);
        let controller = CarouselController::from_app_config(&config, page_control)?;

        Ok(Self {
            config,
            controller,
            items,
            theme,
            should_quit: false,
            status_message: None,
            drag_column: None,
        })
    }

    /// Start the autoscroll schedule
    pub fn start(&mut self, now: Instant) {
        self.controller.start_autoscroll(now);
        tracing::debug!(items = self.items.len(), "Carousel started");
    }

    /// Layout units covered by one terminal column
    pub fn units_per_column(&self) -> f64 {
        if self.config.ui.units_per_column > 0.0 {
            self.config.ui.units_per_column
        } else {
            1.0
        }
    }

    pub fn item_label(&self, item: usize) -> &str {
        self.items.get(item).map(String::as_str).unwrap_or("?")
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_column.is_some()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Apply an input action at `now`
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Next => self.controller.scroll_forward(now),
            Action::Previous => self.controller.scroll_backward(now),
            Action::JumpTo(page) => {
                if page < self.items.len() {
                    self.controller.scroll_to_page(page, true, now);
                }
            }
            Action::ToggleAutoscroll => {
                if self.controller.is_autoscroll_running() {
                    self.controller.set_autoscroll_enabled(false, now);
                    self.set_status("Autoscroll stopped");
                } else {
                    self.controller.set_autoscroll_enabled(true, now);
                    if self.controller.is_autoscroll_running() {
                        self.set_status("Autoscroll resumed");
                    } else {
                        self.set_status("Autoscroll unavailable");
                    }
                }
            }
            Action::DragStart(column) => {
                let was_enabled = self.controller.is_autoscroll_enabled();
                self.controller.begin_drag();
                self.drag_column = Some(column);
                if was_enabled && !self.controller.is_autoscroll_enabled() {
                    self.set_status("Autoscroll off after drag, press a to resume");
                }
            }
            Action::DragMove(column) => {
                if let Some(previous) = self.drag_column.replace(column) {
                    // Content follows the pointer, so the offset moves against it
                    let dx = column as f64 - previous as f64;
                    self.controller.drag_by(-dx * self.units_per_column());
                }
            }
            Action::DragEnd => {
                if self.drag_column.take().is_some() {
                    self.controller.end_drag(now);
                }
            }
            Action::None => {}
        }
    }

    /// Advance animations and autoscroll
    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }

    /// How long the event loop may block before the next tick is due
    pub fn poll_timeout(&self, now: Instant, tick_rate: Duration) -> Duration {
        if self.controller.is_animating() {
            return self.controller.frame_interval();
        }
        match self.controller.autoscroll_remaining(now) {
            Some(remaining) => remaining.min(tick_rate),
            None => tick_rate,
        }
    }

    /// Short label for the status bar
    pub fn state_label(&self) -> &'static str {
        match self.controller.state() {
            CarouselState::Idle => "IDLE",
            CarouselState::Dragging => "DRAG",
            CarouselState::Settling => "SETTLE",
            CarouselState::Rebasing => "REBASE",
        }
    }
}
