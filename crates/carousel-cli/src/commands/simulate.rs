use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use serde::Serialize;

use carousel_core::page_control::{Dot, PageControlStyle, Size};
use carousel_core::{
    AppConfig, CarouselController, PageControlInput, PageControlUpdate, ProgressPageControl,
};

/// Upper bound on animation frames spent settling one gesture
const MAX_SETTLE_FRAMES: usize = 10_000;

#[derive(Debug, Clone, Default)]
pub struct SimulateOptions {
    pub items: Option<usize>,
    /// Drag distances in pages
    pub drags: Vec<f64>,
    pub steps: u32,
    pub autoscroll_beats: u32,
    pub json: bool,
}

/// Page control that records every push before applying it
#[derive(Debug, Default)]
struct RecordingControl {
    control: ProgressPageControl,
    updates: Vec<PageControlUpdate>,
}

impl RecordingControl {
    fn take(&mut self) -> Vec<PageControlUpdate> {
        std::mem::take(&mut self.updates)
    }
}

impl PageControlInput for RecordingControl {
    fn set_progress(&mut self, progress: f64) {
        self.updates.push(PageControlUpdate::Progress(progress));
        self.control.set_progress(progress);
    }

    fn set_current_page(&mut self, page: usize) {
        self.updates.push(PageControlUpdate::CurrentPage(page));
        self.control.set_current_page(page);
    }

    fn set_number_of_pages(&mut self, count: usize) {
        self.updates.push(PageControlUpdate::NumberOfPages(count));
        self.control.set_number_of_pages(count);
    }
}

/// What one gesture did to the page control
#[derive(Debug, Clone, Serialize)]
pub struct GestureReport {
    pub gesture: &'static str,
    /// Pages dragged, or the autoscroll beat number
    pub amount: f64,
    pub updates: Vec<PageControlUpdate>,
    pub page: Option<usize>,
    pub slot: usize,
    pub dots: Vec<Dot>,
}

struct Simulation {
    controller: CarouselController<RecordingControl>,
    now: Instant,
}

impl Simulation {
    fn new(config: &AppConfig) -> Result<Self> {
        let mut control = RecordingControl::default();
        control.control = ProgressPageControl::from_config(&config.page_control);
        let controller = CarouselController::from_app_config(config, control)?;
        Ok(Self {
            controller,
            now: Instant::now(),
        })
    }

    fn report(&mut self, gesture: &'static str, amount: f64) -> GestureReport {
        let updates = self.controller.page_control_mut().take();
        let page = self.controller.current_page();
        let slot = self.controller.current_slot();

        let control = &mut self.controller.page_control_mut().control;
        let bounds = row_bounds(control.style(), control.number_of_pages());
        control.set_bounds(bounds);
        let dots = control.layout().dots.clone();

        GestureReport {
            gesture,
            amount,
            updates,
            page,
            slot,
            dots,
        }
    }

    fn settle(&mut self) {
        let frame = self.controller.frame_interval();
        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.controller.is_animating() {
                return;
            }
            self.now += frame;
            self.controller.tick(self.now);
        }
        tracing::warn!("Settle did not finish");
    }

    fn drag(&mut self, pages: f64, steps: u32) {
        let extent = self.controller.config().item_extent();
        let steps = steps.max(1);
        let step = pages * extent / steps as f64;

        self.controller.begin_drag();
        for _ in 0..steps {
            self.controller.drag_by(step);
        }
        self.controller.end_drag(self.now);
        self.settle();
    }

    /// Wait for the next autoscroll beat and let it settle
    fn beat(&mut self) -> Result<()> {
        let Some(remaining) = self.controller.autoscroll_remaining(self.now) else {
            bail!("autoscroll is not running (interval must be positive)");
        };
        self.now += remaining.max(Duration::from_millis(1));
        self.controller.tick(self.now);
        self.settle();
        Ok(())
    }
}

/// Replay the scripted gestures and collect one report per gesture
pub fn simulate(config: &AppConfig, options: &SimulateOptions) -> Result<Vec<GestureReport>> {
    let mut config = config.clone();
    if let Some(items) = options.items {
        config.carousel.item_count = items;
    }
    // A drag would disable autoscroll before the beats run
    config.autoscroll.enabled = false;

    let mut sim = Simulation::new(&config)?;
    let mut reports = vec![sim.report("init", 0.0)];

    for &pages in &options.drags {
        if !pages.is_finite() {
            tracing::warn!(pages, "Skipping non-finite drag");
            continue;
        }
        sim.drag(pages, options.steps);
        reports.push(sim.report("drag", pages));
    }

    if options.autoscroll_beats > 0 {
        let now = sim.now;
        sim.controller.set_autoscroll_enabled(true, now);
        for beat in 1..=options.autoscroll_beats {
            sim.beat()?;
            reports.push(sim.report("autoscroll", beat as f64));
        }
    }

    Ok(reports)
}

pub fn run(config: &AppConfig, options: &SimulateOptions) -> Result<()> {
    let reports = simulate(config, options)?;

    for report in &reports {
        if options.json {
            println!("{}", serde_json::to_string(report)?);
        } else {
            println!("{}", format_report(report, config));
        }
    }

    Ok(())
}

/// Bounds exactly as wide as the dot row
fn row_bounds(style: &PageControlStyle, pages: usize) -> Size {
    if pages == 0 {
        return Size::new(0.0, style.dot_height);
    }
    let width = style.dot_width * pages as f64
        + style.dot_add_active_width
        + style.dot_spacing * (pages - 1) as f64;
    Size::new(width, style.dot_height)
}

fn format_report(report: &GestureReport, config: &AppConfig) -> String {
    let page = report
        .page
        .map(|p| (p + 1).to_string())
        .unwrap_or_else(|| "-".to_string());
    let updates: Vec<String> = report
        .updates
        .iter()
        .map(|update| match update {
            PageControlUpdate::Progress(p) => format!("progress {:.2}", p),
            PageControlUpdate::CurrentPage(p) => format!("page {}", p),
            PageControlUpdate::NumberOfPages(n) => format!("pages {}", n),
        })
        .collect();

    format!(
        "{:<10} {:>+6.2}  page {}/{} slot {}  {}  [{}]",
        report.gesture,
        report.amount,
        page,
        report.dots.len(),
        report.slot,
        dot_row(&report.dots, &PageControlStyle::from_config(&config.page_control)),
        updates.join(", ")
    )
}

/// One character per dot width; `=` marks the dots that are more than half active
fn dot_row(dots: &[Dot], style: &PageControlStyle) -> String {
    let unit = if style.dot_width > 0.0 { style.dot_width } else { 1.0 };
    let threshold = style.dot_width + style.dot_add_active_width / 2.0;
    dots.iter()
        .map(|dot| {
            let cells = (dot.width / unit).round().max(1.0) as usize;
            let glyph = if dot.width > threshold { "=" } else { "-" };
            glyph.repeat(cells)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(items: usize) -> SimulateOptions {
        SimulateOptions {
            items: Some(items),
            steps: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_init_report_announces_pages() {
        let reports = simulate(&AppConfig::default(), &options(4)).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].updates[0], PageControlUpdate::NumberOfPages(4));
        assert_eq!(reports[0].page, Some(0));
        assert_eq!(reports[0].dots.len(), 4);
        assert_eq!(reports[0].dots[0].x, 0.0);
    }

    #[test]
    fn test_drag_and_a_half_lands_two_pages_on() {
        let mut opts = options(5);
        opts.drags = vec![1.5];
        let reports = simulate(&AppConfig::default(), &opts).unwrap();

        let drag = &reports[1];
        assert_eq!(drag.gesture, "drag");
        assert_eq!(drag.page, Some(2));
        assert!(drag.updates.contains(&PageControlUpdate::CurrentPage(1)));
        assert_eq!(
            drag.updates.last(),
            Some(&PageControlUpdate::CurrentPage(2))
        );
    }

    #[test]
    fn test_backward_drag_wraps() {
        let mut opts = options(3);
        opts.drags = vec![-1.0];
        opts.steps = 4;
        let reports = simulate(&AppConfig::default(), &opts).unwrap();
        assert_eq!(reports[1].page, Some(2));
    }

    #[test]
    fn test_autoscroll_beats_cycle() {
        let mut opts = options(3);
        opts.autoscroll_beats = 3;
        let reports = simulate(&AppConfig::default(), &opts).unwrap();
        let pages: Vec<_> = reports[1..].iter().map(|r| r.page).collect();
        assert_eq!(pages, vec![Some(1), Some(2), Some(0)]);
    }

    #[test]
    fn test_zero_interval_autoscroll_is_an_error() {
        let mut config = AppConfig::default();
        config.autoscroll.interval_ms = 0;
        let mut opts = options(3);
        opts.autoscroll_beats = 1;
        assert!(simulate(&config, &opts).is_err());
    }

    #[test]
    fn test_dot_row_marks_active_dot() {
        let reports = simulate(&AppConfig::default(), &options(3)).unwrap();
        let style = PageControlStyle::default();
        assert_eq!(dot_row(&reports[0].dots, &style), "=== - -");
    }
}
