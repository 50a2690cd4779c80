use super::layout::{next_page, render, DotLayout, PageControlState, PageControlStyle, Size};
use super::PageControlInput;
use crate::config::PageControlConfig;

/// Stateful page indicator
///
/// Every change to the page count, current page, progress or bounds marks the
/// layout dirty; [`layout`](Self::layout) recomputes it on demand.
#[derive(Debug, Clone)]
pub struct ProgressPageControl {
    style: PageControlStyle,
    state: PageControlState,
    bounds: Size,
    layout: Option<DotLayout>,
}

impl Default for ProgressPageControl {
    fn default() -> Self {
        Self::new(PageControlStyle::default())
    }
}

impl ProgressPageControl {
    pub fn new(style: PageControlStyle) -> Self {
        Self {
            style,
            state: PageControlState::default(),
            bounds: Size::default(),
            layout: None,
        }
    }

    pub fn from_config(config: &PageControlConfig) -> Self {
        Self::new(PageControlStyle::from_config(config))
    }

    pub fn style(&self) -> &PageControlStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: PageControlStyle) {
        if self.style != style {
            self.style = style;
            self.layout = None;
        }
    }

    pub fn state(&self) -> PageControlState {
        self.state
    }

    pub fn number_of_pages(&self) -> usize {
        self.state.number_of_pages
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn scroll_progress(&self) -> f64 {
        self.state.progress
    }

    pub fn next_page(&self) -> Option<usize> {
        next_page(&self.state)
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.layout = None;
        }
    }

    /// True when the cached layout is stale
    pub fn needs_layout(&self) -> bool {
        self.layout.is_none()
    }

    /// Current dot layout, recomputed if anything changed since the last call
    pub fn layout(&mut self) -> &DotLayout {
        let (state, style, bounds) = (&self.state, &self.style, self.bounds);
        self.layout.get_or_insert_with(|| render(state, style, bounds))
    }

    fn update_state(&mut self, state: PageControlState) {
        let state = state.normalized();
        if state != self.state {
            self.state = state;
            self.layout = None;
        }
    }
}

impl PageControlInput for ProgressPageControl {
    fn set_progress(&mut self, progress: f64) {
        self.update_state(PageControlState {
            progress,
            ..self.state
        });
    }

    fn set_current_page(&mut self, page: usize) {
        self.update_state(PageControlState {
            current_page: page,
            ..self.state
        });
    }

    fn set_number_of_pages(&mut self, count: usize) {
        self.update_state(PageControlState {
            number_of_pages: count,
            ..self.state
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(pages: usize) -> ProgressPageControl {
        let mut control = ProgressPageControl::default();
        control.set_bounds(Size::new(120.0, 10.0));
        control.set_number_of_pages(pages);
        control
    }

    #[test]
    fn test_set_progress_is_idempotent() {
        let mut control = control(5);
        control.set_current_page(3);

        control.set_progress(1.0);
        let first = control.layout().clone();
        control.set_progress(1.0);
        assert!(!control.needs_layout());
        let second = control.layout().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_changes_invalidate_layout() {
        let mut control = control(3);
        control.layout();
        assert!(!control.needs_layout());

        control.set_progress(0.5);
        assert!(control.needs_layout());
        control.layout();

        control.set_current_page(1);
        assert!(control.needs_layout());
        control.layout();

        control.set_number_of_pages(4);
        assert!(control.needs_layout());
    }

    #[test]
    fn test_inputs_are_clamped() {
        let mut control = control(3);
        control.set_current_page(7);
        control.set_progress(-3.0);
        assert_eq!(control.current_page(), 2);
        assert_eq!(control.scroll_progress(), -1.0);

        control.set_number_of_pages(2);
        assert_eq!(control.current_page(), 1);
    }

    #[test]
    fn test_zero_pages_render_zero_dots() {
        let mut control = control(0);
        control.set_progress(0.4);
        control.set_current_page(2);
        assert!(control.layout().dots.is_empty());
        assert_eq!(control.next_page(), None);
    }
}
