//! Pure dot layout for the page control

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::PageControlConfig;

/// Width and height of an area in layout units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Resolved geometry and colors of the dots
#[derive(Debug, Clone, PartialEq)]
pub struct PageControlStyle {
    pub dot_width: f64,
    pub dot_height: f64,
    pub dot_add_active_width: f64,
    pub dot_spacing: f64,
    pub corner_radius: f64,
    pub active_color: Color,
    pub inactive_color: Color,
}

impl Default for PageControlStyle {
    fn default() -> Self {
        Self::from_config(&PageControlConfig::default())
    }
}

impl PageControlStyle {
    pub fn from_config(config: &PageControlConfig) -> Self {
        Self {
            dot_width: config.dot_width.max(0.0),
            dot_height: config.dot_height.max(0.0),
            dot_add_active_width: config.dot_add_active_width.max(0.0),
            dot_spacing: config.dot_spacing.max(0.0),
            corner_radius: config.corner_radius.max(0.0),
            active_color: Color::resolve(&config.active_color, Color::DEFAULT_ACTIVE),
            inactive_color: Color::resolve(&config.inactive_color, Color::DEFAULT_INACTIVE),
        }
    }

    /// Width of the fully active dot
    #[inline]
    pub fn active_width(&self) -> f64 {
        self.dot_width + self.dot_add_active_width
    }
}

/// What the page control displays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageControlState {
    pub number_of_pages: usize,
    pub current_page: usize,
    /// Signed progress toward the neighbouring page
    pub progress: f64,
}

impl Default for PageControlState {
    fn default() -> Self {
        Self {
            number_of_pages: 0,
            current_page: 0,
            progress: 1.0,
        }
    }
}

impl PageControlState {
    /// Clamp the page into range and the progress into [-1, 1]
    pub fn normalized(self) -> Self {
        let current_page = if self.number_of_pages == 0 {
            0
        } else {
            self.current_page.min(self.number_of_pages - 1)
        };
        let progress = if self.progress.is_nan() {
            1.0
        } else {
            self.progress.clamp(-1.0, 1.0)
        };
        Self {
            number_of_pages: self.number_of_pages,
            current_page,
            progress,
        }
    }
}

/// Page the indicator is moving toward
///
/// Forward for progress in (0, 1), backward for [-1, 0), and the current page
/// at 0 or 1. Returns None without pages.
pub fn next_page(state: &PageControlState) -> Option<usize> {
    let state = state.normalized();
    let n = state.number_of_pages;
    if n == 0 {
        return None;
    }
    let current = state.current_page;
    let p = state.progress;
    let next = if p > 0.0 && p < 1.0 {
        (current + 1) % n
    } else if p < 0.0 {
        (current + n - 1) % n
    } else {
        current
    };
    Some(next)
}

/// One positioned dot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub color: Color,
}

/// Output of [`render`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DotLayout {
    pub dots: Vec<Dot>,
    /// Width of the whole row including spacing
    pub total_width: f64,
}

/// Lay out the dots for `state`, centered in `bounds`
pub fn render(state: &PageControlState, style: &PageControlStyle, bounds: Size) -> DotLayout {
    let state = state.normalized();
    let Some(next) = next_page(&state) else {
        return DotLayout::default();
    };
    let current = state.current_page;
    let t = state.progress.abs();

    let dot_style = |index: usize| -> (f64, Color) {
        if next == current {
            if index == current {
                (style.active_width(), style.active_color)
            } else {
                (style.dot_width, style.inactive_color)
            }
        } else if index == next {
            (
                style.dot_width + style.dot_add_active_width * t,
                Color::interpolate(style.inactive_color, style.active_color, t),
            )
        } else if index == current {
            (
                style.active_width() - style.dot_add_active_width * t,
                Color::interpolate(style.active_color, style.inactive_color, t),
            )
        } else {
            (style.dot_width, style.inactive_color)
        }
    };

    let styled: Vec<(f64, Color)> = (0..state.number_of_pages).map(dot_style).collect();
    let total_width = styled.iter().map(|(width, _)| width).sum::<f64>()
        + style.dot_spacing * (state.number_of_pages - 1) as f64;

    let mut x = (bounds.width - total_width) / 2.0;
    let y = (bounds.height - style.dot_height) / 2.0;
    let dots = styled
        .into_iter()
        .enumerate()
        .map(|(index, (width, color))| {
            let dot = Dot {
                index,
                x,
                y,
                width,
                height: style.dot_height,
                corner_radius: style.corner_radius,
                color,
            };
            x += width + style.dot_spacing;
            dot
        })
        .collect();

    DotLayout { dots, total_width }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(pages: usize, current: usize, progress: f64) -> PageControlState {
        PageControlState {
            number_of_pages: pages,
            current_page: current,
            progress,
        }
    }

    fn bounds() -> Size {
        Size::new(200.0, 20.0)
    }

    #[test]
    fn test_next_page_direction() {
        assert_eq!(next_page(&state(5, 4, 0.3)), Some(0));
        assert_eq!(next_page(&state(5, 0, -0.3)), Some(4));
        assert_eq!(next_page(&state(5, 2, 1.0)), Some(2));
        assert_eq!(next_page(&state(5, 2, 0.0)), Some(2));
        assert_eq!(next_page(&state(0, 0, 0.5)), None);
    }

    #[test]
    fn test_full_backward_progress_points_at_previous_page() {
        assert_eq!(next_page(&state(5, 2, -1.0)), Some(1));
        assert_eq!(next_page(&state(5, 0, -1.0)), Some(4));

        let style = PageControlStyle::default();
        for progress in [-1.0, -3.0] {
            let layout = render(&state(5, 2, progress), &style, bounds());
            let widths: Vec<f64> = layout.dots.iter().map(|d| d.width).collect();
            assert_eq!(widths, vec![8.0, 24.0, 8.0, 8.0, 8.0], "progress {}", progress);
            assert_eq!(layout.dots[1].color, style.active_color);
            assert_eq!(layout.dots[2].color, style.inactive_color);
        }
    }

    #[test]
    fn test_two_dots_share_the_extra_width() {
        let style = PageControlStyle::default();
        for i in 1..10 {
            let p = i as f64 / 10.0;
            for progress in [p, -p] {
                let layout = render(&state(5, 2, progress), &style, bounds());
                let variable: Vec<_> = layout
                    .dots
                    .iter()
                    .filter(|d| (d.width - style.dot_width).abs() > 1e-9)
                    .collect();
                assert_eq!(variable.len(), 2, "progress {}", progress);
                let sum: f64 = variable.iter().map(|d| d.width).sum();
                assert!((sum - (2.0 * style.dot_width + style.dot_add_active_width)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_settled_row_has_one_active_dot() {
        let style = PageControlStyle::default();
        let layout = render(&state(3, 1, 1.0), &style, bounds());
        assert_eq!(layout.dots[1].width, style.active_width());
        assert_eq!(layout.dots[1].color, style.active_color);
        assert_eq!(layout.dots[0].color, style.inactive_color);
        assert_eq!(layout.dots[2].width, style.dot_width);
    }

    #[test]
    fn test_interpolated_colors() {
        let style = PageControlStyle {
            active_color: Color::rgb(200, 0, 0),
            inactive_color: Color::rgb(0, 0, 200),
            ..Default::default()
        };
        let layout = render(&state(3, 0, 0.25), &style, bounds());
        assert_eq!(layout.dots[0].color, Color::rgb(150, 0, 50));
        assert_eq!(layout.dots[1].color, Color::rgb(50, 0, 150));
        assert_eq!(layout.dots[2].color, style.inactive_color);
    }

    #[test]
    fn test_row_is_centered() {
        let style = PageControlStyle::default();
        let layout = render(&state(4, 0, 0.5), &style, bounds());
        // 3 * 8 + (8 + 16) + 3 * 4
        assert!((layout.total_width - 60.0).abs() < 1e-9);
        assert!((layout.dots[0].x - 70.0).abs() < 1e-9);
        assert!((layout.dots[0].y - 8.0).abs() < 1e-9);
        let last = layout.dots.last().unwrap();
        assert!((last.x + last.width - 130.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        let style = PageControlStyle::default();
        let layout = render(&state(3, 9, 4.0), &style, bounds());
        assert_eq!(layout.dots.len(), 3);
        assert_eq!(layout.dots[2].width, style.active_width());
    }

    #[test]
    fn test_no_pages_renders_nothing() {
        let layout = render(&state(0, 0, 0.5), &PageControlStyle::default(), bounds());
        assert!(layout.dots.is_empty());
        assert_eq!(layout.total_width, 0.0);
    }
}
