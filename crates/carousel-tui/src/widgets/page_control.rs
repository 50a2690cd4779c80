use carousel_core::page_control::Size;
use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};

use crate::app::App;
use crate::theme::to_terminal;

/// Dot layout units per terminal column
const DOT_UNITS_PER_COLUMN: f64 = 4.0;

pub struct PageControlWidget;

impl PageControlWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        frame.render_widget(Block::default().style(Style::default().bg(app.theme.bg0)), area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let control = app.controller.page_control_mut();
        let height = control.style().dot_height;
        control.set_bounds(Size::new(area.width as f64 * DOT_UNITS_PER_COLUMN, height));
        let layout = control.layout().clone();

        let row = area.y + area.height / 2;
        let buffer = frame.buffer_mut();
        for dot in &layout.dots {
            let start = (dot.x / DOT_UNITS_PER_COLUMN).round() as i32;
            let end = ((dot.x + dot.width) / DOT_UNITS_PER_COLUMN).round() as i32;
            let end = end.max(start + 1);
            for column in start.max(0)..end.min(area.width as i32) {
                if let Some(cell) = buffer.cell_mut((area.x + column as u16, row)) {
                    cell.set_symbol("━").set_fg(to_terminal(dot.color));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::theme::Theme;

    #[test]
    fn test_settled_row_draws_one_wide_dot() {
        let mut app = App::new(AppConfig::default(), Theme::default()).unwrap();
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| PageControlWidget::render(frame, frame.area(), &mut app))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let drawn = (0..40u16)
            .filter(|&x| buffer[(x, 0)].symbol() == "━")
            .count();
        // 24 + 8 + 8 units of dots over 4 units per column
        assert_eq!(drawn, 10);
    }
}
