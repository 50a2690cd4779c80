use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let border_style = if app.is_dragging() {
            Style::default().fg(app.theme.accent)
        } else {
            Style::default().fg(app.theme.grey0)
        };

        let block = Block::default()
            .title(" Carousel ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(app.theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let units = app.units_per_column();
        // Terminal cells are roughly twice as tall as they are wide
        let card_rows = ((app.controller.config().item_height / units / 2.0).round() as u16)
            .clamp(3, inner.height.max(3))
            .min(inner.height);
        let y = inner.y + (inner.height - card_rows) / 2;
        let viewport = inner.width as f64 * units;

        for slot in app.controller.visible_slots(viewport) {
            let left = (slot.x / units).round() as i32;
            let right = ((slot.x + slot.width) / units).round() as i32;
            let clipped_left = left.max(0);
            let clipped_right = right.min(inner.width as i32);
            if clipped_right - clipped_left < 1 {
                continue;
            }

            let mut borders = Borders::ALL;
            if left < 0 {
                borders.remove(Borders::LEFT);
            }
            if right > inner.width as i32 {
                borders.remove(Borders::RIGHT);
            }

            let rect = Rect::new(
                inner.x + clipped_left as u16,
                y,
                (clipped_right - clipped_left) as u16,
                card_rows,
            );

            let card = Block::default()
                .borders(borders)
                .border_style(Style::default().fg(app.theme.card))
                .style(Style::default().bg(app.theme.bg1));
            let label_area = card.inner(rect);
            frame.render_widget(card, rect);

            let label_row = Rect::new(
                label_area.x,
                label_area.y + label_area.height / 2,
                label_area.width,
                label_area.height.min(1),
            );
            let label = Paragraph::new(Line::from(app.item_label(slot.item).to_string()))
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(app.theme.fg1)
                        .add_modifier(Modifier::BOLD),
                );
            frame.render_widget(label, label_row);
        }
    }
}
