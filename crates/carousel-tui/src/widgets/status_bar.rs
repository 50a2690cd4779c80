use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let controller = &app.controller;
        let page_control = controller.page_control();

        let autoscroll = match controller.autoscroll_remaining(now) {
            Some(remaining) => format!("auto {:.1}s", remaining.as_secs_f64()),
            None if controller.is_autoscroll_enabled() => "auto on".to_string(),
            None => "auto off".to_string(),
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | Page {}/{} | Slot {} | Progress {:+.2} | {}",
                app.state_label(),
                controller.current_page().map(|p| p + 1).unwrap_or(0),
                controller.mapper().count(),
                controller.current_slot(),
                page_control.scroll_progress(),
                autoscroll,
            )
        };

        let help_hint = " q:quit h/l:move 1-9:jump a:autoscroll drag:mouse ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let status_style = if app.status_message.is_some() {
            Style::default().fg(app.theme.warning).bg(app.theme.bg2)
        } else {
            Style::default().fg(app.theme.fg0).bg(app.theme.bg2)
        };

        let line = Line::from(vec![
            Span::styled(status_text, status_style),
            Span::styled(" ".repeat(padding_len), Style::default().bg(app.theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey2).bg(app.theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
