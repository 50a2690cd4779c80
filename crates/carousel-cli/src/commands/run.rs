use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use carousel_core::AppConfig;
use carousel_tui::{
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    load_theme,
    widgets::{CarouselWidget, PageControlWidget, StatusBarWidget},
    App,
};

pub fn run(config: AppConfig) -> Result<()> {
    let theme = load_theme(&config.ui.theme);
    let event_handler = EventHandler::new(config.ui.tick_rate_ms);
    let mut app = App::new(config, theme)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Carousel"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    app.start(Instant::now());

    loop {
        let now = Instant::now();
        app.tick(now);

        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(3),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(frame.area());

            CarouselWidget::render(frame, layout[0], app);
            PageControlWidget::render(frame, layout[1], app);
            StatusBarWidget::render(frame, layout[2], app, now);
        })?;

        let timeout = app.poll_timeout(Instant::now(), event_handler.tick_rate());
        let action = match event_handler.next(timeout)? {
            Some(AppEvent::Key(key)) => {
                app.clear_status();
                handle_key_event(key)
            }
            Some(AppEvent::Mouse(mouse)) => handle_mouse_event(mouse),
            Some(AppEvent::Resize(width, height)) => {
                tracing::debug!(width, height, "Terminal resized");
                Action::None
            }
            Some(AppEvent::Tick) | None => Action::None,
        };
        app.apply(action, Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use carousel_tui::Theme;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_autoscroll_lifecycle_is_silent_at_info_level() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut app = App::new(AppConfig::default(), Theme::default()).unwrap();
            let now = Instant::now();
            app.start(now);
            app.apply(Action::ToggleAutoscroll, now);
            app.apply(Action::ToggleAutoscroll, now);
            app.tick(now + std::time::Duration::from_secs(6));
        });

        let logged = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(logged.is_empty(), "unexpected output: {}", logged);
    }
}
