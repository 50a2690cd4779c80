use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Animate to the next slot
    Next,
    /// Animate to the previous slot
    Previous,
    /// Jump straight to a logical page
    JumpTo(usize),
    /// Re-enable autoscroll, or stop it when running
    ToggleAutoscroll,
    /// Mouse button pressed on the given column
    DragStart(u16),
    /// Mouse moved to the given column while pressed
    DragMove(u16),
    /// Mouse button released
    DragEnd,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Navigation
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::Next,
        (KeyCode::Right, _) => Action::Next,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::Previous,
        (KeyCode::Left, _) => Action::Previous,

        // Pages 1-9
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::JumpTo(c as usize - '1' as usize)
        }

        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::ToggleAutoscroll,

        _ => Action::None,
    }
}

/// Handle a mouse event and return the corresponding action
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::DragStart(mouse.column),
        MouseEventKind::Drag(MouseButton::Left) => Action::DragMove(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => Action::DragEnd,
        MouseEventKind::ScrollDown => Action::Next,
        MouseEventKind::ScrollUp => Action::Previous,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Right)), Action::Next);
        assert_eq!(handle_key_event(key(KeyCode::Char('h'))), Action::Previous);
        assert_eq!(handle_key_event(key(KeyCode::Char('3'))), Action::JumpTo(2));
        assert_eq!(handle_key_event(key(KeyCode::Char('a'))), Action::ToggleAutoscroll);
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_mouse_drag_sequence() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 10)),
            Action::DragStart(10)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 4)),
            Action::DragMove(4)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 4)),
            Action::DragEnd
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Moved, 4)),
            Action::None
        );
    }
}
