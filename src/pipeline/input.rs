//! Input - maps crossterm events to page commands.
//!
//! Keys: Enter/Space press the focused button, Tab/BackTab move focus,
//! arrows and PageUp/PageDown/Home/End scroll, q/Esc/Ctrl+C quit.
//! Mouse: left click presses, the wheel scrolls.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Rows moved per arrow key.
pub const LINE_SCROLL: i32 = 1;

/// Rows moved per wheel notch.
pub const WHEEL_SCROLL: i32 = 3;

/// Share of the viewport moved by PageUp/PageDown.
pub const PAGE_SCROLL_FACTOR: f32 = 0.9;

/// What a terminal event asks the mounted page to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Press the focused button.
    Activate,
    FocusNext,
    FocusPrevious,
    /// Press whatever button is under the cell.
    Click { x: u16, y: u16 },
    /// Move the viewport by `delta` rows (negative is up).
    Scroll { delta: i32 },
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    Resize { width: u16, height: u16 },
    Quit,
}

/// Convert a crossterm KeyEvent. Releases and unbound keys map to `None`.
pub fn convert_key_event(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Activate),
        KeyCode::Tab => Some(Command::FocusNext),
        KeyCode::BackTab => Some(Command::FocusPrevious),
        KeyCode::Up => Some(Command::Scroll { delta: -LINE_SCROLL }),
        KeyCode::Down => Some(Command::Scroll { delta: LINE_SCROLL }),
        KeyCode::PageUp => Some(Command::PageUp),
        KeyCode::PageDown => Some(Command::PageDown),
        KeyCode::Home => Some(Command::ScrollToTop),
        KeyCode::End => Some(Command::ScrollToBottom),
        _ => None,
    }
}

/// Convert a crossterm MouseEvent. Left-button presses click, the wheel scrolls.
pub fn convert_mouse_event(mouse: MouseEvent) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Command::Click {
            x: mouse.column,
            y: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(Command::Scroll { delta: -WHEEL_SCROLL }),
        MouseEventKind::ScrollDown => Some(Command::Scroll { delta: WHEEL_SCROLL }),
        _ => None,
    }
}

pub fn convert_event(event: Event) -> Option<Command> {
    match event {
        Event::Key(key) => convert_key_event(key),
        Event::Mouse(mouse) => convert_mouse_event(mouse),
        Event::Resize(width, height) => Some(Command::Resize { width, height }),
        _ => None,
    }
}
