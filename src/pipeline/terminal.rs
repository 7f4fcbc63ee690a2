//! Viewport and output configuration.
//!
//! The viewport size lives in one signal holding `(columns, rows)`. The
//! render effect reads it, so [`set_terminal_size`] repaints the page once
//! per resize. [`RenderMode`] is plain state: it is read when [`mount`]
//! starts and never tracked.
//!
//! [`mount`]: super::mount::mount

use std::cell::RefCell;

use log::debug;
use spark_signals::{signal, Signal};

/// Size assumed until a real terminal is queried.
pub const DEFAULT_SIZE: (u16, u16) = (80, 24);

thread_local! {
    static VIEWPORT: RefCell<Signal<(u16, u16)>> = RefCell::new(signal(DEFAULT_SIZE));
    static OUTPUT: RefCell<RenderMode> = const { RefCell::new(RenderMode::Fullscreen) };
}

// =============================================================================
// Viewport
// =============================================================================

/// `(columns, rows)` of the viewport. Tracked inside effects.
pub fn terminal_size() -> (u16, u16) {
    VIEWPORT.with(|viewport| viewport.borrow().get())
}

pub fn terminal_width() -> u16 {
    terminal_size().0
}

pub fn terminal_height() -> u16 {
    terminal_size().1
}

/// Replace the viewport size. Both axes change in a single update.
pub fn set_terminal_size(width: u16, height: u16) {
    VIEWPORT.with(|viewport| {
        viewport.borrow().set((width, height));
    });
}

/// Query crossterm for the real size. Keeps the previous size on failure.
pub fn detect_terminal_size() {
    match crossterm::terminal::size() {
        Ok((width, height)) => set_terminal_size(width, height),
        Err(err) => debug!("terminal size unavailable, keeping {:?}: {}", terminal_size(), err),
    }
}

// =============================================================================
// Output Mode
// =============================================================================

/// Where mounted frames go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Alternate screen, only changed cells written.
    #[default]
    Fullscreen,
    /// Frames stay in memory. Used by tests and anything driving the page
    /// without a terminal.
    Headless,
}

/// Mode the next `mount` will use.
pub fn render_mode() -> RenderMode {
    OUTPUT.with(|mode| *mode.borrow())
}

pub fn set_render_mode(mode: RenderMode) {
    OUTPUT.with(|current| *current.borrow_mut() = mode);
}
