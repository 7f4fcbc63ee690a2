//! Reactive Pipeline
//!
//! Connects the component tree to the terminal.
//!
//! # Pipeline Architecture
//!
//! ```text
//! root() → View → compute_layout (Taffy) → paint → Frame → DiffRenderer
//! ```
//!
//! All of it runs inside a single render effect created by [`mount`]. Reads
//! from signals during `root()` auto-track, so a state change or a resize
//! re-renders before the triggering call returns.
//!
//! - **terminal** - viewport size signal and render mode
//! - **input** - crossterm event → [`Command`] (press, focus, scroll, quit)
//! - **mount** - render effect, [`MountHandle`] (focus, press, scroll), blocking [`run`] loop

pub mod input;
pub mod mount;
pub mod terminal;

pub use input::{convert_event, Command, LINE_SCROLL, PAGE_SCROLL_FACTOR, WHEEL_SCROLL};
pub use mount::{mount, render_frame, run, MountHandle, POLL_INTERVAL};
pub use terminal::{
    detect_terminal_size, render_mode, set_render_mode, set_terminal_size, terminal_height,
    terminal_size, terminal_width, RenderMode, DEFAULT_SIZE,
};
