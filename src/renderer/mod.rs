//! Renderer - frame buffer, painting and terminal output.
//!
//! - [`FrameBuffer`] - character grid
//! - [`paint`] - view tree + layout -> [`Frame`]
//! - [`DiffRenderer`] - writes changed cells to the terminal

mod buffer;
mod diff;
mod paint;

pub use buffer::FrameBuffer;
pub use diff::{changed_cells, DiffRenderer};
pub use paint::{paint, Frame, HitRegion};
