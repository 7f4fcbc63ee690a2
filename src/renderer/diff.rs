//! Differential renderer for fullscreen mode.
//!
//! The DiffRenderer compares the current frame to the previous frame and only
//! writes cells that have changed.
//!
//! # Algorithm
//!
//! 1. For each cell in the new frame:
//!    - If the previous frame has the same size and the cell is unchanged: skip
//!    - Otherwise: queue a cursor move and the glyph
//! 2. Flush the queued output (single write)
//! 3. Store the current frame as previous for the next comparison

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::{execute, queue};

use super::buffer::FrameBuffer;
use super::paint::Frame;

/// Cells of `current` that differ from `previous`, row-major.
///
/// A missing or differently sized previous frame marks every cell changed.
pub fn changed_cells(previous: Option<&FrameBuffer>, current: &FrameBuffer) -> Vec<(u16, u16, char)> {
    let comparable = previous
        .filter(|prev| prev.width() == current.width() && prev.height() == current.height());

    let mut changed = Vec::new();
    for y in 0..current.height() {
        for x in 0..current.width() {
            let Some(cell) = current.get(x, y) else { continue };
            let unchanged = comparable.is_some_and(|prev| prev.get(x, y) == Some(cell));
            if !unchanged {
                changed.push((x, y, cell));
            }
        }
    }
    changed
}

/// Differential renderer for fullscreen mode.
pub struct DiffRenderer {
    output: BufWriter<Stdout>,
    previous: Option<FrameBuffer>,
    title: Option<String>,
    fullscreen: bool,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: BufWriter::new(io::stdout()),
            previous: None,
            title: None,
            fullscreen: false,
        }
    }

    /// Switch to the alternate screen with raw mode and mouse capture.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.output,
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide,
            Clear(ClearType::All)
        )?;
        self.fullscreen = true;
        self.previous = None;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        if !self.fullscreen {
            return Ok(());
        }
        self.fullscreen = false;
        execute!(self.output, Show, DisableMouseCapture, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns true if anything was written.
    pub fn render(&mut self, frame: &Frame) -> io::Result<bool> {
        let mut has_changes = false;

        if frame.title != self.title {
            if let Some(title) = &frame.title {
                queue!(self.output, SetTitle(title))?;
            }
            self.title = frame.title.clone();
            has_changes = true;
        }

        for (x, y, cell) in changed_cells(self.previous.as_ref(), &frame.buffer) {
            queue!(self.output, MoveTo(x, y), Print(cell))?;
            has_changes = true;
        }

        self.output.flush()?;
        self.previous = Some(frame.buffer.clone());
        Ok(has_changes)
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DiffRenderer {
    fn drop(&mut self) {
        let _ = self.exit_fullscreen();
    }
}
