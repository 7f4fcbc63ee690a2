//! Mount API - application lifecycle and render effect.
//!
//! `mount` wraps a root component in ONE render effect. Every run of the
//! effect rebuilds the view tree, lays it out, paints a [`Frame`] and, in
//! fullscreen mode, diffs it to the terminal. Any signal read while building
//! the tree (the state container, the terminal size) becomes a dependency, so
//! a mutation re-renders synchronously before the mutating call returns.
//!
//! The page can be taller than the terminal. The handle keeps a vertical
//! scroll offset in a signal the effect also reads, so scrolling re-renders
//! the same way.
//!
//! # Example
//!
//! ```ignore
//! let page = HomePage::new();
//! let handle = mount(move || page.render())?;
//!
//! // Option 1: Run blocking event loop
//! run(&handle)?;
//!
//! // Option 2: Drive it yourself
//! handle.dispatch(Command::Activate);
//!
//! handle.unmount();
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crossterm::event;
use log::{debug, info, warn};
use spark_signals::{effect, signal, Signal};

use super::input::{convert_event, Command, PAGE_SCROLL_FACTOR};
use super::terminal::{render_mode, set_terminal_size, terminal_height, terminal_size, RenderMode};
use crate::error::Result;
use crate::layout::compute_layout;
use crate::renderer::{paint, DiffRenderer, Frame};
use crate::view::{Handler, View};

/// How long `run` waits for an event before checking the running flag.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Lay out and paint `view` into a `width` x `height` frame whose top row
/// is page row `scroll_y`.
pub fn render_frame(view: &View, width: u16, height: u16, scroll_y: u16) -> Result<Frame> {
    let boxes = compute_layout(view, width)?;
    Ok(paint(view, &boxes, width, height, scroll_y))
}

// =============================================================================
// Mount Handle
// =============================================================================

struct MountState {
    frame: RefCell<Option<Frame>>,
    renderer: RefCell<Option<DiffRenderer>>,
    render_count: Cell<usize>,
    focus: Cell<usize>,
    running: Cell<bool>,
    /// Requested first visible row. Paint clamps it to the page.
    scroll_y: Signal<u16>,
}

impl MountState {
    fn new() -> Self {
        Self {
            frame: RefCell::new(None),
            renderer: RefCell::new(None),
            render_count: Cell::new(0),
            focus: Cell::new(0),
            running: Cell::new(true),
            scroll_y: signal(0),
        }
    }
}

/// Handle returned by [`mount`].
///
/// Holds the render effect's stop function and the latest frame.
pub struct MountHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    state: Rc<MountState>,
}

impl MountHandle {
    /// Stop rendering and restore the terminal.
    pub fn unmount(mut self) {
        self.shutdown();
        info!("unmounted after {} renders", self.render_count());
    }

    fn shutdown(&mut self) {
        self.state.running.set(false);

        if let Some(stop) = self.stop_effect.take() {
            stop();
        }

        if let Some(mut renderer) = self.state.renderer.borrow_mut().take() {
            if let Err(err) = renderer.exit_fullscreen() {
                warn!("failed to restore terminal: {}", err);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Ask `run` to return. Rendering continues until `unmount`.
    pub fn stop(&self) {
        self.state.running.set(false);
    }

    /// Number of completed render passes.
    pub fn render_count(&self) -> usize {
        self.state.render_count.get()
    }

    /// Visible strings of the latest frame, in tree order.
    pub fn frame_texts(&self) -> Vec<String> {
        self.state
            .frame
            .borrow()
            .as_ref()
            .map(|frame| frame.texts.clone())
            .unwrap_or_default()
    }

    /// Rows of the latest frame.
    pub fn lines(&self) -> Vec<String> {
        self.state
            .frame
            .borrow()
            .as_ref()
            .map(|frame| frame.buffer.lines())
            .unwrap_or_default()
    }

    /// Title of the latest frame, if the page set one.
    pub fn title(&self) -> Option<String> {
        self.state.frame.borrow().as_ref().and_then(|frame| frame.title.clone())
    }

    /// Index of the focused button among the frame's hit regions.
    pub fn focused(&self) -> usize {
        self.state.focus.get()
    }

    fn button_count(&self) -> usize {
        self.state
            .frame
            .borrow()
            .as_ref()
            .map_or(0, |frame| frame.hit_regions.len())
    }

    pub fn focus_next(&self) {
        let count = self.button_count();
        if count > 0 {
            self.state.focus.set((self.state.focus.get() + 1) % count);
        }
    }

    pub fn focus_previous(&self) {
        let count = self.button_count();
        if count > 0 {
            self.state.focus.set((self.state.focus.get() + count - 1) % count);
        }
    }

    /// Press the focused button. Returns false if there is none.
    pub fn activate(&self) -> bool {
        let handler = self.state.frame.borrow().as_ref().and_then(|frame| {
            let count = frame.hit_regions.len();
            (count > 0).then(|| frame.hit_regions[self.state.focus.get() % count].on_press.clone())
        });
        press(handler)
    }

    /// Press the button under screen cell (x, y). Returns false on a miss.
    pub fn click(&self, x: u16, y: u16) -> bool {
        let handler = self
            .state
            .frame
            .borrow()
            .as_ref()
            .and_then(|frame| frame.hit_test(x, y).map(|region| region.on_press.clone()));
        press(handler)
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// First page row currently on screen.
    pub fn scroll_offset(&self) -> u16 {
        self.state.frame.borrow().as_ref().map_or(0, |frame| frame.scroll_y)
    }

    /// Largest offset the current page allows.
    pub fn max_scroll(&self) -> u16 {
        self.state.frame.borrow().as_ref().map_or(0, |frame| frame.max_scroll_y)
    }

    /// Scroll to `offset`, clamped to `0..=max_scroll()`.
    pub fn scroll_to(&self, offset: u16) {
        self.state.scroll_y.set(offset.min(self.max_scroll()));
    }

    /// Move the viewport by `delta` rows.
    ///
    /// Returns `true` if the offset changed, `false` if already at the edge.
    pub fn scroll_by(&self, delta: i32) -> bool {
        let current = self.scroll_offset();
        let target = (current as i32 + delta).clamp(0, self.max_scroll() as i32) as u16;
        if target == current {
            return false;
        }
        self.state.scroll_y.set(target);
        true
    }

    /// Move by most of a viewport. `pages` is negative for up.
    pub fn scroll_pages(&self, pages: i32) -> bool {
        let step = (terminal_height() as f32 * PAGE_SCROLL_FACTOR).max(1.0) as i32;
        self.scroll_by(pages * step)
    }

    pub fn scroll_to_top(&self) {
        self.scroll_to(0);
    }

    pub fn scroll_to_bottom(&self) {
        self.scroll_to(self.max_scroll());
    }

    /// Apply one command. Returns whether the page is still running.
    pub fn dispatch(&self, command: Command) -> bool {
        debug!("dispatch {:?}", command);
        match command {
            Command::Activate => {
                self.activate();
            }
            Command::FocusNext => self.focus_next(),
            Command::FocusPrevious => self.focus_previous(),
            Command::Click { x, y } => {
                self.click(x, y);
            }
            Command::Scroll { delta } => {
                self.scroll_by(delta);
            }
            Command::PageUp => {
                self.scroll_pages(-1);
            }
            Command::PageDown => {
                self.scroll_pages(1);
            }
            Command::ScrollToTop => self.scroll_to_top(),
            Command::ScrollToBottom => self.scroll_to_bottom(),
            Command::Resize { width, height } => set_terminal_size(width, height),
            Command::Quit => self.stop(),
        }
        self.is_running()
    }
}

// The handler may re-render, which replaces the frame, so callers clone it
// out and release the borrow before it runs.
fn press(handler: Option<Handler>) -> bool {
    match handler {
        Some(handler) => {
            handler();
            true
        }
        None => false,
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount a root component.
///
/// In [`RenderMode::Fullscreen`] the terminal switches to the alternate
/// screen; in [`RenderMode::Headless`] frames stay in memory.
pub fn mount(root: impl Fn() -> View + 'static) -> Result<MountHandle> {
    let mode = render_mode();
    let state = Rc::new(MountState::new());

    if mode == RenderMode::Fullscreen {
        let mut renderer = DiffRenderer::new();
        renderer.enter_fullscreen()?;
        *state.renderer.borrow_mut() = Some(renderer);
    }
    info!("mounted in {:?} mode", mode);

    let effect_state = state.clone();
    let stop_fn = effect(move || {
        // Tracked: terminal size, scroll offset, plus whatever the root reads.
        let (width, height) = terminal_size();
        let scroll_y = effect_state.scroll_y.get();

        let view = root();
        let frame = match render_frame(&view, width, height, scroll_y) {
            Ok(frame) => frame,
            Err(err) => {
                warn!("render failed: {}", err);
                return;
            }
        };

        if let Some(renderer) = effect_state.renderer.borrow_mut().as_mut() {
            if let Err(err) = renderer.render(&frame) {
                warn!("terminal write failed: {}", err);
            }
        }

        let count = effect_state.render_count.get() + 1;
        effect_state.render_count.set(count);
        debug!("render #{} ({}x{})", count, width, height);

        *effect_state.frame.borrow_mut() = Some(frame);
    });

    Ok(MountHandle {
        stop_effect: Some(Box::new(stop_fn)),
        state,
    })
}

/// Blocking event loop. Returns once a command stops the page.
pub fn run(handle: &MountHandle) -> Result<()> {
    while handle.is_running() {
        if event::poll(POLL_INTERVAL)? {
            if let Some(command) = convert_event(event::read()?) {
                handle.dispatch(command);
            }
        }
    }
    Ok(())
}
