//! # controlled-context
//!
//! Shared application state handed to components through a scoped context
//! channel, rendered as a reactive terminal page.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! ```text
//! InitializedProvider (StateContainer) ──provide──▶ ControlledContext
//!                                                    ├─▶ buttoneer  (push_foo)
//!                                                    └─▶ list_view  (items)
//! ```
//!
//! The provider owns a [`StateContainer`] whose record lives in a signal.
//! Components read the current [`ControlledValue`] from the context instead of
//! receiving it as a parameter. Pressing the button replaces the record; the
//! render effect created by [`mount`] re-runs and every consumer sees the new
//! snapshot.
//!
//! ## Modules
//!
//! - [`types`] - Item values and the nesting sample
//! - [`state`] - StateRecord and StateContainer
//! - [`context`] - Context channel and the controlled context/provider
//! - [`components`] - ListView, Buttoneer, Head, NestingDoll
//! - [`pages`] - Home page composition
//! - [`view`] - View tree and styles
//! - [`layout`] - Taffy layout of the view tree
//! - [`renderer`] - Frame buffer, painting, diff renderer
//! - [`pipeline`] - Mount, render effect, input, scrolling
//! - [`logging`] - File logger for the binary

pub mod components;
pub mod context;
pub mod error;
pub mod layout;
pub mod logging;
pub mod pages;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod types;
pub mod view;

// Re-export commonly used items
pub use types::*;

pub use error::{Error, Result};

pub use state::{StateContainer, StateRecord};

pub use context::{
    controlled_context, create_context, has_provider, provide, provide_with, use_context,
    use_controlled, Context, ControlledValue, InitializedProvider, ProvideScope,
};

pub use components::{buttoneer, head, list_view, nesting_doll, render_items, RenderedItems};

pub use pages::HomePage;

pub use view::{Borders, Handler, View, ViewKind, ViewStyle};

pub use layout::{compute_layout, LayoutBox};

pub use renderer::{paint, DiffRenderer, Frame, FrameBuffer, HitRegion};

pub use pipeline::{
    mount, run, set_render_mode, set_terminal_size, Command, MountHandle, RenderMode,
};

pub use logging::{init_file_logger, LOG_FILE};
