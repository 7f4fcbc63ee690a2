//! Components - functions that read the context and return a [`View`].
//!
//! - [`list_view`] - Display consumer, renders the current items
//! - [`buttoneer`] - Action consumer, triggers `push_foo`
//! - [`head`] - page title
//! - [`nesting_doll`] - pass-through wrapper
//!
//! [`View`]: crate::view::View

mod buttoneer;
mod head;
mod list_view;
mod nesting_doll;

pub use buttoneer::*;
pub use head::head;
pub use list_view::*;
pub use nesting_doll::nesting_doll;
