//! State Module - the owned application state.
//!
//! - **record** - [`StateRecord`], an immutable snapshot
//! - **container** - [`StateContainer`], which holds the current snapshot and
//!   replaces it on `push_foo`

mod container;
mod record;

pub use container::*;
pub use record::*;
