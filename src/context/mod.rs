//! Context Channel - scoped values visible to everything rendered inside.
//!
//! A [`Context`] is a typed, named channel with a default value. Calling
//! [`provide`] pushes a value and returns a [`ProvideScope`]; while the scope
//! is alive, [`use_context`] anywhere below returns that value. Dropping the
//! scope reverts to whatever the enclosing scope provided, or to the default.
//!
//! Only the innermost value is visible. Nothing is buffered or replayed.
//!
//! ```ignore
//! let theme = create_context("Theme", "light");
//!
//! assert_eq!(use_context(&theme), "light");
//! {
//!     let _scope = provide(&theme, "dark");
//!     assert_eq!(use_context(&theme), "dark");
//! }
//! assert_eq!(use_context(&theme), "light");
//! ```

pub mod controlled;

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

pub use controlled::*;

// =============================================================================
// Provider Stacks
// =============================================================================

thread_local! {
    /// One stack of (token, value) entries per context id.
    static STACKS: RefCell<HashMap<usize, Vec<(u64, Rc<dyn Any>)>>> = RefCell::new(HashMap::new());

    /// Counter for context ids.
    static NEXT_ID: Cell<usize> = const { Cell::new(0) };

    /// Counter for provide tokens. Each scope owns exactly one entry.
    static NEXT_TOKEN: Cell<u64> = const { Cell::new(0) };
}

fn stack_depth(id: usize) -> usize {
    STACKS.with(|stacks| stacks.borrow().get(&id).map_or(0, Vec::len))
}

// =============================================================================
// Context
// =============================================================================

/// A typed, named channel carrying values of `T`.
///
/// Cloning yields a handle to the same channel.
pub struct Context<T> {
    id: usize,
    name: &'static str,
    default: Rc<T>,
}

impl<T> Clone for Context<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name,
            default: self.default.clone(),
        }
    }
}

impl<T> fmt::Debug for Context<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl<T> Context<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Create a new channel. `default` is what readers see outside any scope.
pub fn create_context<T: Clone + 'static>(name: &'static str, default: T) -> Context<T> {
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    Context {
        id,
        name,
        default: Rc::new(default),
    }
}

// =============================================================================
// Provide / Use
// =============================================================================

/// Guard returned by [`provide`]. The value stays visible until it drops.
#[must_use = "the value is only provided while the scope is alive"]
pub struct ProvideScope<T> {
    id: usize,
    token: u64,
    _marker: PhantomData<(T, Rc<()>)>,
}

impl<T> Drop for ProvideScope<T> {
    fn drop(&mut self) {
        // Only this scope's entry goes; scopes pushed later stay visible
        // even if this one ends first.
        let _ = STACKS.try_with(|stacks| {
            let mut stacks = stacks.borrow_mut();
            if let Some(stack) = stacks.get_mut(&self.id) {
                if let Some(pos) = stack.iter().position(|(token, _)| *token == self.token) {
                    stack.remove(pos);
                }
                if stack.is_empty() {
                    stacks.remove(&self.id);
                }
            }
        });
    }
}

/// Make `value` the current value of `ctx` until the returned scope drops.
pub fn provide<T: Clone + 'static>(ctx: &Context<T>, value: T) -> ProvideScope<T> {
    let token = NEXT_TOKEN.with(|next| {
        let token = next.get();
        next.set(token + 1);
        token
    });
    let value: Rc<dyn Any> = Rc::new(value);
    STACKS.with(|stacks| {
        stacks
            .borrow_mut()
            .entry(ctx.id)
            .or_default()
            .push((token, value));
    });
    ProvideScope {
        id: ctx.id,
        token,
        _marker: PhantomData,
    }
}

/// Run `f` with `value` provided, reverting afterwards.
pub fn provide_with<T: Clone + 'static, R>(ctx: &Context<T>, value: T, f: impl FnOnce() -> R) -> R {
    let _scope = provide(ctx, value);
    f()
}

/// Innermost provided value, or the channel default outside every scope.
pub fn use_context<T: Clone + 'static>(ctx: &Context<T>) -> T {
    let provided = STACKS.with(|stacks| {
        stacks
            .borrow()
            .get(&ctx.id)
            .and_then(|stack| stack.last().map(|(_, value)| value.clone()))
    });

    provided
        .and_then(|value| value.downcast_ref::<T>().cloned())
        .unwrap_or_else(|| (*ctx.default).clone())
}

/// Whether any scope currently provides a value for `ctx`.
pub fn has_provider<T>(ctx: &Context<T>) -> bool {
    stack_depth(ctx.id) > 0
}

// =============================================================================
// Tests
// =============================================================================
