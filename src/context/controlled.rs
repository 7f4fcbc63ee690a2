//! ControlledContext - the channel carrying the application state.
//!
//! [`InitializedProvider`] owns a [`StateContainer`] and provides a
//! [`ControlledValue`] to everything rendered inside it. Consumers call
//! [`use_controlled`] to read the current record or trigger `push_foo`.

use std::rc::Rc;

use log::debug;

use super::{create_context, provide, use_context, Context};
use crate::state::{StateContainer, StateRecord};
use crate::view::{Handler, View};

// =============================================================================
// ControlledValue
// =============================================================================

/// What a consumer receives from the channel.
///
/// Outside any provider this is the detached default: an empty record and a
/// `push_foo` that does nothing.
#[derive(Clone, Default)]
pub struct ControlledValue {
    source: Option<StateContainer>,
}

impl ControlledValue {
    pub fn new(container: StateContainer) -> Self {
        Self {
            source: Some(container),
        }
    }

    /// Latest snapshot, or an empty record when detached.
    pub fn record(&self) -> Rc<StateRecord> {
        match &self.source {
            Some(container) => container.snapshot(),
            None => Rc::new(StateRecord::default()),
        }
    }

    pub fn push_foo(&self) {
        match &self.source {
            Some(container) => container.push_foo(),
            None => debug!("push_foo ignored: no provider in scope"),
        }
    }

    /// `push_foo` as an event handler.
    pub fn push_foo_handler(&self) -> Handler {
        let value = self.clone();
        Rc::new(move || value.push_foo())
    }

    /// Whether this value came from a provider.
    pub fn is_connected(&self) -> bool {
        self.source.is_some()
    }
}

// =============================================================================
// Channel
// =============================================================================

thread_local! {
    static CONTROLLED_CONTEXT: Context<ControlledValue> =
        create_context("ControlledContext", ControlledValue::default());
}

/// This thread's `ControlledContext` channel.
pub fn controlled_context() -> Context<ControlledValue> {
    CONTROLLED_CONTEXT.with(Clone::clone)
}

/// Read the innermost [`ControlledValue`].
pub fn use_controlled() -> ControlledValue {
    use_context(&controlled_context())
}

// =============================================================================
// InitializedProvider
// =============================================================================

/// Provider with the state container already set up.
///
/// The container is created when the provider is constructed (mounted) and
/// lives as long as the provider does.
pub struct InitializedProvider {
    container: StateContainer,
}

impl InitializedProvider {
    pub fn new() -> Self {
        Self {
            container: StateContainer::initialize(),
        }
    }

    pub fn container(&self) -> &StateContainer {
        &self.container
    }

    pub fn value(&self) -> ControlledValue {
        ControlledValue::new(self.container.clone())
    }

    /// Render `children` with this provider's value in scope.
    pub fn render(&self, children: impl FnOnce() -> Vec<View>) -> View {
        let _scope = provide(&controlled_context(), self.value());
        View::block(children())
    }
}

impl Default for InitializedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use spark_signals::effect;

    use crate::context::provide_with;

    #[test]
    fn test_detached_value_is_empty() {
        let value = use_controlled();
        assert!(!value.is_connected());
        assert!(value.record().is_empty());

        // No provider: no-op, no fault
        value.push_foo();
        assert!(use_controlled().record().is_empty());
    }

    #[test]
    fn test_provider_exposes_container() {
        let provider = InitializedProvider::new();

        let value = provide_with(&controlled_context(), provider.value(), use_controlled);
        assert!(value.is_connected());
        assert_eq!(value.record().len(), 3);

        value.push_foo();
        assert_eq!(provider.container().snapshot().len(), 4);
    }

    #[test]
    fn test_render_scopes_value_to_children() {
        let provider = InitializedProvider::new();
        let seen = Rc::new(Cell::new(false));

        let seen_clone = seen.clone();
        let _view = provider.render(move || {
            seen_clone.set(use_controlled().is_connected());
            Vec::new()
        });

        assert!(seen.get());
        assert!(!use_controlled().is_connected());
    }

    #[test]
    fn test_handler_triggers_rebroadcast() {
        let provider = InitializedProvider::new();
        let value = provider.value();
        let seen_len = Rc::new(Cell::new(0));

        let seen_clone = seen_len.clone();
        let reader = provider.value();
        let _stop = effect(move || {
            let len = provide_with(&controlled_context(), reader.clone(), || {
                use_controlled().record().len()
            });
            seen_clone.set(len);
        });
        assert_eq!(seen_len.get(), 3);

        let handler = value.push_foo_handler();
        handler();
        assert_eq!(seen_len.get(), 4);
        handler();
        assert_eq!(seen_len.get(), 5);
    }
}
