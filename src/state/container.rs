//! StateContainer - owner of the authoritative record.
//!
//! The current record lives in a signal, so every reader that runs inside an
//! effect (the render effect, most importantly) re-runs synchronously when
//! [`StateContainer::push_foo`] swaps in a new snapshot.

use std::rc::Rc;

use log::debug;
use spark_signals::{signal, Signal};

use super::record::StateRecord;

/// Holds the current [`StateRecord`] and the only mutation entry point.
///
/// Cloning is cheap and shares the same underlying signal.
#[derive(Clone)]
pub struct StateContainer {
    state: Signal<Rc<StateRecord>>,
}

impl StateContainer {
    /// Construct a container holding [`StateRecord::initial`].
    pub fn initialize() -> Self {
        Self::from_record(StateRecord::initial())
    }

    /// Construct a container around an arbitrary starting record.
    pub fn from_record(record: StateRecord) -> Self {
        Self {
            state: signal(Rc::new(record)),
        }
    }

    /// Current snapshot. Reading inside an effect creates a dependency.
    pub fn snapshot(&self) -> Rc<StateRecord> {
        self.state.get()
    }

    /// Replace the record with a copy that has `"foo"` appended.
    ///
    /// Snapshots handed out earlier keep their old contents.
    pub fn push_foo(&self) {
        let next = self.state.get().with_foo();
        debug!("push_foo: {} items", next.len());
        self.state.set(Rc::new(next));
    }
}

impl Default for StateContainer {
    fn default() -> Self {
        Self::initialize()
    }
}
