//! StateRecord - the single value describing application state.

use chrono::{DateTime, Utc};

use crate::types::{Item, Nesting};

/// Snapshot of application state.
///
/// Records are never edited after construction. A mutation builds a new
/// record from the previous one (see [`StateRecord::with_foo`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateRecord {
    /// Set at construction and on every mutation.
    pub last_updated: DateTime<Utc>,
    /// Inert sample data, read by nothing.
    pub nestings: Nesting,
    /// Fixed label, never mutated.
    pub label: String,
    /// Insertion-ordered values. Only ever grows.
    pub items: Vec<Item>,
}

impl StateRecord {
    /// The record a freshly mounted container starts from.
    pub fn initial() -> Self {
        Self {
            last_updated: Utc::now(),
            nestings: Nesting::sample(),
            label: "bar".to_string(),
            items: vec![Item::from(1), Item::from(2.0), Item::from("baz")],
        }
    }

    /// Copy of this record with `"foo"` appended and a fresh timestamp.
    ///
    /// The timestamp is clamped to the previous one so it never goes
    /// backwards when the wall clock does.
    pub fn with_foo(&self) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(Item::foo());

        Self {
            last_updated: Utc::now().max(self.last_updated),
            nestings: self.nestings.clone(),
            label: self.label.clone(),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_record() {
        let record = StateRecord::initial();
        assert_eq!(record.label, "bar");
        assert_eq!(record.nestings.depth(), 3);
        assert_eq!(
            record.items,
            vec![Item::Int(1), Item::Float(2.0), Item::Str("baz".to_string())]
        );
    }

    #[test]
    fn test_default_record_is_empty() {
        let record = StateRecord::default();
        assert!(record.is_empty());
        assert_eq!(record.label, "");
        assert_eq!(record.nestings, Nesting::Empty);
        assert_eq!(record.last_updated, DateTime::<Utc>::default());
    }

    #[test]
    fn test_with_foo_leaves_previous_untouched() {
        let before = StateRecord::initial();
        let after = before.with_foo();

        assert_eq!(before.len(), 3);
        assert_eq!(after.len(), 4);
        assert_eq!(after.items[3], Item::foo());
        assert_eq!(&after.items[..3], &before.items[..]);
        assert_eq!(after.label, before.label);
        assert_eq!(after.nestings, before.nestings);
        assert!(after.last_updated >= before.last_updated);
    }

    #[test]
    fn test_with_foo_never_moves_time_backwards() {
        let mut future = StateRecord::initial();
        future.last_updated = Utc::now() + chrono::Duration::days(1);

        let next = future.with_foo();
        assert_eq!(next.last_updated, future.last_updated);
    }
}
