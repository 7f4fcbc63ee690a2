//! ListView - renders the record's items, one bordered entry each.

use std::iter::Map;
use std::rc::Rc;
use std::slice;

use crate::context::use_controlled;
use crate::state::StateRecord;
use crate::types::Item;
use crate::view::{Borders, View, ViewStyle};

/// Style of a single list entry.
pub const ENTRY_STYLE: ViewStyle = ViewStyle {
    width: None,
    height: None,
    padding_x: 2,
    padding_y: 0,
    borders: Borders::ALL,
};

fn render_item(item: &Item) -> String {
    item.to_string()
}

/// Lazy string rendering of a record's items.
///
/// Holds the snapshot it was created from. Iterating is cheap and can be
/// repeated; each pass yields one string per item, in order.
#[derive(Debug, Clone)]
pub struct RenderedItems {
    record: Rc<StateRecord>,
}

impl RenderedItems {
    pub fn iter(&self) -> Map<slice::Iter<'_, Item>, fn(&Item) -> String> {
        self.record.items.iter().map(render_item as fn(&Item) -> String)
    }

    pub fn len(&self) -> usize {
        self.record.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a RenderedItems {
    type Item = String;
    type IntoIter = Map<slice::Iter<'a, Item>, fn(&Item) -> String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Rendering of `record.items`, evaluated on iteration.
pub fn render_items(record: Rc<StateRecord>) -> RenderedItems {
    RenderedItems { record }
}

/// Display consumer: one entry per item of the current record.
///
/// Outside a provider this renders an empty list.
pub fn list_view() -> View {
    let record = use_controlled().record();

    let entries = render_items(record)
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            View::block(vec![View::text(text)])
                .with_style(ENTRY_STYLE)
                .with_key(format!("{}-listitem", idx))
        })
        .collect();

    View::block(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{controlled_context, provide_with, ControlledValue};
    use crate::state::StateContainer;

    fn record_of(items: Vec<Item>) -> Rc<StateRecord> {
        Rc::new(StateRecord {
            items,
            ..Default::default()
        })
    }

    #[test]
    fn test_render_items_formats_each_entry() {
        let rendered = render_items(record_of(vec![
            Item::from(1),
            Item::from(2.0),
            Item::from("baz"),
        ]));

        let texts: Vec<String> = rendered.iter().collect();
        assert_eq!(texts, vec!["1", "2", "baz"]);
        assert_eq!(rendered.len(), 3);
    }

    #[test]
    fn test_render_items_is_restartable() {
        let rendered = render_items(record_of(vec![Item::from("a"), Item::from("b")]));

        let first: Vec<String> = (&rendered).into_iter().collect();
        let second: Vec<String> = (&rendered).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_items_empty() {
        let rendered = render_items(record_of(Vec::new()));
        assert!(rendered.is_empty());
        assert_eq!(rendered.iter().count(), 0);
    }

    #[test]
    fn test_list_view_without_provider_is_empty() {
        let view = list_view();
        assert!(view.children.is_empty());
        assert!(view.texts().is_empty());
    }

    #[test]
    fn test_list_view_keys_and_styles() {
        let value = ControlledValue::new(StateContainer::initialize());
        let view = provide_with(&controlled_context(), value, list_view);

        assert_eq!(view.texts(), vec!["1", "2", "baz"]);
        assert_eq!(
            view.child_keys(),
            vec![Some("0-listitem"), Some("1-listitem"), Some("2-listitem")]
        );
        assert!(view.children.iter().all(|entry| entry.style == ENTRY_STYLE));
    }
}
