//! Buttoneer - a single button that appends `"foo"` on every press.

use crate::context::use_controlled;
use crate::view::{Borders, View, ViewStyle};

pub const BUTTON_LABEL: &str = "Click me!";

/// Fixed frame around the button.
const FRAME_STYLE: ViewStyle = ViewStyle {
    width: Some(15),
    height: Some(3),
    padding_x: 0,
    padding_y: 0,
    borders: Borders::NONE,
};

const BUTTON_STYLE: ViewStyle = ViewStyle {
    width: None,
    height: None,
    padding_x: 1,
    padding_y: 0,
    borders: Borders::ALL,
};

/// Action consumer. Each press invokes the provided `push_foo` once.
pub fn buttoneer() -> View {
    let value = use_controlled();

    View::block(vec![
        View::button(BUTTON_LABEL, value.push_foo_handler()).with_style(BUTTON_STYLE),
    ])
    .with_style(FRAME_STYLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{controlled_context, provide_with, ControlledValue};
    use crate::state::StateContainer;
    use crate::view::ViewKind;

    fn press(view: &View) {
        let mut handler = None;
        view.walk(&mut |node| {
            if let ViewKind::Button { on_press, .. } = &node.kind {
                handler = Some(on_press.clone());
            }
        });
        if let Some(handler) = handler {
            handler();
        }
    }

    #[test]
    fn test_press_pushes_once_per_event() {
        let container = StateContainer::initialize();
        let value = ControlledValue::new(container.clone());
        let view = provide_with(&controlled_context(), value, buttoneer);

        press(&view);
        assert_eq!(container.snapshot().len(), 4);

        press(&view);
        press(&view);
        assert_eq!(container.snapshot().len(), 6);
    }

    #[test]
    fn test_press_without_provider_is_harmless() {
        let view = buttoneer();
        press(&view);
        assert_eq!(view.texts(), vec![BUTTON_LABEL]);
    }
}
