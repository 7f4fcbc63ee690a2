//! Head - page metadata. Only the title is supported.

use crate::view::View;

pub fn head(title: &str) -> View {
    View::title(title)
}
