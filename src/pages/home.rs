//! Home page - title, button and list under one provider.

use crate::components::{buttoneer, head, list_view, nesting_doll};
use crate::context::InitializedProvider;
use crate::state::StateContainer;
use crate::view::View;

pub const HOME_TITLE: &str = "Home";

/// The home page. Mounting it creates the provider and its state.
pub struct HomePage {
    provider: InitializedProvider,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            provider: InitializedProvider::new(),
        }
    }

    pub fn container(&self) -> &StateContainer {
        self.provider.container()
    }

    pub fn render(&self) -> View {
        View::block(vec![
            head(HOME_TITLE),
            self.provider.render(|| {
                vec![
                    buttoneer(),
                    nesting_doll(nesting_doll(nesting_doll(list_view()))),
                ]
            }),
        ])
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}
