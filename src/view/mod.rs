//! View tree - what components render.
//!
//! Components are plain functions returning a [`View`]. The tree is rebuilt
//! on every render pass, laid out by [`crate::layout`] and painted by
//! [`crate::renderer`].

use std::fmt;
use std::rc::Rc;

/// Event callback attached to a button.
pub type Handler = Rc<dyn Fn()>;

// =============================================================================
// Borders (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Which sides of a box get a border.
    ///
    /// Combine with bitwise OR: `Borders::TOP | Borders::BOTTOM`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Borders: u8 {
        const NONE = 0;
        const TOP = 1 << 0;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
        const ALL = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}

// =============================================================================
// Style
// =============================================================================

/// Box style in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewStyle {
    /// Fixed width; `None` stretches to the parent.
    pub width: Option<u16>,
    /// Fixed height; `None` fits the content.
    pub height: Option<u16>,
    pub padding_x: u16,
    pub padding_y: u16,
    pub borders: Borders,
}

impl ViewStyle {
    /// Inset from the box edge to its content on (left, top).
    pub fn content_offset(&self) -> (u16, u16) {
        let left = self.borders.contains(Borders::LEFT) as u16 + self.padding_x;
        let top = self.borders.contains(Borders::TOP) as u16 + self.padding_y;
        (left, top)
    }
}

// =============================================================================
// View
// =============================================================================

#[derive(Clone)]
pub enum ViewKind {
    /// Column container.
    Block,
    /// Single line of text.
    Text(String),
    /// Pressable label.
    Button { label: String, on_press: Handler },
    /// Page title. Not laid out.
    Title(String),
}

impl fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::Block => f.write_str("Block"),
            ViewKind::Text(text) => f.debug_tuple("Text").field(text).finish(),
            ViewKind::Button { label, .. } => f.debug_struct("Button").field("label", label).finish(),
            ViewKind::Title(title) => f.debug_tuple("Title").field(title).finish(),
        }
    }
}

/// A node in the rendered tree.
#[derive(Debug, Clone)]
pub struct View {
    pub kind: ViewKind,
    pub style: ViewStyle,
    pub key: Option<String>,
    pub children: Vec<View>,
}

impl View {
    fn leaf(kind: ViewKind) -> Self {
        Self {
            kind,
            style: ViewStyle::default(),
            key: None,
            children: Vec::new(),
        }
    }

    pub fn block(children: Vec<View>) -> Self {
        Self {
            children,
            ..Self::leaf(ViewKind::Block)
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::leaf(ViewKind::Text(content.into()))
    }

    pub fn button(label: impl Into<String>, on_press: Handler) -> Self {
        Self::leaf(ViewKind::Button {
            label: label.into(),
            on_press,
        })
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self::leaf(ViewKind::Title(title.into()))
    }

    pub fn with_style(mut self, style: ViewStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Visit this node and its descendants in pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a View)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Every visible string (text and button labels) in tree order.
    pub fn texts(&self) -> Vec<String> {
        let mut texts = Vec::new();
        self.walk(&mut |view| match &view.kind {
            ViewKind::Text(text) => texts.push(text.clone()),
            ViewKind::Button { label, .. } => texts.push(label.clone()),
            ViewKind::Block | ViewKind::Title(_) => {}
        });
        texts
    }

    /// First title node in the tree.
    pub fn title_text(&self) -> Option<String> {
        let mut title = None;
        self.walk(&mut |view| {
            if title.is_some() {
                return;
            }
            if let ViewKind::Title(text) = &view.kind {
                title = Some(text.clone());
            }
        });
        title
    }

    /// Keys of the direct children, in order.
    pub fn child_keys(&self) -> Vec<Option<&str>> {
        self.children.iter().map(|child| child.key.as_deref()).collect()
    }
}
