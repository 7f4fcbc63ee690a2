//! Paint - turns a laid-out view tree into a [`Frame`].

use std::fmt;

use super::buffer::FrameBuffer;
use crate::layout::LayoutBox;
use crate::view::{Handler, View, ViewKind};

/// Clickable area produced by a button.
#[derive(Clone)]
pub struct HitRegion {
    pub rect: LayoutBox,
    pub label: String,
    pub on_press: Handler,
}

impl fmt::Debug for HitRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HitRegion")
            .field("rect", &self.rect)
            .field("label", &self.label)
            .finish()
    }
}

/// Result of one render pass.
///
/// `buffer` is the visible window. Hit regions stay in page coordinates;
/// [`Frame::hit_test`] takes screen coordinates and adds `scroll_y`.
#[derive(Debug, Clone)]
pub struct Frame {
    pub buffer: FrameBuffer,
    pub hit_regions: Vec<HitRegion>,
    pub title: Option<String>,
    pub texts: Vec<String>,
    /// First page row shown on screen, already clamped.
    pub scroll_y: u16,
    /// Largest useful `scroll_y` for this page and viewport.
    pub max_scroll_y: u16,
}

impl Frame {
    /// Topmost hit region under screen cell (x, y).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&HitRegion> {
        if y >= self.buffer.height() {
            return None;
        }
        let page_y = y.saturating_add(self.scroll_y);
        self.hit_regions.iter().rev().find(|region| region.rect.contains(x, page_y))
    }
}

/// Paint `view` into a `width` x `height` window starting at page row
/// `scroll_y` (clamped to the page).
///
/// `boxes` must be the pre-order layout of `view`.
pub fn paint(view: &View, boxes: &[LayoutBox], width: u16, height: u16, scroll_y: u16) -> Frame {
    let page_height = boxes.first().map_or(0, |root| root.y.saturating_add(root.height));
    let max_scroll_y = page_height.saturating_sub(height);
    let scroll_y = scroll_y.min(max_scroll_y);

    let mut page = FrameBuffer::new(width, page_height.max(height));
    let mut hit_regions = Vec::new();

    let mut index = 0;
    view.walk(&mut |node| {
        let Some(&rect) = boxes.get(index) else { return };
        index += 1;

        page.draw_border(rect, node.style.borders);

        let (dx, dy) = node.style.content_offset();
        let content_x = rect.x.saturating_add(dx);
        let content_y = rect.y.saturating_add(dy);
        let content_width = rect.width.saturating_sub(dx * 2);

        match &node.kind {
            ViewKind::Text(text) => {
                page.draw_text(content_x, content_y, text, content_width);
            }
            ViewKind::Button { label, on_press } => {
                page.draw_text(content_x, content_y, label, content_width);
                hit_regions.push(HitRegion {
                    rect,
                    label: label.clone(),
                    on_press: on_press.clone(),
                });
            }
            ViewKind::Block | ViewKind::Title(_) => {}
        }
    });

    Frame {
        buffer: page.rows(scroll_y, height),
        hit_regions,
        title: view.title_text(),
        texts: view.texts(),
        scroll_y,
        max_scroll_y,
    }
}
