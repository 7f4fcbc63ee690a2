//! Taffy Bridge - converts a View tree to Taffy styles and back.
//!
//! Blocks become flex columns, text and buttons become measured leaves, and
//! title nodes are `Display::None`. Results come back in view pre-order with
//! absolute cell coordinates.

use taffy::{
    AvailableSpace, Dimension, Display, FlexDirection, LengthPercentage, NodeId, Point, Rect, Size,
    Style, TaffyTree,
};

use crate::error::Result;
use crate::view::{Borders, View, ViewKind, ViewStyle};

use super::LayoutBox;

// =============================================================================
// STYLE CONVERSION
// =============================================================================

fn to_taffy_dimension(cells: Option<u16>) -> Dimension {
    match cells {
        Some(n) => Dimension::Length(n as f32),
        None => Dimension::Auto,
    }
}

fn side(borders: Borders, flag: Borders) -> LengthPercentage {
    LengthPercentage::Length(if borders.contains(flag) { 1.0 } else { 0.0 })
}

fn build_style(view: &View) -> Style {
    let ViewStyle {
        width,
        height,
        padding_x,
        padding_y,
        borders,
    } = view.style;

    Style {
        display: match view.kind {
            ViewKind::Title(_) => Display::None,
            _ => Display::Flex,
        },
        flex_direction: FlexDirection::Column,
        flex_shrink: 0.0,
        size: Size {
            width: to_taffy_dimension(width),
            height: to_taffy_dimension(height),
        },
        padding: Rect {
            top: LengthPercentage::Length(padding_y as f32),
            right: LengthPercentage::Length(padding_x as f32),
            bottom: LengthPercentage::Length(padding_y as f32),
            left: LengthPercentage::Length(padding_x as f32),
        },
        border: Rect {
            top: side(borders, Borders::TOP),
            right: side(borders, Borders::RIGHT),
            bottom: side(borders, Borders::BOTTOM),
            left: side(borders, Borders::LEFT),
        },
        ..Default::default()
    }
}

/// Content width of a measured leaf, if the view is one.
fn measured_width(view: &View) -> Option<u16> {
    match &view.kind {
        ViewKind::Text(text) => Some(text.chars().count() as u16),
        ViewKind::Button { label, .. } => Some(label.chars().count() as u16),
        ViewKind::Block | ViewKind::Title(_) => None,
    }
}

// =============================================================================
// TREE CONSTRUCTION
// =============================================================================

fn build_node(tree: &mut TaffyTree<u16>, view: &View, nodes: &mut Vec<NodeId>) -> Result<NodeId> {
    let style = build_style(view);
    let node = match measured_width(view) {
        Some(width) => tree.new_leaf_with_context(style, width)?,
        None => tree.new_leaf(style)?,
    };
    nodes.push(node);

    for child in &view.children {
        let child_node = build_node(tree, child, nodes)?;
        tree.add_child(node, child_node)?;
    }

    Ok(node)
}

fn collect_boxes(
    tree: &TaffyTree<u16>,
    view: &View,
    nodes: &[NodeId],
    cursor: &mut usize,
    origin: Point<f32>,
    out: &mut Vec<LayoutBox>,
) -> Result<()> {
    let layout = tree.layout(nodes[*cursor])?;
    *cursor += 1;

    let x = origin.x + layout.location.x;
    let y = origin.y + layout.location.y;
    out.push(LayoutBox {
        x: x.round() as u16,
        y: y.round() as u16,
        width: layout.size.width.round() as u16,
        height: layout.size.height.round() as u16,
    });

    for child in &view.children {
        collect_boxes(tree, child, nodes, cursor, Point { x, y }, out)?;
    }
    Ok(())
}

// =============================================================================
// LAYOUT COMPUTATION
// =============================================================================

/// Lay out `view` in a viewport `width` cells wide.
///
/// Height is unconstrained; content below the viewport is clipped at paint
/// time. Returns one box per view node, in pre-order.
pub fn compute_layout(view: &View, width: u16) -> Result<Vec<LayoutBox>> {
    let mut tree: TaffyTree<u16> = TaffyTree::new();
    let mut nodes = Vec::new();
    let root = build_node(&mut tree, view, &mut nodes)?;

    // The root always spans the viewport.
    let mut root_style = tree.style(root)?.clone();
    root_style.size.width = Dimension::Length(width as f32);
    tree.set_style(root, root_style)?;

    let available = Size {
        width: AvailableSpace::Definite(width as f32),
        height: AvailableSpace::MaxContent,
    };

    tree.compute_layout_with_measure(
        root,
        available,
        |known_dimensions: Size<Option<f32>>,
         _available_space: Size<AvailableSpace>,
         _node_id: NodeId,
         context: Option<&mut u16>,
         _style: &Style| match context {
            Some(&mut content_width) => Size {
                width: known_dimensions.width.unwrap_or(content_width as f32),
                height: known_dimensions.height.unwrap_or(1.0),
            },
            None => Size::ZERO,
        },
    )?;

    let mut boxes = Vec::with_capacity(nodes.len());
    let mut cursor = 0;
    collect_boxes(&tree, view, &nodes, &mut cursor, Point { x: 0.0, y: 0.0 }, &mut boxes)?;
    Ok(boxes)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_single_text() {
        let boxes = compute_layout(&View::text("hello"), 40).unwrap();
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].x, 0);
        assert_eq!(boxes[0].y, 0);
        assert_eq!(boxes[0].width, 40);
        assert_eq!(boxes[0].height, 1);
    }

    #[test]
    fn test_column_stacks_children() {
        let view = View::block(vec![View::text("a"), View::text("b"), View::text("c")]);
        let boxes = compute_layout(&view, 20).unwrap();

        assert_eq!(boxes.len(), 4);
        assert_eq!(boxes[0].height, 3);
        assert_eq!(boxes[1].y, 0);
        assert_eq!(boxes[2].y, 1);
        assert_eq!(boxes[3].y, 2);
    }

    #[test]
    fn test_border_and_padding_offset_content() {
        let style = ViewStyle {
            padding_x: 2,
            borders: Borders::ALL,
            ..Default::default()
        };
        let view = View::block(vec![View::block(vec![View::text("x")]).with_style(style)]);
        let boxes = compute_layout(&view, 30).unwrap();

        // root, bordered entry, text
        assert_eq!(boxes[1].height, 3);
        assert_eq!(boxes[1].width, 30);
        assert_eq!(boxes[2].x, 3);
        assert_eq!(boxes[2].y, 1);
    }

    #[test]
    fn test_fixed_size_and_button_measure() {
        let button_style = ViewStyle {
            padding_x: 1,
            borders: Borders::ALL,
            ..Default::default()
        };
        let frame_style = ViewStyle {
            width: Some(15),
            height: Some(3),
            ..Default::default()
        };
        let view = View::block(vec![
            View::block(vec![View::button("Click me!", Rc::new(|| {})).with_style(button_style)])
                .with_style(frame_style),
            View::text("after"),
        ]);
        let boxes = compute_layout(&view, 80).unwrap();

        assert_eq!(boxes[1].width, 15);
        assert_eq!(boxes[1].height, 3);
        assert_eq!(boxes[2].height, 3);
        assert_eq!(boxes[3].y, 3);
    }

    #[test]
    fn test_title_takes_no_space() {
        let view = View::block(vec![View::title("Home"), View::text("body")]);
        let boxes = compute_layout(&view, 10).unwrap();

        assert_eq!(boxes[1].height, 0);
        assert_eq!(boxes[2].y, 0);
    }
}
