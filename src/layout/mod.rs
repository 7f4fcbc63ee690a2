//! Layout Module - flexbox layout of the view tree.
//!
//! Uses [Taffy](https://github.com/DioxusLabs/taffy) for W3C-compliant
//! flexbox computation, in terminal cells.

mod taffy_bridge;

pub use taffy_bridge::compute_layout;

/// Absolute position and size of one view node, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutBox {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl LayoutBox {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let rect = LayoutBox { x: 2, y: 1, width: 3, height: 2 };
        assert!(rect.contains(2, 1));
        assert!(rect.contains(4, 2));
        assert!(!rect.contains(5, 1));
        assert!(!rect.contains(2, 3));
        assert!(!rect.contains(1, 1));
    }
}
