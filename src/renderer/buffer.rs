//! FrameBuffer - a grid of characters, one per terminal cell.

use crate::layout::LayoutBox;
use crate::view::Borders;

/// 2D cell grid. Out-of-bounds writes are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Write `text` starting at (x, y), at most `max_width` cells.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, max_width: u16) {
        for (i, ch) in text.chars().take(max_width as usize).enumerate() {
            let Some(cx) = x.checked_add(i as u16) else { break };
            self.set(cx, y, ch);
        }
    }

    /// Draw the requested sides of `rect` with box-drawing glyphs.
    pub fn draw_border(&mut self, rect: LayoutBox, borders: Borders) {
        if borders.is_empty() || rect.width == 0 || rect.height == 0 {
            return;
        }

        let left = rect.x;
        let top = rect.y;
        let right = rect.x.saturating_add(rect.width - 1);
        let bottom = rect.y.saturating_add(rect.height - 1);

        for x in left..=right {
            if borders.contains(Borders::TOP) {
                self.set(x, top, '─');
            }
            if borders.contains(Borders::BOTTOM) {
                self.set(x, bottom, '─');
            }
        }
        for y in top..=bottom {
            if borders.contains(Borders::LEFT) {
                self.set(left, y, '│');
            }
            if borders.contains(Borders::RIGHT) {
                self.set(right, y, '│');
            }
        }

        let corners = [
            (Borders::TOP | Borders::LEFT, left, top, '┌'),
            (Borders::TOP | Borders::RIGHT, right, top, '┐'),
            (Borders::BOTTOM | Borders::LEFT, left, bottom, '└'),
            (Borders::BOTTOM | Borders::RIGHT, right, bottom, '┘'),
        ];
        for (sides, x, y, glyph) in corners {
            if borders.contains(sides) {
                self.set(x, y, glyph);
            }
        }
    }

    /// Copy of `count` rows starting at `start`. Rows past the end are blank.
    pub fn rows(&self, start: u16, count: u16) -> FrameBuffer {
        let mut window = FrameBuffer::new(self.width, count);
        for row in 0..count {
            let Some(src_y) = start.checked_add(row) else { break };
            if src_y >= self.height {
                break;
            }
            let src = src_y as usize * self.width as usize;
            let dst = row as usize * self.width as usize;
            let width = self.width as usize;
            window.cells[dst..dst + width].copy_from_slice(&self.cells[src..src + width]);
        }
        window
    }

    /// Rows as strings with trailing spaces removed.
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .take(self.height as usize)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_blank() {
        let buffer = FrameBuffer::new(4, 2);
        assert_eq!(buffer.get(0, 0), Some(' '));
        assert_eq!(buffer.get(4, 0), None);
        assert_eq!(buffer.lines(), vec!["", ""]);
    }

    #[test]
    fn test_draw_text_clips() {
        let mut buffer = FrameBuffer::new(6, 1);
        buffer.draw_text(1, 0, "abcdef", 3);
        assert_eq!(buffer.lines(), vec![" abc"]);

        buffer.draw_text(4, 0, "xyz", 10);
        assert_eq!(buffer.lines(), vec![" abcxy"]);
    }

    #[test]
    fn test_draw_full_border() {
        let mut buffer = FrameBuffer::new(5, 3);
        buffer.draw_border(LayoutBox { x: 0, y: 0, width: 5, height: 3 }, Borders::ALL);
        assert_eq!(buffer.lines(), vec!["┌───┐", "│   │", "└───┘"]);
    }

    #[test]
    fn test_rows_window() {
        let mut buffer = FrameBuffer::new(2, 4);
        for (y, ch) in ['a', 'b', 'c', 'd'].into_iter().enumerate() {
            buffer.set(0, y as u16, ch);
        }

        assert_eq!(buffer.rows(1, 2).lines(), vec!["b", "c"]);
        assert_eq!(buffer.rows(3, 3).lines(), vec!["d", "", ""]);
    }

    #[test]
    fn test_draw_partial_border() {
        let mut buffer = FrameBuffer::new(3, 2);
        buffer.draw_border(LayoutBox { x: 0, y: 0, width: 3, height: 2 }, Borders::BOTTOM);
        assert_eq!(buffer.lines(), vec!["", "───"]);
    }
}
