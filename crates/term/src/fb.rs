//! Framebuffer and style types for terminal rendering.

use std::fmt::Write;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }
}

impl CellStyle {
    pub fn cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    #[inline(always)]
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` starting at column `x`, which may be negative or past the edge.
    ///
    /// Characters left of column 0 or right of the last column are dropped.
    pub fn put_str_clipped(&mut self, x: i32, y: u16, s: &str, style: CellStyle) {
        for (k, ch) in s.chars().enumerate() {
            let cx = x.saturating_add(k as i32);
            if cx < 0 {
                continue;
            }
            if cx >= self.width as i32 {
                break;
            }
            self.put_char(cx as u16, y, ch, style);
        }
    }

    /// Iterate rows (top to bottom) as cell slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact panics on 0; an empty buffer simply has no rows.
        self.cells.chunks_exact(self.width.max(1) as usize)
    }

    /// Characters of row `y`, without styling.
    pub fn row_text(&self, y: u16) -> String {
        let mut s = String::with_capacity(self.width as usize);
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                s.push(cell.ch);
            }
        }
        s
    }

    /// Serialize the characters into `out`, rows joined by `\n` (no trailing newline).
    pub fn write_text<W: Write + ?Sized>(&self, out: &mut W) -> std::fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                out.write_char('\n')?;
            }
            for cell in row {
                out.write_char(cell.ch)?;
            }
        }
        Ok(())
    }

    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        // Writing into a String cannot fail.
        let _ = self.write_text(&mut out);
        out
    }
}

impl std::fmt::Display for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_text(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipped_str_drops_both_edges() {
        let style = CellStyle::default();
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str_clipped(-2, 0, "abcdefg", style);
        assert_eq!(fb.row_text(0), "cdef");

        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str_clipped(3, 0, "xyz", style);
        assert_eq!(fb.row_text(0), "   x");
    }

    #[test]
    fn text_joins_rows_with_newlines() {
        let style = CellStyle::default();
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(0, 0, 'A', style);
        fb.put_char(1, 0, 'B', style);
        fb.put_char(0, 1, 'C', style);
        fb.put_char(1, 1, 'D', style);
        assert_eq!(fb.to_text(), "AB\nCD");
        assert_eq!(fb.to_string(), "AB\nCD");
    }

    #[test]
    fn write_text_appends_to_existing_buffer() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str_clipped(0, 1, "xyz", CellStyle::default());
        let mut out = String::from(">");
        fb.write_text(&mut out).unwrap();
        assert_eq!(out, ">   \nxyz");
        assert_eq!(format!("[{fb}]"), "[   \nxyz]");
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(5, 5, 'X', CellStyle::default());
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
        assert_eq!(fb.get(2, 0), None);
    }

    #[test]
    fn resize_keeps_cell_count_consistent() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.resize(5, 4);
        assert_eq!(fb.cells().len(), 20);
        assert_eq!((fb.width(), fb.height()), (5, 4));
    }
}
