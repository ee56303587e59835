//! Equirectangular character map.

use thiserror::Error;

/// Reasons a map text is rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextureError {
    /// No rows, or rows with no characters.
    #[error("map is empty")]
    Empty,

    /// A row whose character count differs from the first row.
    #[error("map row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Immutable row-major grid of characters.
///
/// Invariant: `width >= 1`, `height >= 1`, and every row has exactly `width` chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Texture {
    /// Parse a map from text, one row per line.
    ///
    /// Both `\n` and `\r\n` line endings are accepted. Blank lines at the end of the
    /// text are ignored; a blank line anywhere else is a ragged row.
    pub fn parse(text: &str) -> Result<Self, TextureError> {
        let mut rows: Vec<&str> = text.lines().collect();
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        Self::from_rows(rows)
    }

    /// Build a map from explicit rows.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, TextureError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width = 0usize;
        let mut height = 0usize;

        for (row, line) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(line.as_ref().chars());
            let found = cells.len() - before;

            if row == 0 {
                width = found;
            } else if found != width {
                return Err(TextureError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        if width == 0 || height == 0 {
            return Err(TextureError::Empty);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// Iterate rows as char slices (top to bottom).
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks_exact(self.width)
    }
}
