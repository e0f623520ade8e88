//! Fixed-size character grid handed to the display.

use crate::{Point, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Screen-sized grid of characters, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderBuffer {
    cells: [[char; SCREEN_WIDTH]; SCREEN_HEIGHT],
}

impl RenderBuffer {
    /// A buffer filled with spaces.
    pub fn new() -> Self {
        Self {
            cells: [[' '; SCREEN_WIDTH]; SCREEN_HEIGHT],
        }
    }

    pub fn height(&self) -> usize {
        SCREEN_HEIGHT
    }

    #[inline(always)]
    fn idx(p: Point) -> Option<(usize, usize)> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return None;
        }
        Some((x, y))
    }

    /// Character at `p`, or `None` off the buffer.
    pub fn get(&self, p: Point) -> Option<char> {
        Self::idx(p).map(|(x, y)| self.cells[y][x])
    }

    /// Write `ch` at `p`. Positions off the buffer are ignored.
    pub fn put_char(&mut self, p: Point, ch: char) {
        if let Some((x, y)) = Self::idx(p) {
            self.cells[y][x] = ch;
        }
    }

    /// Write `s` left to right starting at `p`, clipped at the right edge.
    pub fn put_str(&mut self, p: Point, s: &str) {
        for (dx, ch) in s.chars().enumerate() {
            let Ok(dx) = i16::try_from(dx) else {
                break;
            };
            self.put_char(Point::new(p.x + dx, p.y), ch);
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(' ');
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char; SCREEN_WIDTH]> {
        self.cells.iter()
    }

    /// Row `y` as a string (for tests and plain-text dumps).
    pub fn row_string(&self, y: usize) -> String {
        self.cells
            .get(y)
            .map(|row| row.iter().collect())
            .unwrap_or_default()
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
