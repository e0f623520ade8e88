//! Field module - settled cells and the rules that act on them
//!
//! The field is 10 columns x 20 rows. Occupancy is implicit: it is the set of
//! settled cell positions. There is no dense grid.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the field (y < 0) are open space; pieces may sit there after spawning.

use crate::piece::Piece;
use crate::settled::SettledCell;
use crate::types::{Point, ShapeKind, FIELD_COLUMNS, FIELD_ROWS};

/// Number of field rows as an array length
pub const ROW_COUNT: usize = FIELD_ROWS as usize;

/// All settled cells of a game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    cells: Vec<SettledCell>,
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Create a field from existing settled cells
    pub fn from_cells(cells: impl IntoIterator<Item = SettledCell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    pub fn cells(&self) -> &[SettledCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn insert(&mut self, cell: SettledCell) {
        self.cells.push(cell);
    }

    /// Fill every column of `row` with cells of `kind`
    pub fn fill_row(&mut self, row: i16, kind: ShapeKind) {
        for x in 0..FIELD_COLUMNS {
            self.insert(SettledCell::new(Point::new(x, row), kind));
        }
    }

    pub fn is_occupied(&self, point: Point) -> bool {
        self.cells.iter().any(|cell| cell.position() == point)
    }

    /// Whether `piece` is in an illegal place
    ///
    /// Left edge is inclusive at 0, right edge is half-open at the column count,
    /// and a bottom exactly on the row count means the piece went through the floor.
    pub fn collides(&self, piece: &Piece) -> bool {
        if piece.left() < 0 {
            return true;
        }
        if piece.right() >= FIELD_COLUMNS {
            return true;
        }
        if piece.bottom() == FIELD_ROWS {
            return true;
        }
        self.cells
            .iter()
            .any(|cell| piece.is_colliding_with_point(cell.position()))
    }

    /// Turn the 4 subcells of `piece` into settled cells
    pub fn freeze(&mut self, piece: &Piece) {
        let kind = piece.kind();
        self.cells.extend(
            piece
                .global_points()
                .into_iter()
                .map(|point| SettledCell::new(point, kind)),
        );
    }

    /// Settled cells per field row; cells outside the field rows are not counted
    pub fn row_counts(&self) -> [u16; ROW_COUNT] {
        let mut counts = [0u16; ROW_COUNT];
        for cell in &self.cells {
            if let Ok(row) = usize::try_from(cell.position().y) {
                if let Some(count) = counts.get_mut(row) {
                    *count += 1;
                }
            }
        }
        counts
    }

    /// Topmost full row, if any
    pub fn first_full_row(&self) -> Option<i16> {
        self.row_counts()
            .iter()
            .position(|&count| count == FIELD_COLUMNS as u16)
            .map(|row| row as i16)
    }

    /// Remove every cell on `row` and shift the cells above it one row down
    pub fn clean_full_row(&mut self, row: i16) {
        self.cells.retain(|cell| cell.position().y != row);
        for cell in &mut self.cells {
            if cell.position().y < row {
                cell.move_down();
            }
        }
    }

    /// Clear full rows until none is left; returns how many were removed
    ///
    /// Rows go one at a time, topmost first, and the counts are rebuilt after
    /// every removal because shifting can complete or relabel rows.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut removed = 0;
        while let Some(row) = self.first_full_row() {
            self.clean_full_row(row);
            removed += 1;
        }
        removed
    }
}
