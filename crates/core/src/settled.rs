//! Cells left behind by landed pieces.

use crate::types::{Point, RenderBuffer, ShapeKind};

/// One occupied field cell. The shape tag only picks the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettledCell {
    position: Point,
    kind: ShapeKind,
}

impl SettledCell {
    pub fn new(position: Point, kind: ShapeKind) -> Self {
        Self { position, kind }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Shift one row down (row compaction)
    pub fn move_down(&mut self) {
        self.position.y += 1;
    }

    pub fn fill_field_buffer(&self, origin: Point, buffer: &mut RenderBuffer) {
        buffer.put_char(origin + self.position, self.kind.glyph());
    }
}
