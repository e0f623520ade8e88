//! Piece module - the active falling piece
//!
//! Moves and rotations never check legality. Each one first snapshots the
//! current placement, so the caller can validate the result against the
//! field and call [`Piece::restore_old_position`] to discard it.

use crate::shapes::{offsets, ShapeOffsets};
use crate::types::{Point, RenderBuffer, Rotation, ShapeKind, SPAWN_ANCHOR};

/// Anchor and orientation; everything a move or rotation can change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Placement {
    anchor: Point,
    rotation: Rotation,
}

/// A four-subcell piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    current: Placement,
    saved: Placement,
}

impl Piece {
    /// A fresh piece in spawn orientation, anchored at the origin
    pub fn new(kind: ShapeKind) -> Self {
        Self::at(kind, Point::default(), Rotation::North)
    }

    /// A piece already moved to the spawn anchor
    pub fn spawned(kind: ShapeKind) -> Self {
        let mut piece = Self::new(kind);
        piece.to_field_start_pos();
        piece
    }

    /// A piece at an explicit placement
    pub fn at(kind: ShapeKind, anchor: Point, rotation: Rotation) -> Self {
        let placement = Placement { anchor, rotation };
        Self {
            kind,
            current: placement,
            saved: placement,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn anchor(&self) -> Point {
        self.current.anchor
    }

    pub fn rotation(&self) -> Rotation {
        self.current.rotation
    }

    fn save(&mut self) {
        self.saved = self.current;
    }

    fn translate(&mut self, delta: Point) {
        self.save();
        self.current.anchor = self.current.anchor + delta;
    }

    pub fn move_left(&mut self) {
        self.translate(Point::new(-1, 0));
    }

    pub fn move_right(&mut self) {
        self.translate(Point::new(1, 0));
    }

    pub fn move_down(&mut self) {
        self.translate(Point::new(0, 1));
    }

    /// Rotate counter-clockwise
    pub fn rotate_left(&mut self) {
        self.save();
        self.current.rotation = self.current.rotation.rotate_ccw();
    }

    /// Rotate clockwise
    pub fn rotate_right(&mut self) {
        self.save();
        self.current.rotation = self.current.rotation.rotate_cw();
    }

    /// Undo the last move or rotation
    pub fn restore_old_position(&mut self) {
        self.current = self.saved;
    }

    /// Move to the spawn anchor. The snapshot is reset too, so a rollback
    /// right after spawning stays at the spawn anchor.
    pub fn to_field_start_pos(&mut self) {
        self.current.anchor = SPAWN_ANCHOR;
        self.save();
    }

    /// Subcell offsets relative to the anchor
    pub fn offsets(&self) -> ShapeOffsets {
        offsets(self.kind, self.current.rotation)
    }

    /// Subcell positions in field coordinates
    pub fn global_points(&self) -> [Point; 4] {
        let anchor = self.current.anchor;
        self.offsets().map(|o| anchor + o)
    }

    /// Leftmost subcell column
    pub fn left(&self) -> i16 {
        self.global_points().iter().map(|p| p.x).min().unwrap_or(0)
    }

    /// Rightmost subcell column
    pub fn right(&self) -> i16 {
        self.global_points().iter().map(|p| p.x).max().unwrap_or(0)
    }

    /// Lowest subcell row (largest y)
    pub fn bottom(&self) -> i16 {
        self.global_points().iter().map(|p| p.y).max().unwrap_or(0)
    }

    pub fn is_colliding_with_point(&self, point: Point) -> bool {
        self.global_points().contains(&point)
    }

    /// Draw the shape glyph at `origin + subcell` for every subcell.
    pub fn fill_field_buffer(&self, origin: Point, buffer: &mut RenderBuffer) {
        let glyph = self.kind.glyph();
        for point in self.global_points() {
            buffer.put_char(origin + point, glyph);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_piece_at_origin() {
        let piece = Piece::new(ShapeKind::T);
        assert_eq!(piece.anchor(), Point::new(0, 0));
        assert_eq!(piece.rotation(), Rotation::North);
    }

    #[test]
    fn test_spawned_piece_bottom_on_row_zero() {
        for kind in ShapeKind::ALL {
            let piece = Piece::spawned(kind);
            assert_eq!(piece.anchor(), SPAWN_ANCHOR);
            assert_eq!(piece.bottom(), 0, "{:?}", kind);
        }
    }

    #[test]
    fn test_moves_translate_anchor() {
        let mut piece = Piece::new(ShapeKind::O);
        piece.move_right();
        piece.move_right();
        piece.move_down();
        piece.move_left();
        assert_eq!(piece.anchor(), Point::new(1, 1));
    }

    #[test]
    fn test_restore_reverts_last_move_only() {
        let mut piece = Piece::new(ShapeKind::L);
        piece.move_right();
        piece.move_down();
        piece.restore_old_position();
        assert_eq!(piece.anchor(), Point::new(1, 0));
    }

    #[test]
    fn test_restore_reverts_rotation() {
        let mut piece = Piece::new(ShapeKind::J);
        piece.rotate_right();
        assert_eq!(piece.rotation(), Rotation::East);
        piece.restore_old_position();
        assert_eq!(piece.rotation(), Rotation::North);
    }

    #[test]
    fn test_restore_after_spawn_stays_at_spawn() {
        let mut piece = Piece::new(ShapeKind::S);
        piece.move_down();
        piece.to_field_start_pos();
        piece.restore_old_position();
        assert_eq!(piece.anchor(), SPAWN_ANCHOR);
    }

    #[test]
    fn test_edges() {
        // I north: row 1 of the box, columns 0..=3
        let piece = Piece::at(ShapeKind::I, Point::new(2, 5), Rotation::North);
        assert_eq!(piece.left(), 2);
        assert_eq!(piece.right(), 5);
        assert_eq!(piece.bottom(), 6);

        // I east: column 2 of the box, rows 0..=3
        let piece = Piece::at(ShapeKind::I, Point::new(2, 5), Rotation::East);
        assert_eq!(piece.left(), 4);
        assert_eq!(piece.right(), 4);
        assert_eq!(piece.bottom(), 8);
    }

    #[test]
    fn test_fill_field_buffer_clips() {
        let mut buffer = RenderBuffer::new();
        let piece = Piece::at(ShapeKind::O, Point::new(-2, -1), Rotation::North);
        // Subcells at x = -1, 0 and y = -1, 0; only (0, 0) is on the buffer.
        piece.fill_field_buffer(Point::new(0, 0), &mut buffer);
        assert_eq!(buffer.get(Point::new(0, 0)), Some(ShapeKind::O.glyph()));
        assert_eq!(buffer.get(Point::new(1, 0)), Some(' '));
    }
}
