//! Shape tables - subcell offsets for every shape and orientation
//!
//! Offsets are relative to the piece anchor and lie in a 4x4 box whose
//! top-left corner is the anchor. The tables follow the standard rotation
//! system layouts. In the spawn orientation (North) every shape occupies
//! rows 0 and 1 of its box, with its lowest subcell on row 1.

use crate::types::{Point, Rotation, ShapeKind};

/// The 4 subcell offsets of a shape in one orientation
pub type ShapeOffsets = [Point; 4];

const fn p(x: i16, y: i16) -> Point {
    Point::new(x, y)
}

/// Indexed by `[shape][rotation]`, shapes in [`ShapeKind::ALL`] order,
/// rotations clockwise from North.
const SHAPES: [[ShapeOffsets; 4]; 7] = [
    // I
    [
        [p(0, 1), p(1, 1), p(2, 1), p(3, 1)],
        [p(2, 0), p(2, 1), p(2, 2), p(2, 3)],
        [p(0, 2), p(1, 2), p(2, 2), p(3, 2)],
        [p(1, 0), p(1, 1), p(1, 2), p(1, 3)],
    ],
    // O
    [
        [p(1, 0), p(2, 0), p(1, 1), p(2, 1)],
        [p(1, 0), p(2, 0), p(1, 1), p(2, 1)],
        [p(1, 0), p(2, 0), p(1, 1), p(2, 1)],
        [p(1, 0), p(2, 0), p(1, 1), p(2, 1)],
    ],
    // T
    [
        [p(1, 0), p(0, 1), p(1, 1), p(2, 1)],
        [p(1, 0), p(1, 1), p(2, 1), p(1, 2)],
        [p(0, 1), p(1, 1), p(2, 1), p(1, 2)],
        [p(1, 0), p(0, 1), p(1, 1), p(1, 2)],
    ],
    // S
    [
        [p(1, 0), p(2, 0), p(0, 1), p(1, 1)],
        [p(1, 0), p(1, 1), p(2, 1), p(2, 2)],
        [p(1, 1), p(2, 1), p(0, 2), p(1, 2)],
        [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
    ],
    // Z
    [
        [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
        [p(2, 0), p(1, 1), p(2, 1), p(1, 2)],
        [p(0, 1), p(1, 1), p(1, 2), p(2, 2)],
        [p(1, 0), p(0, 1), p(1, 1), p(0, 2)],
    ],
    // J
    [
        [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
        [p(1, 0), p(2, 0), p(1, 1), p(1, 2)],
        [p(0, 1), p(1, 1), p(2, 1), p(2, 2)],
        [p(1, 0), p(1, 1), p(0, 2), p(1, 2)],
    ],
    // L
    [
        [p(2, 0), p(0, 1), p(1, 1), p(2, 1)],
        [p(1, 0), p(1, 1), p(1, 2), p(2, 2)],
        [p(0, 1), p(1, 1), p(2, 1), p(0, 2)],
        [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
    ],
];

fn shape_index(kind: ShapeKind) -> usize {
    match kind {
        ShapeKind::I => 0,
        ShapeKind::O => 1,
        ShapeKind::T => 2,
        ShapeKind::S => 3,
        ShapeKind::Z => 4,
        ShapeKind::J => 5,
        ShapeKind::L => 6,
    }
}

/// Subcell offsets for a shape in the given orientation
pub fn offsets(kind: ShapeKind, rotation: Rotation) -> ShapeOffsets {
    SHAPES[shape_index(kind)][rotation.index()]
}
