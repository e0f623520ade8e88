//! Field tests - collision and row clearing through the public API

use blockfall::core::{Field, Piece, SettledCell};
use blockfall::types::{Point, Rotation, ShapeKind, FIELD_COLUMNS, FIELD_ROWS};

fn cell(x: i16, y: i16) -> SettledCell {
    SettledCell::new(Point::new(x, y), ShapeKind::T)
}

fn positions(field: &Field) -> Vec<Point> {
    let mut points: Vec<Point> = field.cells().iter().map(|c| c.position()).collect();
    points.sort_by_key(|p| (p.y, p.x));
    points
}

// ============== Collision Tests ==============

#[test]
fn test_spawned_pieces_do_not_collide_on_empty_field() {
    let field = Field::new();
    for kind in ShapeKind::ALL {
        assert!(!field.collides(&Piece::spawned(kind)), "{:?}", kind);
    }
}

#[test]
fn test_walls_and_floor() {
    let field = Field::new();

    // O occupies columns 1 and 2 of its box.
    assert!(field.collides(&Piece::at(ShapeKind::O, Point::new(-2, 0), Rotation::North)));
    assert!(!field.collides(&Piece::at(ShapeKind::O, Point::new(-1, 0), Rotation::North)));
    assert!(!field.collides(&Piece::at(ShapeKind::O, Point::new(7, 0), Rotation::North)));
    assert!(field.collides(&Piece::at(ShapeKind::O, Point::new(8, 0), Rotation::North)));

    // Bottom on the last row is legal, one more is the floor.
    assert!(!field.collides(&Piece::at(ShapeKind::O, Point::new(3, 18), Rotation::North)));
    assert!(field.collides(&Piece::at(ShapeKind::O, Point::new(3, 19), Rotation::North)));
}

#[test]
fn test_settled_cell_blocks_piece() {
    let field = Field::from_cells([cell(4, 10)]);
    let piece = Piece::at(ShapeKind::O, Point::new(3, 9), Rotation::North);
    assert!(field.collides(&piece));

    let beside = Piece::at(ShapeKind::O, Point::new(4, 9), Rotation::North);
    assert!(!field.collides(&beside));
}

#[test]
fn test_move_left_until_blocked_then_roll_back() {
    let field = Field::new();
    let mut piece = Piece::spawned(ShapeKind::T);

    loop {
        piece.move_left();
        if field.collides(&piece) {
            piece.restore_old_position();
            break;
        }
    }

    assert_eq!(piece.left(), 0);
    assert!(!field.collides(&piece));
}

// ============== Row Clearing Tests ==============

#[test]
fn test_no_full_rows_changes_nothing() {
    let mut field = Field::from_cells([cell(0, 19), cell(5, 19), cell(3, 4)]);
    let before = field.clone();

    assert_eq!(field.clear_full_rows(), 0);
    assert_eq!(field, before);
}

#[test]
fn test_single_bottom_row_shifts_everything_above() {
    let mut field = Field::new();
    field.fill_row(FIELD_ROWS - 1, ShapeKind::I);
    field.insert(cell(2, 18));
    field.insert(cell(7, 12));

    assert_eq!(field.clear_full_rows(), 1);
    assert_eq!(positions(&field), vec![Point::new(7, 13), Point::new(2, 19)]);
}

#[test]
fn test_four_rows_cleared_at_once() {
    let mut field = Field::new();
    for row in 16..20 {
        field.fill_row(row, ShapeKind::I);
    }
    field.insert(cell(0, 15));

    assert_eq!(field.clear_full_rows(), 4);
    assert_eq!(positions(&field), vec![Point::new(0, 19)]);
}

#[test]
fn test_separated_full_rows_are_all_cleared() {
    let mut field = Field::new();
    field.fill_row(19, ShapeKind::J);
    field.fill_row(17, ShapeKind::L);
    field.insert(cell(4, 18));

    assert_eq!(field.clear_full_rows(), 2);
    assert_eq!(positions(&field), vec![Point::new(4, 19)]);
}

#[test]
fn test_row_counts_ignore_spawn_zone() {
    let mut field = Field::new();
    for x in 0..FIELD_COLUMNS {
        field.insert(cell(x, -1));
    }

    assert!(field.row_counts().iter().all(|&c| c == 0));
    assert_eq!(field.clear_full_rows(), 0);
}
