//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, frame composition, terminal I/O).
//!
//! # Field Dimensions
//!
//! - **Columns**: 10 (indexed 0-9)
//! - **Rows**: 20 (indexed 0-19)
//! - **Spawn anchor**: (3, -1), so every spawn orientation rests its bottom subcell on row 0
//!
//! Rows above the field (negative y) are legal piece positions; the field has no ceiling.
//!
//! # Timing
//!
//! Step times are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FAST_STEP_MS` | 50 | Step budget while soft dropping |
//! | `MAX_LEVEL` | 10 | Highest reachable level |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines needed per level-up |
//! | `INPUT_POLL_MS` | 5 | Input poll timeout of the run loop |
//!
//! The standard step time is `1000 - 100 * level + 100`:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 1100ms |
//! | 1 | 1000ms |
//! | 5 | 600ms |
//! | 10 | 100ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, Point, Rotation, ShapeKind, FIELD_COLUMNS, FIELD_ROWS};
//!
//! assert_eq!(ShapeKind::from_glyph('+'), Some(ShapeKind::T));
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Command::from_char('a'), Some(Command::MoveLeft));
//! assert_eq!(Point::new(1, 2) + Point::new(3, 4), Point::new(4, 6));
//!
//! assert_eq!(FIELD_COLUMNS, 10);
//! assert_eq!(FIELD_ROWS, 20);
//! ```

use std::ops::{Add, Sub};

pub mod buffer;

pub use buffer::RenderBuffer;

/// Field width in cells (10 columns)
pub const FIELD_COLUMNS: i16 = 10;

/// Field height in cells (20 rows)
pub const FIELD_ROWS: i16 = 20;

/// Anchor a piece is moved to when it spawns
pub const SPAWN_ANCHOR: Point = Point::new(3, -1);

/// Step budget while the soft drop key is held
pub const FAST_STEP_MS: u32 = 50;

/// Base term of the step time formula
pub const BASE_STEP_MS: u32 = 1000;

/// Step time reduction per level
pub const STEP_MS_PER_LEVEL: u32 = 100;

/// Constant offset of the step time formula
pub const STEP_OFFSET_MS: u32 = 100;

/// Highest level; the step time stays positive up to here
pub const MAX_LEVEL: u32 = 10;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points of a line clear before level and line multipliers
pub const LINE_CLEAR_BASE: u64 = 40;

/// Input poll timeout of the run loop
pub const INPUT_POLL_MS: u64 = 5;

/// Key that starts the game from the prompt screen
pub const START_KEY: char = 'k';

/// Screen (render buffer) width in characters
pub const SCREEN_WIDTH: usize = 40;

/// Screen (render buffer) height in characters
pub const SCREEN_HEIGHT: usize = 23;

/// Top-left corner of the playfield frame (left border column)
pub const FIELD_START_X: i16 = 2;
pub const FIELD_START_Y: i16 = 2;

/// Playfield frame width: both side borders plus the interior
pub const FIELD_WHOLE_WIDTH: i16 = FIELD_COLUMNS + 2;

/// Playfield frame height: the interior plus the floor row
pub const FIELD_WHOLE_HEIGHT: i16 = FIELD_ROWS + 1;

/// Top-left corner and size of the next piece preview box
pub const NEXT_BOX_START_X: i16 = 17;
pub const NEXT_BOX_START_Y: i16 = 2;
pub const NEXT_BOX_WIDTH: i16 = 9;
pub const NEXT_BOX_HEIGHT: i16 = 6;

/// Top-left corner of the statistics block
pub const STAT_START_X: i16 = 17;
pub const STAT_START_Y: i16 = 10;

/// Frame and floor glyph
pub const BORDER_GLYPH: char = '#';

/// Empty playfield cell glyph
pub const EMPTY_GLYPH: char = '.';


/// Integer position or offset; x grows rightward, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The seven standard shapes
///
/// Each shape renders with its own glyph:
/// - **I**: `=`, straight bar
/// - **O**: `@`, 2x2 square
/// - **T**: `+`, T-shaped
/// - **S**: `%`, S-shaped
/// - **Z**: `$`, Z-shaped (mirror of S)
/// - **J**: `&`, J-shaped
/// - **L**: `*`, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// Every shape, in generator index order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Shape at generator index `n`, if any
    pub fn from_index(n: usize) -> Option<Self> {
        Self::ALL.get(n).copied()
    }

    /// Character drawn for cells of this shape
    pub fn glyph(&self) -> char {
        match self {
            ShapeKind::I => '=',
            ShapeKind::O => '@',
            ShapeKind::T => '+',
            ShapeKind::S => '%',
            ShapeKind::Z => '$',
            ShapeKind::J => '&',
            ShapeKind::L => '*',
        }
    }

    /// Reverse of [`ShapeKind::glyph`]
    pub fn from_glyph(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.glyph() == ch)
    }
}

/// Orientation states of the four-state rotation system
///
/// - **North**: Spawn orientation
/// - **East**: Rotated 90° clockwise
/// - **South**: Rotated 180°
/// - **West**: Rotated 90° counter-clockwise
///
/// Rotating right cycles North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (-90° or 270°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Orientation index 0..4 (North = 0, clockwise)
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Orientation for any index, wrapped modulo 4
    pub fn from_index(n: usize) -> Self {
        match n % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// Player commands, decoded from single-character key codes
///
/// | Key | Command |
/// |-----|---------|
/// | `a` | [`Command::MoveLeft`] |
/// | `d` | [`Command::MoveRight`] |
/// | `s` | [`Command::SoftDrop`] |
/// | `o` | [`Command::RotateLeft`] |
/// | `p` | [`Command::RotateRight`] |
/// | `0` | [`Command::TogglePause`] |
/// | `c` | [`Command::Quit`] |
/// | `1` | [`Command::DebugRespawn`] |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Use the fast step budget for this tick
    SoftDrop,
    /// Rotate piece 90° counter-clockwise
    RotateLeft,
    /// Rotate piece 90° clockwise
    RotateRight,
    /// Flip between running and paused
    TogglePause,
    /// Stop the game
    Quit,
    /// Replace the active piece with the next one (debugging aid)
    DebugRespawn,
}

impl Command {
    /// Decode a key character; unrecognized characters map to `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_char('p'), Some(Command::RotateRight));
    /// assert_eq!(Command::from_char('0'), Some(Command::TogglePause));
    /// assert_eq!(Command::from_char('x'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'a' => Some(Command::MoveLeft),
            'd' => Some(Command::MoveRight),
            's' => Some(Command::SoftDrop),
            'o' => Some(Command::RotateLeft),
            'p' => Some(Command::RotateRight),
            '0' => Some(Command::TogglePause),
            'c' => Some(Command::Quit),
            '1' => Some(Command::DebugRespawn),
            _ => None,
        }
    }

    /// Key character bound to this command
    pub fn key(&self) -> char {
        match self {
            Command::MoveLeft => 'a',
            Command::MoveRight => 'd',
            Command::SoftDrop => 's',
            Command::RotateLeft => 'o',
            Command::RotateRight => 'p',
            Command::TogglePause => '0',
            Command::Quit => 'c',
            Command::DebugRespawn => '1',
        }
    }
}
