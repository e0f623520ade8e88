//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminal, rendering back-ends or I/O, making it:
//!
//! - **Deterministic**: a seed and a sequence of instants reproduce a game exactly
//! - **Testable**: timing is injected, tests never sleep
//! - **Portable**: can run anywhere a caller can supply `Instant`s and commands
//!
//! # Module Structure
//!
//! - [`shapes`]: subcell offset tables for every shape and orientation
//! - [`piece`]: the active piece with snapshot/rollback moves and edge queries
//! - [`settled`]: cells left behind by landed pieces
//! - [`field`]: collision detection and row clearing over the settled cells
//! - [`scoring`]: line-clear points, levels and step times
//! - [`rng`]: seeded uniform shape generation
//! - [`game_state`]: the per-tick engine
//!
//! # Game Rules
//!
//! - **Rollback**: illegal moves and rotations are silently undone, there are no wall kicks
//! - **Gravity**: one row per step; the step time is `1000 - 100 * level + 100` ms
//! - **Soft drop**: a 50ms step budget for the tick the key arrives in
//! - **Row clearing**: topmost full row first, rescanning after every removal
//! - **Scoring**: `40 * (level + 1) * 2^lines` per clear, level first
//! - **Game over**: a piece that cannot get below row 0
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use blockfall_core::GameState;
//! use blockfall_types::{Command, SPAWN_ANCHOR};
//!
//! let start = Instant::now();
//! let mut game = GameState::new(12345, start);
//!
//! game.tick(Some(Command::MoveRight), start);
//! assert_eq!(game.current().anchor().x, SPAWN_ANCHOR.x + 1);
//!
//! // One step time later the piece has fallen one row.
//! game.tick(None, start + Duration::from_millis(1100));
//! assert_eq!(game.current().anchor().y, SPAWN_ANCHOR.y + 1);
//! assert_eq!(game.score(), 0);
//! ```

pub mod field;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod settled;
pub mod shapes;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use field::Field;
pub use game_state::{GameState, RunState};
pub use piece::Piece;
pub use rng::{ShapeGenerator, SimpleRng};
pub use scoring::{line_clear_score, standard_step_ms, Progress};
pub use settled::SettledCell;
pub use shapes::{offsets, ShapeOffsets};
