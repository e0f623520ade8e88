//! Game state module - the engine that drives one game
//!
//! This module ties together the field, pieces, shape generator and scoring.
//! One call to [`GameState::tick`] is one iteration of the run loop:
//!
//! 1. run control (quit, pause toggle)
//! 2. command reaction with rollback on collision (skipped while paused)
//! 3. row clearing
//! 4. time-based fall step (skipped while paused)
//!
//! The caller supplies the current instant, so timing is fully driven from
//! outside and tests never sleep.

use std::time::{Duration, Instant};

use crate::field::Field;
use crate::piece::Piece;
use crate::rng::ShapeGenerator;
use crate::scoring::{standard_step_ms, Progress};
use crate::types::{Command, FAST_STEP_MS};

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
    /// Terminal: quit or game over
    Stopped,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    field: Field,
    current: Piece,
    next: Piece,
    generator: ShapeGenerator,
    progress: Progress,
    run_state: RunState,
    needs_redraw: bool,
    standard_step_ms: u32,
    current_step_ms: u32,
    /// Instant of the last fall step
    last_step: Instant,
}

impl GameState {
    /// Create a new running game; the fall clock starts at `now`
    pub fn new(seed: u32, now: Instant) -> Self {
        let mut generator = ShapeGenerator::new(seed);
        let current = Piece::spawned(generator.next_shape());
        let next = Piece::new(generator.next_shape());
        let standard = standard_step_ms(0);

        Self {
            field: Field::new(),
            current,
            next,
            generator,
            progress: Progress::new(),
            run_state: RunState::Running,
            needs_redraw: true,
            standard_step_ms: standard,
            current_step_ms: standard,
            last_step: now,
        }
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_paused(&self) -> bool {
        self.run_state == RunState::Paused
    }

    pub fn is_stopped(&self) -> bool {
        self.run_state == RunState::Stopped
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn score(&self) -> u64 {
        self.progress.score()
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn lines(&self) -> u32 {
        self.progress.total_lines()
    }

    pub fn standard_step_ms(&self) -> u32 {
        self.standard_step_ms
    }

    /// Step budget of the tick in progress (fast while soft dropping)
    pub fn current_step_ms(&self) -> u32 {
        self.current_step_ms
    }

    /// Whether the active piece overlaps a wall, the floor or a settled cell
    pub fn is_current_colliding(&self) -> bool {
        self.field.collides(&self.current)
    }

    /// A piece that cannot leave the spawn rows ends the game
    fn is_game_over(&self) -> bool {
        self.current.bottom() <= 0
    }

    fn stop(&mut self) {
        self.run_state = RunState::Stopped;
    }

    /// Returns true once per requested redraw. Always false while paused,
    /// the request is kept until the game resumes.
    pub fn take_redraw(&mut self) -> bool {
        if self.is_paused() {
            return false;
        }
        std::mem::take(&mut self.needs_redraw)
    }

    /// Run one loop iteration with the command polled for it, if any
    pub fn tick(&mut self, command: Option<Command>, now: Instant) {
        if self.is_stopped() {
            return;
        }

        // Soft drop only lasts for the tick its key arrived in.
        self.current_step_ms = self.standard_step_ms;

        match command {
            Some(Command::Quit) => {
                self.stop();
                return;
            }
            Some(Command::TogglePause) => {
                self.run_state = match self.run_state {
                    RunState::Paused => RunState::Running,
                    _ => RunState::Paused,
                };
            }
            _ => {}
        }

        let running = self.run_state == RunState::Running;
        if running {
            if let Some(command) = command {
                self.react(command);
            }
            if self.is_stopped() {
                return;
            }
        }

        self.remove_full_rows();

        if running && self.is_step_time_elapsed(now) {
            self.step_down();
            self.needs_redraw = true;
            self.last_step = now;
        }
    }

    /// Apply a command to the active piece, rolling back an illegal result
    fn react(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.current.move_left(),
            Command::MoveRight => self.current.move_right(),
            Command::SoftDrop => self.current_step_ms = FAST_STEP_MS,
            Command::RotateLeft => self.current.rotate_left(),
            Command::RotateRight => self.current.rotate_right(),
            Command::DebugRespawn => self.spawn_piece(),
            Command::TogglePause | Command::Quit => {}
        }

        if self.is_current_colliding() {
            self.current.restore_old_position();
            if self.is_game_over() {
                self.stop();
            }
        }

        self.needs_redraw = true;
    }

    fn is_step_time_elapsed(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_step);
        elapsed >= Duration::from_millis(u64::from(self.current_step_ms))
    }

    /// Move the active piece one row down, freezing it if it cannot go further
    fn step_down(&mut self) {
        self.current.move_down();
        if !self.is_current_colliding() {
            return;
        }

        self.current.restore_old_position();
        self.field.freeze(&self.current);
        // A landing that ends the game still spawns and clears rows.
        if self.is_game_over() {
            self.stop();
        }
        self.spawn_piece();
        self.remove_full_rows();
    }

    /// Promote the next piece to the spawn anchor and generate a new next piece
    pub fn spawn_piece(&mut self) {
        let fresh = Piece::new(self.generator.next_shape());
        let mut piece = std::mem::replace(&mut self.next, fresh);
        piece.to_field_start_pos();
        self.current = piece;
    }

    /// Clear full rows and account for them; returns the number removed
    pub fn remove_full_rows(&mut self) -> u32 {
        let removed = self.field.clear_full_rows();
        if self.progress.record_clear(removed) {
            self.standard_step_ms = standard_step_ms(self.progress.level());
            self.current_step_ms = self.standard_step_ms;
        }
        removed
    }
}
