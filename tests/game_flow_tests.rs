//! Engine tests driven only through commands and injected time

use std::time::{Duration, Instant};

use blockfall::core::{GameState, RunState};
use blockfall::types::{Command, SPAWN_ANCHOR};

const SEED: u32 = 12345;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_soft_dropping_in_place_ends_the_game() {
    let start = Instant::now();
    let mut game = GameState::new(SEED, start);
    let mut now = start;

    // Pieces all land in the middle columns, so no row ever fills up.
    for _ in 0..20_000 {
        if game.is_stopped() {
            break;
        }
        now += ms(50);
        game.tick(Some(Command::SoftDrop), now);
    }

    assert!(game.is_stopped());
    assert_eq!(game.score(), 0);
    assert_eq!(game.lines(), 0);
    assert!(!game.field().is_empty());
}

#[test]
fn test_stopped_game_ignores_everything() {
    let start = Instant::now();
    let mut game = GameState::new(SEED, start);
    game.tick(Some(Command::Quit), start);
    assert_eq!(game.run_state(), RunState::Stopped);

    let before = *game.current();
    game.tick(Some(Command::MoveLeft), start + ms(5_000));
    game.tick(Some(Command::TogglePause), start + ms(10_000));

    assert_eq!(*game.current(), before);
    assert_eq!(game.run_state(), RunState::Stopped);
}

#[test]
fn test_pause_freezes_piece_and_redraw() {
    let start = Instant::now();
    let mut game = GameState::new(SEED, start);
    assert!(game.take_redraw());

    game.tick(Some(Command::TogglePause), start);
    assert!(game.is_paused());

    game.tick(Some(Command::MoveRight), start + ms(5_000));
    assert_eq!(game.current().anchor(), SPAWN_ANCHOR);
    assert!(!game.take_redraw());

    game.tick(Some(Command::TogglePause), start + ms(5_000));
    assert_eq!(game.run_state(), RunState::Running);
}

#[test]
fn test_fall_follows_step_time() {
    let start = Instant::now();
    let mut game = GameState::new(SEED, start);
    assert_eq!(game.standard_step_ms(), 1100);

    game.tick(None, start + ms(1_099));
    assert_eq!(game.current().anchor(), SPAWN_ANCHOR);

    game.tick(None, start + ms(1_100));
    assert_eq!(game.current().anchor().y, SPAWN_ANCHOR.y + 1);
}

#[test]
fn test_soft_drop_lasts_one_tick() {
    let start = Instant::now();
    let mut game = GameState::new(SEED, start);

    game.tick(Some(Command::SoftDrop), start + ms(49));
    assert_eq!(game.current_step_ms(), 50);
    assert_eq!(game.current().anchor(), SPAWN_ANCHOR);

    game.tick(None, start + ms(60));
    assert_eq!(game.current_step_ms(), game.standard_step_ms());
    assert_eq!(game.current().anchor(), SPAWN_ANCHOR);
}

#[test]
fn test_same_seed_same_game() {
    let start = Instant::now();
    let mut a = GameState::new(7, start);
    let mut b = GameState::new(7, start);

    let script = [
        Some(Command::MoveLeft),
        Some(Command::RotateRight),
        None,
        Some(Command::SoftDrop),
        Some(Command::MoveRight),
        Some(Command::RotateLeft),
    ];
    let mut now = start;
    for command in script.iter().cycle().take(600) {
        now += ms(50);
        a.tick(*command, now);
        b.tick(*command, now);
    }

    assert_eq!(a.current(), b.current());
    assert_eq!(a.next_piece(), b.next_piece());
    assert_eq!(a.field(), b.field());
    assert_eq!(a.score(), b.score());
}
