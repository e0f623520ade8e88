//! Terminal runner (default binary).
//!
//! Waits for the start key, then drives the engine with one non-blocking
//! input poll per tick and redraws only when the engine asks for it.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use blockfall::core::GameState;
use blockfall::input::{StartChoice, TerminalInput};
use blockfall::term::{compose_frame, stat_lines, start_prompt_frame, TerminalRenderer};
use blockfall::types::START_KEY;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(game) = result? {
        for line in stat_lines(game.progress()) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Returns the finished game, or `None` if the player aborted at the prompt.
fn run(term: &mut TerminalRenderer) -> Result<Option<GameState>> {
    let mut input = TerminalInput::new();

    term.draw(start_prompt_frame())?;
    if input.wait_for_start(START_KEY)? == StartChoice::Abort {
        return Ok(None);
    }
    term.clear_screen()?;

    let mut game = GameState::new(clock_seed(), Instant::now());

    while !game.is_stopped() {
        let command = input.poll_command()?;
        game.tick(command, Instant::now());

        if game.take_redraw() {
            term.draw(compose_frame(&game))?;
        }
    }

    Ok(Some(game))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
