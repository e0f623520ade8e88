//! Frame composition: maps a `GameState` into a character grid.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (screen coordinates, see the constants in `blockfall_types`):
//!
//! ```text
//!   .......      <- spawn zone (rows above the field)
//!   #..........#   #########
//!   #..........#   #       #
//!   #..........#   #  next #
//!   ...            #########
//!   #..........#
//!   ############   Score: 0
//!                  Lines: 0
//!                  Level: 0
//! ```
//!
//! The playfield has side borders and a floor but no top border.

use crate::core::{GameState, Progress};
use crate::types::{
    Point, RenderBuffer, BORDER_GLYPH, EMPTY_GLYPH, FIELD_START_X, FIELD_START_Y,
    FIELD_WHOLE_HEIGHT, FIELD_WHOLE_WIDTH, NEXT_BOX_HEIGHT, NEXT_BOX_START_X, NEXT_BOX_START_Y,
    NEXT_BOX_WIDTH, SCREEN_HEIGHT, START_KEY, STAT_START_X, STAT_START_Y,
};

/// Buffer position of field cell (0, 0), just right of the left border
pub const FIELD_ORIGIN: Point = Point::new(FIELD_START_X + 1, FIELD_START_Y);

/// Buffer position the next piece's anchor is drawn at
pub const NEXT_ORIGIN: Point = Point::new(NEXT_BOX_START_X + 2, NEXT_BOX_START_Y + 2);

/// Compose a complete frame for the current game state.
pub fn compose_frame(state: &GameState) -> RenderBuffer {
    let mut buffer = RenderBuffer::new();
    compose_into(state, &mut buffer);
    buffer
}

/// Compose into an existing buffer, overwriting all of it.
pub fn compose_into(state: &GameState, buffer: &mut RenderBuffer) {
    buffer.clear();

    draw_stats(buffer, state.progress());
    draw_next_box(buffer);
    state.next_piece().fill_field_buffer(NEXT_ORIGIN, buffer);

    draw_playfield(buffer);
    state.current().fill_field_buffer(FIELD_ORIGIN, buffer);
    for cell in state.field().cells() {
        cell.fill_field_buffer(FIELD_ORIGIN, buffer);
    }
}

/// The three statistics lines, in display order.
pub fn stat_lines(progress: &Progress) -> [String; 3] {
    [
        format!("Score: {}", progress.score()),
        format!("Lines: {}", progress.total_lines()),
        format!("Level: {}", progress.level()),
    ]
}

fn draw_stats(buffer: &mut RenderBuffer, progress: &Progress) {
    for (dy, line) in (0i16..).zip(stat_lines(progress)) {
        buffer.put_str(Point::new(STAT_START_X, STAT_START_Y + dy), &line);
    }
}

fn draw_next_box(buffer: &mut RenderBuffer) {
    let right = NEXT_BOX_START_X + NEXT_BOX_WIDTH - 1;
    let bottom = NEXT_BOX_START_Y + NEXT_BOX_HEIGHT - 1;
    for y in NEXT_BOX_START_Y..=bottom {
        for x in NEXT_BOX_START_X..=right {
            if x == NEXT_BOX_START_X || x == right || y == NEXT_BOX_START_Y || y == bottom {
                buffer.put_char(Point::new(x, y), BORDER_GLYPH);
            }
        }
    }
}

fn draw_playfield(buffer: &mut RenderBuffer) {
    let right = FIELD_START_X + FIELD_WHOLE_WIDTH - 1;
    let floor = FIELD_START_Y + FIELD_WHOLE_HEIGHT - 1;

    for y in FIELD_START_Y..=floor {
        for x in FIELD_START_X..=right {
            let ch = if y == floor || x == FIELD_START_X || x == right {
                BORDER_GLYPH
            } else {
                EMPTY_GLYPH
            };
            buffer.put_char(Point::new(x, y), ch);
        }
    }
}

/// Frame shown while waiting for the start key.
pub fn start_prompt_frame() -> RenderBuffer {
    let mut buffer = RenderBuffer::new();
    let y = (SCREEN_HEIGHT / 2) as i16;
    buffer.put_str(
        Point::new(FIELD_START_X, y),
        &format!("Press '{}' to start", START_KEY),
    );
    buffer
}
