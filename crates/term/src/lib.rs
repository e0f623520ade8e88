//! Terminal renderer module.
//!
//! Frames are composed into a fixed-size character buffer by [`game_view`]
//! (pure, no I/O) and flushed to the terminal by [`renderer`], which only
//! rewrites the cells that changed since the previous frame.

pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use game_view::{
    compose_frame, compose_into, start_prompt_frame, stat_lines, FIELD_ORIGIN, NEXT_ORIGIN,
};
pub use renderer::{glyph_color, TerminalRenderer};
