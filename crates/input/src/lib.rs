//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::Command`] and provides the non-blocking poll
//! the run loop uses, so the engine keeps ticking while no key is pressed.

pub mod map;
pub mod source;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{StartChoice, TerminalInput};
