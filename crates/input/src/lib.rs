//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The game
//! itself never sees key codes, so any other front end only needs its own
//! mapping onto the same two actions.

pub mod map;

pub use tui_flappy_types as types;

pub use map::{handle_key_event, is_press, should_quit};
