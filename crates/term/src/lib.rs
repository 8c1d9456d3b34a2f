//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the game snapshot is projected
//! into a framebuffer of styled cells, which is then diffed and flushed to
//! the terminal. No widget toolkit is involved.
//!
//! - [`game_view`]: pure projection of a snapshot onto cells
//! - [`renderer`]: framebuffer diffing and crossterm output
//! - [`host`]: the [`core::Host`] implementation used by the binary

pub mod fb;
pub mod game_view;
pub mod host;
pub mod renderer;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use host::TerminalHost;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
