//! Terminal flappy game (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benches share a single import path. The
//! implementation lives in dedicated crates under `crates/`.

pub mod clock;
pub mod config;

pub use tui_flappy_core as core;
pub use tui_flappy_input as input;
pub use tui_flappy_term as term;
pub use tui_flappy_types as types;

pub use config::Config;
