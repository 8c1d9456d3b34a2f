//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed and same input timeline produce identical games
//! - **Testable**: Time only moves when the caller says so
//! - **Portable**: Any [`Host`] can draw it (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`actor`]: The falling body, gravity and flap
//! - [`geometry`]: Axis-aligned rectangles and strict overlap
//! - [`obstacles`]: Gates (upper/lower pairs) and the ordered active set
//! - [`spawner`]: Seeded random gate generation
//! - [`scheduler`]: Recurring tasks on a host-driven millisecond clock
//! - [`game_state`]: The controller: lifecycle, tick, scoring
//! - [`snapshot`]: Render-ready view of one frame
//! - [`host`]: The draw/cue boundary
//!
//! # Game Rules
//!
//! - **Gravity**: `+0.15` per tick, top of the board clamps, the bottom does not
//! - **Flap**: Sets vertical velocity to `-5`
//! - **Gates**: Spawned every 1500ms at the right edge, scrolling 2 units per tick
//! - **Scoring**: Half a point per obstacle passed, so one point per gate
//! - **Game over**: Falling below the board or touching any obstacle
//!
//! # Example
//!
//! ```
//! use tui_flappy_core::{GameState, RecordingHost};
//! use tui_flappy_types::{Cue, Mode};
//!
//! let mut game = GameState::new(12345);
//! let mut host = RecordingHost::new();
//! game.start();
//!
//! game.on_flap(&mut host);
//! game.advance(16, &mut host);
//!
//! assert_eq!(game.state(), Mode::Running);
//! assert_eq!(host.cues, vec![Cue::Flap]);
//! assert_eq!(host.draws, 1);
//! ```
//!
//! # Timing
//!
//! - **Frame**: 16ms (approximately 60 FPS)
//! - **Animation**: 100ms per actor frame
//! - **Spawn**: 1500ms per gate
//!
//! Call [`GameState::advance`](game_state::GameState::advance) with elapsed time.

pub mod actor;
pub mod game_state;
pub mod geometry;
pub mod host;
pub mod obstacles;
pub mod scheduler;
pub mod snapshot;
pub mod spawner;

pub use tui_flappy_types as types;

// Re-export commonly used types for convenience
pub use actor::Actor;
pub use game_state::GameState;
pub use geometry::Rect;
pub use host::{Host, NullHost, RecordingHost};
pub use obstacles::{Gate, Obstacle, ObstacleSet, StepOutcome};
pub use scheduler::{Scheduler, TaskHandle, TaskKind};
pub use snapshot::{GameSnapshot, ObstacleSnapshot, Score};
pub use spawner::GateSpawner;
