//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed logical surface, independent of the terminal size:
//!
//! - **Width**: 360 units
//! - **Height**: 640 units
//! - **Origin**: top-left, `y` grows downwards
//!
//! # Tuning Constants
//!
//! These values form the contract external tuning may rely on:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ACTOR_WIDTH` x `ACTOR_HEIGHT` | 34 x 24 | Actor bounding box |
//! | `OBSTACLE_WIDTH` x `OBSTACLE_HEIGHT` | 64 x 512 | Obstacle bounding box |
//! | `SCROLL_SPEED` | 2 | Obstacle movement per tick (leftwards) |
//! | `GRAVITY` | 0.15 | Velocity gained per tick |
//! | `FLAP_IMPULSE` | -5 | Velocity set by a flap |
//! | `OPENING_SPACE` | 160 | Vertical gap inside a gate (`BOARD_HEIGHT / 4`) |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Physics tick interval (~60 FPS) |
//! | `ANIMATION_PERIOD_MS` | 100 | Actor animation frame advance |
//! | `SPAWN_PERIOD_MS` | 1500 | Gate spawn interval |
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{Mode, BOARD_HEIGHT, OPENING_SPACE};
//!
//! assert_eq!(OPENING_SPACE, BOARD_HEIGHT / 4.0);
//! assert!(Mode::Running.is_running());
//! assert!(!Mode::default().is_running());
//! ```

/// Board width in logical units
pub const BOARD_WIDTH: f64 = 360.0;

/// Board height in logical units
pub const BOARD_HEIGHT: f64 = 640.0;

/// Actor width (width/height ratio 17/12)
pub const ACTOR_WIDTH: f64 = 34.0;

/// Actor height
pub const ACTOR_HEIGHT: f64 = 24.0;

/// Actor start column (one eighth of the board)
pub const ACTOR_START_X: f64 = BOARD_WIDTH / 8.0;

/// Actor start row (vertical middle of the board)
pub const ACTOR_START_Y: f64 = BOARD_HEIGHT / 2.0;

/// Number of cosmetic actor animation frames
pub const ACTOR_FRAMES: u8 = 4;

/// Obstacle width (width/height ratio 1/8)
pub const OBSTACLE_WIDTH: f64 = 64.0;

/// Obstacle height
pub const OBSTACLE_HEIGHT: f64 = 512.0;

/// Column at which new obstacles appear (right board edge)
pub const OBSTACLE_SPAWN_X: f64 = BOARD_WIDTH;

/// Reference row the randomized gate offset is measured from
pub const OBSTACLE_BASE_Y: f64 = 0.0;

/// Vertical opening between the upper and lower obstacle of a gate
pub const OPENING_SPACE: f64 = BOARD_HEIGHT / 4.0;

/// Leftward obstacle movement per tick
pub const SCROLL_SPEED: f64 = 2.0;

/// Downward acceleration per tick
pub const GRAVITY: f64 = 0.15;

/// Vertical velocity set by a flap (negative is up)
pub const FLAP_IMPULSE: f64 = -5.0;

/// Physics tick interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Actor animation frame period (0.1 seconds)
pub const ANIMATION_PERIOD_MS: u32 = 100;

/// Gate spawn period (1.5 seconds)
pub const SPAWN_PERIOD_MS: u32 = 1500;


/// Screen mode of the game state machine
///
/// - **NotStarted**: title screen, nothing moves
/// - **Running**: active play, timers scheduled, input attached
/// - **Over**: final frame frozen with the score summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    NotStarted,
    Running,
    Over,
}

impl Mode {
    pub fn is_running(&self) -> bool {
        matches!(self, Mode::Running)
    }
}

/// Game actions delivered by the input layer
///
/// Keyboard mapping happens upstream; the core only sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Upward impulse for the actor (only honoured while running)
    Flap,
    /// Start a new game (initial play or restart)
    Start,
}

/// Discrete audio events signalled by the core
///
/// Playback, looping and volume belong to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A flap was applied
    Flap,
    /// The actor hit an obstacle
    Collision,
    /// The game entered the over screen
    Terminal,
}

impl Cue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Flap => "flap",
            Cue::Collision => "collision",
            Cue::Terminal => "terminal",
        }
    }
}
