//! Snapshot module - a render-ready copy of one frame
//!
//! [`GameSnapshot`] is what the core hands to [`Host::draw`](crate::host::Host::draw):
//! the mode, the actor box and animation frame, every obstacle in insertion
//! order, and the score. It owns no references into the game, so a host may
//! keep it across frames; [`GameState::snapshot_into`](crate::GameState::snapshot_into)
//! refills an existing one without reallocating the obstacle list.

use std::fmt;

use crate::geometry::Rect;
use crate::types::Mode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSnapshot {
    pub rect: Rect,
    /// Upper member of its gate (hangs from the top)
    pub upper: bool,
    pub passed: bool,
}

/// Score held as a count of half points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(pub u32);

impl Score {
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 2;
        if self.0 % 2 == 0 {
            write!(f, "{}", whole)
        } else {
            write!(f, "{}.5", whole)
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub mode: Mode,
    pub actor: Rect,
    pub actor_frame: u8,
    /// Obstacles in insertion order (upper, lower, upper, lower, ...)
    pub obstacles: Vec<ObstacleSnapshot>,
    pub score: Score,
    pub seed: u64,
    pub games_played: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            mode: Mode::NotStarted,
            actor: Rect::default(),
            actor_frame: 0,
            obstacles: Vec::new(),
            score: Score::default(),
            seed: 0,
            games_played: 0,
        }
    }
}
