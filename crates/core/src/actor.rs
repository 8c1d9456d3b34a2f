//! Actor module - the falling body controlled by the player
//!
//! The actor only moves vertically. Gravity is integrated once per tick and
//! the result is clamped to the top of the board; nothing clamps the bottom,
//! falling past it ends the game.

use crate::geometry::Rect;
use crate::types::{
    ACTOR_FRAMES, ACTOR_HEIGHT, ACTOR_START_X, ACTOR_START_Y, ACTOR_WIDTH, FLAP_IMPULSE, GRAVITY,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub velocity_y: f64,
    /// Cosmetic animation frame in `0..ACTOR_FRAMES`
    pub frame: u8,
}

impl Actor {
    pub fn new() -> Self {
        Self {
            x: ACTOR_START_X,
            y: ACTOR_START_Y,
            width: ACTOR_WIDTH,
            height: ACTOR_HEIGHT,
            velocity_y: 0.0,
            frame: 0,
        }
    }

    /// Put the actor back at its start point with zero velocity.
    ///
    /// The animation frame keeps cycling across games.
    pub fn reset(&mut self) {
        self.x = ACTOR_START_X;
        self.y = ACTOR_START_Y;
        self.velocity_y = 0.0;
    }

    /// Apply one tick of gravity, clamping `y` to the top boundary.
    pub fn integrate(&mut self) {
        self.velocity_y += GRAVITY;
        self.y = (self.y + self.velocity_y).max(0.0);
    }

    /// Replace (not add to) the vertical velocity with the flap impulse.
    pub fn flap(&mut self) {
        self.velocity_y = FLAP_IMPULSE;
    }

    pub fn next_frame(&mut self) {
        self.frame = (self.frame + 1) % ACTOR_FRAMES;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// True once the actor has dropped below the board.
    pub fn is_below(&self, board_height: f64) -> bool {
        self.y > board_height
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}
