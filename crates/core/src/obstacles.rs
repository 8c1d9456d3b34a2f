//! Obstacle module - gates, their members, and the ordered active set
//!
//! Obstacles are always created in pairs sharing one column: the upper
//! obstacle hangs from above the board and the lower one starts
//! `OPENING_SPACE` below it. The pair is stored as a [`Gate`] so both members
//! move and leave the board together; each member still carries its own
//! `passed` flag worth half a point.
//!
//! The set is ordered by insertion. Since every gate spawns at the same column
//! and moves at the same speed, the front gate is always the leftmost one and
//! pruning only ever needs to look at the front.

use std::collections::VecDeque;

use crate::geometry::Rect;
use crate::types::{
    OBSTACLE_BASE_Y, OBSTACLE_HEIGHT, OBSTACLE_SPAWN_X, OBSTACLE_WIDTH, OPENING_SPACE,
};

/// One obstacle rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Set once the actor's left edge is past this obstacle's right edge
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            width: OBSTACLE_WIDTH,
            height: OBSTACLE_HEIGHT,
            passed: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Flag the obstacle as passed if the actor is beyond it.
    ///
    /// Returns true only on the tick the flag flips.
    pub fn mark_passed(&mut self, actor_x: f64) -> bool {
        if !self.passed && actor_x > self.right() {
            self.passed = true;
            return true;
        }
        false
    }
}

/// An upper/lower obstacle pair with the opening between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gate {
    pub upper: Obstacle,
    pub lower: Obstacle,
}

impl Gate {
    /// Build a gate at the spawn column with the given upper obstacle row.
    pub fn with_upper_y(upper_y: f64) -> Self {
        Self {
            upper: Obstacle::new(OBSTACLE_SPAWN_X, upper_y),
            lower: Obstacle::new(OBSTACLE_SPAWN_X, upper_y + OBSTACLE_HEIGHT + OPENING_SPACE),
        }
    }

    /// Build a gate from a random offset `r` in `[0, 1)`.
    ///
    /// `r = 0` puts the upper obstacle's bottom at three quarters of its
    /// height below the base row; `r -> 1` raises it by another half height.
    pub fn from_offset(r: f64) -> Self {
        Self::with_upper_y(upper_y_for_offset(r))
    }

    /// Column shared by both members
    pub fn x(&self) -> f64 {
        self.upper.x
    }

    pub fn right(&self) -> f64 {
        self.upper.right()
    }

    /// Opening height between the members.
    pub fn opening(&self) -> f64 {
        self.lower.y - self.upper.bottom()
    }

    /// Move both members left by `dx`.
    pub fn advance(&mut self, dx: f64) {
        self.upper.x -= dx;
        self.lower.x -= dx;
    }

    /// True once the trailing edge has left the board on the left.
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }

    pub fn members(&self) -> [&Obstacle; 2] {
        [&self.upper, &self.lower]
    }

    pub fn members_mut(&mut self) -> [&mut Obstacle; 2] {
        [&mut self.upper, &mut self.lower]
    }
}

/// Upper obstacle row for a random offset `r` in `[0, 1)`.
pub fn upper_y_for_offset(r: f64) -> f64 {
    OBSTACLE_BASE_Y - OBSTACLE_HEIGHT / 4.0 - r * (OBSTACLE_HEIGHT / 2.0)
}

/// Result of moving the set by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Obstacles whose `passed` flag flipped this tick (half points)
    pub passed: u32,
    /// The actor overlapped an obstacle; the step stopped there
    pub collided: bool,
}

/// Ordered collection of active gates.
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    gates: VecDeque<Gate>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self {
            gates: VecDeque::new(),
        }
    }

    pub fn clear(&mut self) {
        self.gates.clear();
    }

    /// Append a gate at the tail (upper member first).
    pub fn push(&mut self, gate: Gate) {
        self.gates.push_back(gate);
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Number of gates.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Number of obstacles (two per gate).
    pub fn len(&self) -> usize {
        self.gates.len() * 2
    }

    pub fn gates(&self) -> impl Iterator<Item = &Gate> + '_ {
        self.gates.iter()
    }

    /// Obstacles in insertion order: upper, lower, upper, lower, ...
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> + '_ {
        self.gates.iter().flat_map(|g| g.members())
    }

    pub fn front(&self) -> Option<&Gate> {
        self.gates.front()
    }

    /// Advance every gate by `dx`, scoring and checking collisions in order.
    ///
    /// Stops at the first obstacle overlapping `actor`; gates after it are not
    /// moved this tick.
    pub fn step(&mut self, dx: f64, actor: &Rect) -> StepOutcome {
        let mut outcome = StepOutcome::default();

        for gate in self.gates.iter_mut() {
            gate.advance(dx);
            for obstacle in gate.members_mut() {
                if obstacle.mark_passed(actor.x) {
                    outcome.passed += 1;
                }
                if actor.overlaps(&obstacle.rect()) {
                    outcome.collided = true;
                    return outcome;
                }
            }
        }

        outcome
    }

    /// Drop gates from the front while they are fully off the left edge.
    ///
    /// Returns the number of gates removed.
    pub fn prune(&mut self) -> usize {
        let mut removed = 0;
        while self.gates.front().is_some_and(Gate::is_offscreen) {
            self.gates.pop_front();
            removed += 1;
        }
        removed
    }
}
