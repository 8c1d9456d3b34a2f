//! Game state module - the single controller that owns a play session
//!
//! This module ties together the actor, the obstacle set, the gate spawner and
//! the scheduler. It handles the not-started → running → over lifecycle,
//! the per-frame tick, scoring, and the recurring activities that drive them.
//!
//! Nothing here reads a clock: the host calls [`GameState::advance`] with the
//! elapsed milliseconds and the scheduler decides which activities fire.

use crate::actor::Actor;
use crate::host::Host;
use crate::obstacles::ObstacleSet;
use crate::scheduler::{Scheduler, TaskHandle, TaskKind};
use crate::snapshot::{GameSnapshot, ObstacleSnapshot, Score};
use crate::spawner::GateSpawner;
use crate::types::*;

/// Handles of the recurring activities of the current game.
#[derive(Debug, Clone, Copy, Default)]
struct ActiveTasks {
    frame: Option<TaskHandle>,
    animate: Option<TaskHandle>,
    spawn: Option<TaskHandle>,
}

impl ActiveTasks {
    fn get(&self, kind: TaskKind) -> Option<TaskHandle> {
        match kind {
            TaskKind::Frame => self.frame,
            TaskKind::Animate => self.animate,
            TaskKind::Spawn => self.spawn,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    mode: Mode,
    actor: Actor,
    obstacles: ObstacleSet,
    spawner: GateSpawner,
    scheduler: Scheduler,
    tasks: ActiveTasks,
    frame_ms: u32,
    /// Score in half points (one per obstacle passed)
    half_points: u32,
    /// Flap input is only routed while this is set
    input_attached: bool,
    /// Incremented on every start/restart
    games_played: u32,
    /// Ticks simulated in the current game
    ticks: u64,
    /// Scratch snapshot reused for every draw
    scene: GameSnapshot,
}

impl GameState {
    /// Create a game on the start screen with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self {
            mode: Mode::NotStarted,
            actor: Actor::new(),
            obstacles: ObstacleSet::new(),
            spawner: GateSpawner::new(seed),
            scheduler: Scheduler::new(),
            tasks: ActiveTasks::default(),
            frame_ms: FRAME_MS,
            half_points: 0,
            input_attached: false,
            games_played: 0,
            ticks: 0,
            scene: GameSnapshot::default(),
        }
    }

    /// Override the frame tick period (milliseconds).
    pub fn with_frame_ms(mut self, frame_ms: u32) -> Self {
        self.frame_ms = frame_ms.max(1);
        self
    }

    pub fn state(&self) -> Mode {
        self.mode
    }

    pub fn score(&self) -> f64 {
        self.score_value().as_f64()
    }

    pub fn score_value(&self) -> Score {
        Score(self.half_points)
    }

    pub fn half_points(&self) -> u32 {
        self.half_points
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn input_attached(&self) -> bool {
        self.input_attached
    }

    pub fn seed(&self) -> u64 {
        self.spawner.seed()
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Handle of the current game's task of `kind`, if scheduled.
    pub fn task_handle(&self, kind: TaskKind) -> Option<TaskHandle> {
        self.tasks.get(kind)
    }

    /// Recurring activities currently scheduled.
    pub fn scheduled_task_count(&self) -> usize {
        self.scheduler.len()
    }

    pub fn scheduled_count(&self, kind: TaskKind) -> usize {
        self.scheduler.count(kind)
    }

    /// Milliseconds until the next scheduled activity, if any.
    pub fn until_next_task_ms(&self) -> Option<u64> {
        self.scheduler.until_next_due()
    }

    /// Start (or restart) a game.
    ///
    /// Cancels any activities left from a previous game before scheduling
    /// exactly one frame tick, one animation advance and one gate spawn.
    pub fn start(&mut self) {
        self.stop_tasks();

        self.actor.reset();
        self.obstacles.clear();
        self.half_points = 0;
        self.ticks = 0;
        self.mode = Mode::Running;
        self.input_attached = true;
        self.games_played = self.games_played.wrapping_add(1);

        self.tasks = ActiveTasks {
            frame: Some(self.scheduler.every(TaskKind::Frame, self.frame_ms)),
            animate: Some(
                self.scheduler
                    .every(TaskKind::Animate, ANIMATION_PERIOD_MS),
            ),
            spawn: Some(self.scheduler.every(TaskKind::Spawn, SPAWN_PERIOD_MS)),
        };

        log::info!(
            "game {} started (seed {}, frame {}ms)",
            self.games_played,
            self.seed(),
            self.frame_ms
        );
    }

    fn stop_tasks(&mut self) {
        let tasks = std::mem::take(&mut self.tasks);
        for handle in [tasks.frame, tasks.animate, tasks.spawn].into_iter().flatten() {
            self.scheduler.cancel(handle);
        }
    }

    /// Enter the over screen: stop activities, detach input, draw the final frame.
    fn end(&mut self, host: &mut impl Host) {
        self.mode = Mode::Over;
        self.stop_tasks();
        self.input_attached = false;
        host.cue(Cue::Terminal);

        log::info!(
            "game {} over after {} ticks, score {}",
            self.games_played,
            self.ticks,
            self.score_value()
        );

        self.render(host);
    }

    /// Flap input. Ignored unless a game is running.
    pub fn on_flap(&mut self, host: &mut impl Host) -> bool {
        if !self.input_attached || !self.mode.is_running() {
            return false;
        }
        self.actor.flap();
        host.cue(Cue::Flap);
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction, host: &mut impl Host) -> bool {
        match action {
            GameAction::Flap => self.on_flap(host),
            GameAction::Start => {
                self.start();
                true
            }
        }
    }

    /// Move the clock forward and run every activity that falls due.
    ///
    /// Returns the number of activities that fired.
    pub fn advance(&mut self, elapsed_ms: u32, host: &mut impl Host) -> usize {
        self.scheduler.advance(u64::from(elapsed_ms));

        let mut fired = 0;
        while let Some((_, kind)) = self.scheduler.pop_due() {
            fired += 1;
            match kind {
                TaskKind::Frame => {
                    self.tick(host);
                }
                TaskKind::Animate => {
                    self.animate();
                }
                TaskKind::Spawn => {
                    self.spawn_gate();
                }
            }
        }
        fired
    }

    /// One frame of play: gravity, obstacles, collisions, pruning, render.
    ///
    /// Returns false if no game is running.
    pub fn tick(&mut self, host: &mut impl Host) -> bool {
        if !self.mode.is_running() {
            return false;
        }
        self.ticks += 1;

        self.actor.integrate();
        if self.actor.is_below(BOARD_HEIGHT) {
            log::debug!("actor fell below the board at y={:.2}", self.actor.y);
            self.end(host);
            return true;
        }

        let outcome = self.obstacles.step(SCROLL_SPEED, &self.actor.rect());
        if outcome.passed > 0 {
            self.half_points += outcome.passed;
            log::debug!("score {}", self.score_value());
        }
        if outcome.collided {
            host.cue(Cue::Collision);
            self.end(host);
            return true;
        }

        let pruned = self.obstacles.prune();
        if pruned > 0 {
            log::debug!("pruned {} gate(s), {} active", pruned, self.obstacles.gate_count());
        }

        self.render(host);
        true
    }

    /// Append a new gate at the right edge. Ignored unless running.
    pub fn spawn_gate(&mut self) -> bool {
        if !self.mode.is_running() {
            return false;
        }
        let gate = self.spawner.next_gate();
        log::debug!(
            "spawned gate #{} with opening at y={:.1}",
            self.spawner.spawned(),
            gate.upper.bottom()
        );
        self.obstacles.push(gate);
        true
    }

    /// Advance the actor's animation frame. Ignored unless running.
    pub fn animate(&mut self) -> bool {
        if !self.mode.is_running() {
            return false;
        }
        self.actor.next_frame();
        true
    }

    /// Draw the current scene, whatever the mode.
    pub fn render(&mut self, host: &mut impl Host) {
        let mut scene = std::mem::take(&mut self.scene);
        self.snapshot_into(&mut scene);
        host.draw(&scene);
        self.scene = scene;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.mode = self.mode;
        out.actor = self.actor.rect();
        out.actor_frame = self.actor.frame;
        out.obstacles.clear();
        for gate in self.obstacles.gates() {
            out.obstacles.push(ObstacleSnapshot {
                rect: gate.upper.rect(),
                upper: true,
                passed: gate.upper.passed,
            });
            out.obstacles.push(ObstacleSnapshot {
                rect: gate.lower.rect(),
                upper: false,
                passed: gate.lower.passed,
            });
        }
        out.score = self.score_value();
        out.seed = self.seed();
        out.games_played = self.games_played;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
