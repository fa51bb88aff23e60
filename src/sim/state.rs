//! Session state: entities, lives, event queue, restart logic

use glam::DVec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::objective::{Objective, ObjectiveKind};
use super::paddle::Paddle;
use crate::config::GameConfig;

/// Current state of the session's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Board is set up, waiting for the start click
    New,
    /// Ball in play
    Active,
    /// Grid cleared
    Won,
    /// Lives exhausted
    Lost,
}

/// Side effects reported by the simulation for the presentation layer.
///
/// Fire-and-forget: the core pushes these during a tick and never waits on
/// them. Drain with [`Session::drain_events`] once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a wall, the paddle, or a target edge
    Bounce,
    /// A critter was collected
    Teleport(ObjectiveKind),
    /// Grid cleared
    Win,
    /// Last life lost
    Lose,
}

/// One game session: the ball, the paddle, the live target set, and the
/// lives counter, plus the session RNG and the pending event queue.
///
/// The session exclusively owns every entity; all of them are replaced, not
/// mutated in place, on [`restart`](Self::restart).
pub struct Session {
    pub config: GameConfig,
    /// Seed the session RNG started from, for board reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub state: GameState,
    pub lives: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live targets in grid scan order (row-major); removal preserves order
    pub targets: Vec<Objective>,
    /// Prompt shown between games ("You won!" / "Game Over" / start hint)
    pub prompt: String,
    pub(crate) events: Vec<GameEvent>,
}

impl Session {
    /// Create a fresh session with a seeded board.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let ball = Ball::new(&config);
        let paddle = Paddle::new(&config);
        let lives = config.max_lives;
        let mut session = Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            state: GameState::New,
            lives,
            ball,
            paddle,
            targets: Vec::new(),
            prompt: String::new(),
            events: Vec::new(),
        };
        session.reset_board(GameState::New);
        session
    }

    /// Tear down and re-seed the board after a finished (or fresh) game.
    ///
    /// Replaces the ball, paddle, and target grid, resets lives, and arms
    /// the start prompt with a message matching the previous outcome. The
    /// session RNG carries over so successive boards differ.
    pub fn restart(&mut self, outcome: GameState) {
        log::info!(
            "restarting after {:?}, {} targets left on board",
            outcome,
            self.targets.len()
        );
        self.reset_board(outcome);
    }

    fn reset_board(&mut self, outcome: GameState) {
        self.ball = Ball::new(&self.config);
        self.paddle = Paddle::new(&self.config);
        self.targets.clear();
        self.spawn_grid();
        self.lives = self.config.max_lives;
        self.state = GameState::New;

        let result = match outcome {
            GameState::Won => "You won!\n",
            GameState::Lost => "Game Over\n",
            _ => "",
        };
        self.prompt = format!("{result}Click mouse to start");
    }

    /// Populate the target grid in row-major order with an independent
    /// uniform kind draw per cell (repeats allowed).
    fn spawn_grid(&mut self) {
        let col_step = self.config.grid_col_step();
        for row in 0..self.config.grid_rows {
            let y = row as f64 * self.config.grid_row_step + self.config.grid_margin;
            for col in 0..self.config.grid_cols {
                let x = col as f64 * col_step + self.config.grid_margin;
                let kind = ObjectiveKind::ALL[self.rng.random_range(0..ObjectiveKind::ALL.len())];
                self.targets
                    .push(Objective::new(kind, DVec2::new(x, y), &self.config));
            }
        }
        log::debug!("spawned {} targets", self.targets.len());
    }

    /// Start-click gate: New -> Active. No-op in any other state.
    pub fn begin(&mut self) {
        if self.state == GameState::New {
            self.state = GameState::Active;
            self.prompt.clear();
            log::info!("session started (seed {})", self.seed);
        }
    }

    /// Take all events reported since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
