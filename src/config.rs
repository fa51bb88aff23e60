//! Board layout and tuning parameters
//!
//! Every component takes its dimensions from this struct at construction
//! instead of reading shared globals, so tests can run on odd-sized boards.

use serde::{Deserialize, Serialize};

/// Immutable configuration for one game session.
///
/// Velocities are in pixels per nanosecond, matching the nanosecond elapsed
/// times fed to [`crate::sim::tick`]. That keeps magnitudes tiny (~1e-7) but
/// avoids any unit conversion in the hot path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in pixels
    pub board_width: f64,
    /// Board height in pixels
    pub board_height: f64,
    /// Ball radius in pixels
    pub ball_radius: f64,
    /// Initial ball velocity, pixels per nanosecond (points down-right)
    pub initial_vx: f64,
    pub initial_vy: f64,
    /// Paddle width in pixels
    pub paddle_width: f64,
    /// Combined height of the paddle's two collision strips
    pub paddle_height: f64,
    /// Paddle center height at session start, as a fraction of board height
    pub paddle_initial_y_frac: f64,
    /// Lowest reachable paddle center, as a fraction of board height
    pub paddle_min_y_frac: f64,
    /// Highest reachable paddle center, as a fraction of board height
    pub paddle_max_y_frac: f64,
    /// Target visual size in pixels
    pub objective_width: f64,
    pub objective_height: f64,
    /// Target grid shape
    pub grid_rows: u32,
    pub grid_cols: u32,
    /// Vertical pitch between grid rows in pixels (columns split the board
    /// width evenly)
    pub grid_row_step: f64,
    /// Offset of the first row/column from the board's top-left corner
    pub grid_margin: f64,
    /// Permitted bottom-wall misses before the session is lost
    pub max_lives: u32,
    /// Per-axis velocity multiplier applied on every collected target
    pub speed_multiplier: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 400.0,
            board_height: 600.0,
            ball_radius: 8.0,
            initial_vx: 1e-7,
            initial_vy: 1e-7,
            paddle_width: 100.0,
            paddle_height: 5.0,
            paddle_initial_y_frac: 0.8,
            paddle_min_y_frac: 0.7,
            paddle_max_y_frac: 0.9,
            objective_width: 60.0,
            objective_height: 40.0,
            grid_rows: 4,
            grid_cols: 4,
            grid_row_step: 60.0,
            grid_margin: 30.0,
            max_lives: 5,
            speed_multiplier: 1.1,
        }
    }
}

impl GameConfig {
    /// Horizontal pitch between grid columns.
    pub fn grid_col_step(&self) -> f64 {
        self.board_width / self.grid_cols as f64
    }
}
