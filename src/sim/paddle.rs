//! The player's paddle: clamped center, two stacked collision strips

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use crate::config::GameConfig;

/// The pointer-driven paddle.
///
/// The paddle is split into a top strip and a bottom strip of equal size so
/// the orchestrator can bounce the ball upward off the top face and downward
/// off the bottom face. The strips always abut and move together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Center of the combined paddle rectangle
    pub center: DVec2,
    width: f64,
    height: f64,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Paddle {
    /// Spawn flush against the left wall at the configured height fraction.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            center: DVec2::new(
                config.paddle_width / 2.0,
                config.paddle_initial_y_frac * config.board_height,
            ),
            width: config.paddle_width,
            height: config.paddle_height,
            min_x: config.paddle_width / 2.0,
            max_x: config.board_width - config.paddle_width / 2.0,
            min_y: config.paddle_min_y_frac * config.board_height,
            max_y: config.paddle_max_y_frac * config.board_height,
        }
    }

    /// Move the paddle center toward `(x, y)`, clamped so the paddle stays
    /// fully on the board horizontally and within its vertical play band.
    /// Idempotent for the same input.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.center.x = x.clamp(self.min_x, self.max_x);
        self.center.y = y.clamp(self.min_y, self.max_y);
    }

    /// Upper collision strip (full width, top half of the paddle).
    pub fn top_strip(&self) -> Bounds {
        Bounds::at(
            self.center.x - self.width / 2.0,
            self.center.y - self.height / 2.0,
            self.width,
            self.height / 2.0,
        )
    }

    /// Lower collision strip (full width, bottom half of the paddle).
    pub fn bottom_strip(&self) -> Bounds {
        Bounds::at(
            self.center.x - self.width / 2.0,
            self.center.y,
            self.width,
            self.height / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_paddle() -> Paddle {
        Paddle::new(&GameConfig::default())
    }

    #[test]
    fn test_spawns_at_initial_height_fraction() {
        let paddle = test_paddle();
        assert_eq!(paddle.center.y, 0.8 * 600.0);
    }

    #[test]
    fn test_strips_abut_and_cover_full_height() {
        let mut paddle = test_paddle();
        paddle.move_to(200.0, 480.0);
        let top = paddle.top_strip();
        let bottom = paddle.bottom_strip();

        assert_eq!(top.max_y, bottom.min_y);
        assert_eq!(top.min_x, bottom.min_x);
        assert_eq!(top.max_x, bottom.max_x);
        assert_eq!(bottom.max_y - top.min_y, 5.0);
        assert_eq!(top.width(), 100.0);
    }

    #[test]
    fn test_move_to_clamps_out_of_range_targets() {
        let mut paddle = test_paddle();

        paddle.move_to(-500.0, 0.0);
        assert_eq!(paddle.center, DVec2::new(50.0, 0.7 * 600.0));

        paddle.move_to(9999.0, 9999.0);
        assert_eq!(paddle.center, DVec2::new(350.0, 0.9 * 600.0));
    }

    proptest! {
        #[test]
        fn prop_center_stays_in_clamp_ranges(
            x in -1e4f64..1e4,
            y in -1e4f64..1e4,
        ) {
            let mut paddle = test_paddle();
            paddle.move_to(x, y);
            prop_assert!(paddle.center.x >= 50.0 && paddle.center.x <= 350.0);
            prop_assert!(paddle.center.y >= 420.0 && paddle.center.y <= 540.0);
        }

        #[test]
        fn prop_move_to_is_idempotent(
            x in -1e4f64..1e4,
            y in -1e4f64..1e4,
        ) {
            let mut paddle = test_paddle();
            paddle.move_to(x, y);
            let first = paddle.center;
            paddle.move_to(x, y);
            prop_assert_eq!(paddle.center, first);
        }
    }
}
