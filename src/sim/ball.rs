//! The ball: position, velocity, motion integration, bounce application

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::bounce::BounceDirection;
use super::bounds::Bounds;
use super::state::GameEvent;
use crate::config::GameConfig;

/// A free-moving ball.
///
/// `pos` is the ball's center; `vel` is in pixels per nanosecond. The radius
/// is fixed for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
}

impl Ball {
    /// Spawn at the board center with the default down-right velocity.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: DVec2::new(config.board_width / 2.0, config.board_height / 2.0),
            vel: DVec2::new(config.initial_vx, config.initial_vy),
            radius: config.ball_radius,
        }
    }

    /// Advance position by `vel * elapsed_ns`.
    ///
    /// No clamping: the ball may exit the board between frames. Wall tests
    /// run after integration and push it back the following step.
    pub fn integrate(&mut self, elapsed_ns: f64) {
        self.pos += self.vel * elapsed_ns;
    }

    /// Apply a bounce policy to each velocity component and report the
    /// bounce sound event. Fire-and-forget: nothing is awaited.
    pub fn trigger_bounce(
        &mut self,
        bounce_x: BounceDirection,
        bounce_y: BounceDirection,
        events: &mut Vec<GameEvent>,
    ) {
        self.vel.x = bounce_x.apply(self.vel.x);
        self.vel.y = bounce_y.apply(self.vel.y);
        events.push(GameEvent::Bounce);
    }

    /// Scale velocity per axis. Used as the difficulty ramp on every
    /// collected target.
    pub fn increase_speed(&mut self, multiplier_x: f64, multiplier_y: f64) {
        self.vel.x *= multiplier_x;
        self.vel.y *= multiplier_y;
    }

    /// The ball's bounding square, used for every collision test.
    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.pos, self.radius)
    }
}
