//! Critter targets and their quadrant-band bounce resolution

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bounce::BounceDirection;
use super::bounds::Bounds;
use super::state::GameEvent;
use crate::config::GameConfig;

/// The closed set of critter variants. They differ only in which image and
/// teleport sound the presentation layer should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveKind {
    Duck,
    Horse,
    Goat,
}

impl ObjectiveKind {
    /// All variants, in the order the spawn RNG draws from.
    pub const ALL: [ObjectiveKind; 3] =
        [ObjectiveKind::Duck, ObjectiveKind::Horse, ObjectiveKind::Goat];

    /// Image asset identifier for this critter.
    pub fn image_asset(self) -> &'static str {
        match self {
            ObjectiveKind::Duck => "duck.jpg",
            ObjectiveKind::Horse => "horse.jpg",
            ObjectiveKind::Goat => "goat.jpg",
        }
    }

    /// Teleport sound asset identifier for this critter.
    pub fn teleport_sound(self) -> &'static str {
        match self {
            ObjectiveKind::Duck => "quack.wav",
            ObjectiveKind::Horse => "whinny.wav",
            ObjectiveKind::Goat => "bleat.wav",
        }
    }
}

/// A stationary collectible target.
///
/// `pos` is the top-left anchor of the fixed-size visual and never changes
/// after construction. Removal is membership in the session's live set, not
/// a flag on the target itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objective {
    pub kind: ObjectiveKind,
    pos: DVec2,
    width: f64,
    height: f64,
}

impl Objective {
    pub fn new(kind: ObjectiveKind, pos: DVec2, config: &GameConfig) -> Self {
        Self {
            kind,
            pos,
            width: config.objective_width,
            height: config.objective_height,
        }
    }

    /// Top-left anchor of the visual.
    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    /// The target's full bounding rectangle.
    pub fn bounds(&self) -> Bounds {
        Bounds::at(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Test the ball against this target and resolve the bounce direction.
    ///
    /// Returns true whenever the outer rectangle intersects the ball. On a
    /// hit, four overlapping edge bands (north/south: quarter-height, full
    /// width; east/west: quarter-width, full height) are tested in N, E, S,
    /// W order and the first match pushes the ball away from that edge.
    ///
    /// The bands do not cover the central region of the rectangle, so a
    /// ball hitting only the middle registers the collision but gets no
    /// bounce. That gap is inherited behavior, kept as-is; see the
    /// dead-zone test below.
    pub fn test_collide(&self, ball: &mut Ball, events: &mut Vec<GameEvent>) -> bool {
        let ball_bounds = ball.bounds();
        let outer = self.bounds();
        if !outer.intersects(&ball_bounds) {
            return false;
        }

        let band_h = outer.height() / 4.0;
        let band_w = outer.width() / 4.0;
        let north = Bounds::at(outer.min_x, outer.min_y, outer.width(), band_h);
        let south = Bounds::at(outer.min_x, outer.max_y - band_h, outer.width(), band_h);
        let east = Bounds::at(outer.max_x - band_w, outer.min_y, band_w, outer.height());
        let west = Bounds::at(outer.min_x, outer.min_y, band_w, outer.height());

        if north.intersects(&ball_bounds) {
            ball.trigger_bounce(BounceDirection::NoChange, BounceDirection::Negative, events);
        } else if east.intersects(&ball_bounds) {
            ball.trigger_bounce(BounceDirection::Positive, BounceDirection::NoChange, events);
        } else if south.intersects(&ball_bounds) {
            ball.trigger_bounce(BounceDirection::NoChange, BounceDirection::Positive, events);
        } else if west.intersects(&ball_bounds) {
            ball.trigger_bounce(BounceDirection::Negative, BounceDirection::NoChange, events);
        }
        true
    }

    /// Report this critter's teleport sound. Signals consumption; the
    /// session removes the target from the live set separately.
    pub fn teleport(&self, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::Teleport(self.kind));
    }
}
