//! Axis-aligned bounding rectangles
//!
//! Every collision test in the game is a rectangle-overlap test: the ball is
//! treated as its bounding square, the paddle as two strips, targets as their
//! visual rectangle and four edge bands of it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in board coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Rectangle from its top-left corner and size.
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + width,
            max_y: y + height,
        }
    }

    /// Square of side `2 * half_extent` centered on `center`.
    pub fn centered(center: DVec2, half_extent: f64) -> Self {
        Self {
            min_x: center.x - half_extent,
            min_y: center.y - half_extent,
            max_x: center.x + half_extent,
            max_y: center.y + half_extent,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Overlap test, inclusive of touching edges.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }
}
