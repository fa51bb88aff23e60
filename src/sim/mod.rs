//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time is an input, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (grid scan order for targets)
//! - No rendering, audio, or platform dependencies; side effects are
//!   reported as [`GameEvent`]s for the presentation layer to drain

pub mod ball;
pub mod bounce;
pub mod bounds;
pub mod objective;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use bounce::BounceDirection;
pub use bounds::Bounds;
pub use objective::{Objective, ObjectiveKind};
pub use paddle::Paddle;
pub use state::{GameEvent, GameState, Session};
pub use tick::{TickInput, tick};
