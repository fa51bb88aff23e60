//! Critterball - a single-screen paddle arcade game
//!
//! A ball bounces around a bounded board, deflected by a pointer-driven
//! paddle, collecting a grid of critter targets. Clearing the grid wins the
//! session; missing the bottom wall too many times loses it.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session state)
//! - `config`: Immutable board layout and tuning parameters
//! - `audio`: Sound-effect mapping consumed by the presentation layer

pub mod audio;
pub mod config;
pub mod sim;

pub use config::GameConfig;
pub use sim::{GameEvent, GameState, Session, TickInput, tick};
