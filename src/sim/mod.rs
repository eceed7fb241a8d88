//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call = one frame)
//! - Integer fixed-point arithmetic only
//! - No clock, rendering, audio or logging dependencies

pub mod autopilot;
pub mod collision;
pub mod fixed;
pub mod state;
pub mod tick;

pub use autopilot::{KeyMap, autopilot};
pub use collision::{english, hits_wall, paddle_hit, scoring_side};
pub use fixed::Fixed;
pub use state::{BallState, MatchState, PaddleState, ScoreState, Side};
pub use tick::{TickEvents, TickInput, tick};
