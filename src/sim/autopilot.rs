//! Input sources for the host
//!
//! The engine only sees `TickInput`. Hosts build it either from held keys
//! (`KeyMap`) or, when nobody is at the controls, from the `autopilot`, which
//! reads the match state and never writes it.

use std::collections::HashSet;

use super::state::{MatchState, Side};
use super::tick::TickInput;
use crate::consts::*;

/// Scanlines the ball may stray from the paddle center before the autopilot
/// reacts. Keeps it from jittering on every tick.
pub const AUTOPILOT_DEAD_ZONE: i32 = 2;

/// Key names for each intent (cabinet layout: w/s left, arrows right)
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub left_up: String,
    pub left_down: String,
    pub right_up: String,
    pub right_down: String,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            left_up: "w".to_string(),
            left_down: "s".to_string(),
            right_up: "Up".to_string(),
            right_down: "Down".to_string(),
        }
    }
}

impl KeyMap {
    /// Translate the set of currently held keys into intents
    pub fn input(&self, held: &HashSet<String>) -> TickInput {
        TickInput {
            left_up: held.contains(&self.left_up),
            left_down: held.contains(&self.left_down),
            right_up: held.contains(&self.right_up),
            right_down: held.contains(&self.right_down),
        }
    }
}

/// Track the ball with the paddle center
pub fn steer(state: &MatchState, side: Side) -> (bool, bool) {
    let center = state.paddles.get(side) + PADDLE_HEIGHT / 2;
    let target = state.ball.scanline();
    if target < center - AUTOPILOT_DEAD_ZONE {
        (true, false)
    } else if target > center + AUTOPILOT_DEAD_ZONE {
        (false, true)
    } else {
        (false, false)
    }
}

/// Build intents for the enabled sides, leaving the others idle
pub fn autopilot(state: &MatchState, left: bool, right: bool) -> TickInput {
    let mut input = TickInput::default();
    if left {
        let (up, down) = steer(state, Side::Left);
        input.set(Side::Left, up, down);
    }
    if right {
        let (up, down) = steer(state, Side::Right);
        input.set(Side::Right, up, down);
    }
    input
}
