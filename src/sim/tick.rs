//! Fixed timestep simulation tick
//!
//! Advances the match by exactly one frame of the original hardware. Pure
//! state transition: no clock, no I/O, no randomness.

use super::collision::{english, hits_wall, paddle_hit, scoring_side};
use super::fixed::Fixed;
use super::state::{BallState, MatchState, Side};
use crate::consts::*;

/// Input intents for a single tick (deterministic)
///
/// Flags are independent. Holding up and down together is legal and nets to
/// no movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl TickInput {
    /// (up, down) for one paddle
    pub fn intents(&self, side: Side) -> (bool, bool) {
        match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        }
    }

    pub fn set(&mut self, side: Side, up: bool, down: bool) {
        match side {
            Side::Left => {
                self.left_up = up;
                self.left_down = down;
            }
            Side::Right => {
                self.right_up = up;
                self.right_down = down;
            }
        }
    }
}

/// What happened during a tick, for the host's feedback and scoreboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub left_paddle_hit: bool,
    pub right_paddle_hit: bool,
    pub wall_hit: bool,
    /// Side awarded a point this tick
    pub scored: Option<Side>,
}

impl TickEvents {
    /// Number of "bump" signals raised (one per collision branch taken)
    pub fn bumps(&self) -> u32 {
        self.left_paddle_hit as u32 + self.right_paddle_hit as u32 + self.wall_hit as u32
    }

    pub fn bumped(&self) -> bool {
        self.bumps() > 0
    }
}

/// Advance the match state by one tick
pub fn tick(state: &mut MatchState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();
    state.time_ticks += 1;

    // Paddles
    for side in [Side::Left, Side::Right] {
        let (up, down) = input.intents(side);
        move_paddle(state.paddles.get_mut(side), up, down);
    }

    // Ball translation
    let ball = &mut state.ball;
    ball.x += ball.dx;
    ball.y += ball.dy;

    // Paddle collisions force the ball away from the paddle and set english
    if let Some(offset) = paddle_hit(ball, Side::Left, state.paddles.left) {
        ball.dx = ball.dx.abs();
        ball.dy = english(offset);
        events.left_paddle_hit = true;
    }
    if let Some(offset) = paddle_hit(ball, Side::Right, state.paddles.right) {
        ball.dx = -ball.dx.abs();
        ball.dy = english(offset);
        events.right_paddle_hit = true;
    }

    // Walls reflect regardless of any paddle hit this tick
    if hits_wall(ball) {
        ball.dy = -ball.dy;
        events.wall_hit = true;
    }

    if let Some(side) = scoring_side(ball) {
        state.score.award(side);
        reset_ball(ball);
        events.scored = Some(side);
    }

    events
}

/// Step one paddle, each direction clamped on its own
fn move_paddle(y: &mut i32, up: bool, down: bool) {
    if up && *y > 0 {
        *y -= PADDLE_SPEED;
    }
    if down && *y < PADDLE_MAX_Y {
        *y += PADDLE_SPEED;
    }
}

/// Re-center the ball and serve it back the way it came from
fn reset_ball(ball: &mut BallState) {
    let speed = Fixed::from_raw(BALL_SPEED_RAW);
    let dx = if ball.dx.is_negative() { speed } else { -speed };
    *ball = BallState::centered(dx);
}
