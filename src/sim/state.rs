//! Match state and core simulation types
//!
//! Pure data. Construction and read access live here; every mutation is driven
//! by `tick`.

use serde::{Deserialize, Serialize};

use super::fixed::Fixed;
use crate::consts::*;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// The ball, in fixed point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallState {
    pub x: Fixed,
    pub y: Fixed,
    /// Always +/- `BALL_SPEED_RAW`
    pub dx: Fixed,
    /// Multiple of `ENGLISH_PER_SCANLINE_RAW` (or zero)
    pub dy: Fixed,
}

impl BallState {
    /// Ball at the exact field center, moving horizontally with no english
    pub fn centered(dx: Fixed) -> Self {
        Self {
            x: Fixed::from_int(FIELD_WIDTH / 2),
            y: Fixed::from_int(FIELD_HEIGHT / 2),
            dx,
            dy: Fixed::ZERO,
        }
    }

    /// Horizontal pixel column
    #[inline]
    pub fn column(&self) -> i32 {
        self.x.to_int()
    }

    /// Vertical scanline
    #[inline]
    pub fn scanline(&self) -> i32 {
        self.y.to_int()
    }
}

impl Default for BallState {
    fn default() -> Self {
        Self::centered(Fixed::from_raw(BALL_SPEED_RAW))
    }
}

/// Paddle top edges, in whole scanlines. Always within `0..=PADDLE_MAX_Y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleState {
    pub left: i32,
    pub right: i32,
}

impl PaddleState {
    pub fn get(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut i32 {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl Default for PaddleState {
    fn default() -> Self {
        let centered = (FIELD_HEIGHT - PADDLE_HEIGHT) / 2;
        Self {
            left: centered,
            right: centered,
        }
    }
}

/// Points per side. Only ever incremented by one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub left: u32,
    pub right: u32,
}

impl ScoreState {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Award a point
    pub(crate) fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// First side to have reached `limit`, if any. For scoreboards; the
    /// simulation keeps going regardless.
    pub fn reached(&self, limit: u32) -> Option<Side> {
        if self.left >= limit && self.left >= self.right {
            Some(Side::Left)
        } else if self.right >= limit {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub ball: BallState,
    pub paddles: PaddleState,
    pub score: ScoreState,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl MatchState {
    /// Fresh match: ball centered and serving right, paddles centered
    pub fn new() -> Self {
        Self::default()
    }
}
