//! Atari Pong - a fixed-point recreation of the arcade original
//!
//! Core modules:
//! - `sim`: Deterministic simulation (fixed-point state, tick, collisions)
//! - `pacing`: Ties wall-clock time to the fixed 60 Hz tick
//! - `settings`: Host preferences (autopilot, bell, run length)

pub mod pacing;
pub mod settings;
pub mod sim;

pub use pacing::FramePacer;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Vertical sync rate of the original hardware (one tick per frame)
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep
    pub const TICK_PERIOD: Duration = Duration::from_nanos(1_000_000_000 / TICK_HZ as u64);

    /// Playfield width in horizontal pixels
    pub const FIELD_WIDTH: i32 = 160;
    /// Visible scanlines
    pub const FIELD_HEIGHT: i32 = 240;

    /// Paddle defaults (scanlines / pixels)
    pub const PADDLE_HEIGHT: i32 = 14;
    pub const PADDLE_WIDTH: i32 = 2;
    /// Scanlines per tick
    pub const PADDLE_SPEED: i32 = 1;
    /// Lowest legal paddle top edge
    pub const PADDLE_MAX_Y: i32 = FIELD_HEIGHT - PADDLE_HEIGHT;
    /// Distance of each paddle face from its own edge of the field
    pub const PADDLE_INSET: i32 = 20;

    /// Ball is a 2x2 square
    pub const BALL_SIZE: i32 = 2;
    /// Horizontal ball speed, raw fixed point (1.0 units per tick)
    pub const BALL_SPEED_RAW: i32 = 1 << 4;
    /// Vertical speed gained per scanline of hit offset, raw fixed point (0.25)
    pub const ENGLISH_PER_SCANLINE_RAW: i32 = 1 << 2;

    /// Columns where the ball is tested against each paddle (3 wide, inclusive)
    pub const LEFT_HIT_COLUMNS: (i32, i32) = (PADDLE_INSET, PADDLE_INSET + 2);
    pub const RIGHT_HIT_COLUMNS: (i32, i32) =
        (FIELD_WIDTH - PADDLE_INSET - 2, FIELD_WIDTH - PADDLE_INSET);

    /// Nominal winning score. Display only; the simulation never stops on it.
    pub const SCORE_LIMIT: u32 = 11;
}
