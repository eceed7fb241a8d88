//! Collision tests against paddles and walls
//!
//! Everything is done in whole pixels/scanlines after the ball has moved. The
//! paddle test uses a 3-column band around each 2-column paddle face so a ball
//! stepping a full unit per tick cannot skip past it.

use super::fixed::Fixed;
use super::state::{BallState, Side};
use crate::consts::*;

/// Inclusive column band tested for a paddle
#[inline]
pub fn hit_columns(side: Side) -> (i32, i32) {
    match side {
        Side::Left => LEFT_HIT_COLUMNS,
        Side::Right => RIGHT_HIT_COLUMNS,
    }
}

/// Check whether the ball overlaps a paddle
///
/// Returns the scanline offset of the ball from the paddle's top edge on a
/// hit, `None` on a miss.
pub fn paddle_hit(ball: &BallState, side: Side, paddle_y: i32) -> Option<i32> {
    let (first, last) = hit_columns(side);
    let column = ball.column();
    if column < first || column > last {
        return None;
    }

    let scanline = ball.scanline();
    if scanline >= paddle_y && scanline < paddle_y + PADDLE_HEIGHT {
        Some(scanline - paddle_y)
    } else {
        None
    }
}

/// Vertical velocity imparted by a paddle hit at `offset` scanlines from the
/// paddle's top edge. Center hits go flat, edges steepest.
#[inline]
pub fn english(offset: i32) -> Fixed {
    Fixed::from_raw((offset - PADDLE_HEIGHT / 2) * ENGLISH_PER_SCANLINE_RAW)
}

/// Ball touching (or past) the top or bottom wall
#[inline]
pub fn hits_wall(ball: &BallState) -> bool {
    let scanline = ball.scanline();
    scanline <= 0 || scanline >= FIELD_HEIGHT - BALL_SIZE
}

/// Side that wins the point if the ball has left the field
#[inline]
pub fn scoring_side(ball: &BallState) -> Option<Side> {
    let column = ball.column();
    if column <= 0 {
        Some(Side::Right)
    } else if column >= FIELD_WIDTH {
        Some(Side::Left)
    } else {
        None
    }
}
