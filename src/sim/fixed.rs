//! 4.4-style fixed-point scalar
//!
//! Every spatial quantity in the simulation is an integer with 4 fractional
//! bits (scale 16). Conversion back to whole units is an arithmetic shift, so
//! negative values round toward negative infinity.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Number of fractional bits
pub const FRAC_BITS: u32 = 4;
/// Raw value of 1.0
pub const SCALE: i32 = 1 << FRAC_BITS;

/// Fixed-point value with 4 fractional bits
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(SCALE);

    /// Wrap a raw fixed-point value (already scaled)
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Fixed(raw)
    }

    /// Convert whole units to fixed point
    #[inline]
    pub const fn from_int(units: i32) -> Self {
        Fixed(units << FRAC_BITS)
    }

    /// Raw scaled value
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Whole units, truncated toward negative infinity
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> FRAC_BITS
    }

    #[inline]
    pub const fn abs(self) -> Self {
        Fixed(self.0.abs())
    }

    #[inline]
    pub const fn signum(self) -> i32 {
        self.0.signum()
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Lossy conversion for render layers. The simulation never calls this.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / SCALE as f32
    }
}

impl Add for Fixed {
    type Output = Fixed;

    #[inline]
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 + rhs.0)
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Fixed) {
        self.0 += rhs.0;
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    #[inline]
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 - rhs.0)
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    #[inline]
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

/// Integer scaling (no rescale needed)
impl Mul<i32> for Fixed {
    type Output = Fixed;

    #[inline]
    fn mul(self, rhs: i32) -> Fixed {
        Fixed(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_round_trip() {
        for units in [0, 1, 80, 120, 160, 239] {
            assert_eq!(Fixed::from_int(units).to_int(), units);
        }
        assert_eq!(Fixed::from_int(80).raw(), 1280);
    }

    #[test]
    fn test_to_int_truncates_toward_negative_infinity() {
        assert_eq!(Fixed::from_raw(15).to_int(), 0);
        assert_eq!(Fixed::from_raw(-1).to_int(), -1);
        assert_eq!(Fixed::from_raw(-16).to_int(), -1);
        assert_eq!(Fixed::from_raw(-17).to_int(), -2);
    }

    #[test]
    fn test_sign_helpers() {
        let v = Fixed::from_raw(-5);
        assert!(v.is_negative());
        assert!(!v.is_positive());
        assert_eq!(v.abs(), Fixed::from_raw(5));
        assert_eq!(-v, Fixed::from_raw(5));
        assert_eq!(v.signum(), -1);
        assert_eq!(Fixed::ZERO.signum(), 0);
    }

    #[test]
    fn test_arithmetic() {
        let mut x = Fixed::from_int(10);
        x += Fixed::ONE;
        assert_eq!(x.to_int(), 11);
        assert_eq!((x - Fixed::from_raw(1)).to_int(), 10);
        assert_eq!(Fixed::from_raw(3) * 4, Fixed::from_raw(12));
        assert!((Fixed::from_raw(24).to_f32() - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_serializes_as_raw_integer() {
        let json = serde_json::to_string(&Fixed::from_int(2)).unwrap();
        assert_eq!(json, "32");
        let back: Fixed = serde_json::from_str("-5").unwrap();
        assert_eq!(back, Fixed::from_raw(-5));
    }
}
