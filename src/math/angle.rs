use crate::math::Vector2;
use std::f32::consts::TAU;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A scalar rotation stored in radians, always normalized into `[0, 2*PI)`
///
/// Every arithmetic operation on angles normalizes its result, so the
/// invariant holds regardless of how angles are combined.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Angle {
    radians: f32,
}

impl Angle {
    /// The zero rotation
    pub const ZERO: Self = Self { radians: 0.0 };

    /// Creates a new angle from radians, normalized into `[0, 2*PI)`
    #[inline]
    pub fn new(radians: f32) -> Self {
        Self {
            radians: normalize_radians(radians),
        }
    }

    /// Creates a new angle from degrees
    #[inline]
    pub fn from_degrees(degrees: f32) -> Self {
        Self::new(crate::math::to_radians(degrees))
    }

    /// Returns the angle in radians, in `[0, 2*PI)`
    #[inline]
    pub fn radians(&self) -> f32 {
        self.radians
    }

    /// Returns the angle in degrees, in `[0, 360)`
    #[inline]
    pub fn degrees(&self) -> f32 {
        crate::math::to_degrees(self.radians)
    }

    /// Returns an equivalent angle in `[0, 2*PI)`
    ///
    /// Angles are kept normalized by construction, so this is the identity;
    /// it exists so callers can state the intent explicitly.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::new(self.radians)
    }

    /// Returns the sine and cosine of the angle
    #[inline]
    pub fn sin_cos(&self) -> (f32, f32) {
        self.radians.sin_cos()
    }

    /// Rotates a vector by this angle
    #[inline]
    pub fn rotate(&self, v: Vector2) -> Vector2 {
        let (sin, cos) = self.sin_cos();
        Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
    }

    /// Rotates a vector by the inverse of this angle
    #[inline]
    pub fn rotate_inverse(&self, v: Vector2) -> Vector2 {
        let (sin, cos) = self.sin_cos();
        Vector2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos)
    }
}

impl Default for Angle {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

/// Maps any radian value into `[0, 2*PI)` with a single modulo operation
#[inline]
fn normalize_radians(radians: f32) -> f32 {
    let r = radians.rem_euclid(TAU);
    // rem_euclid can return TAU itself when the remainder rounds up
    if r >= TAU {
        0.0
    } else {
        r
    }
}

impl Add for Angle {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.radians - rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.radians)
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} rad", self.radians)
    }
}
