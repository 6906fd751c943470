//! 2D vector type and the steering math helpers built on it.
//!
//! `Vec2` uses `f32`, matching the single-precision physics most host engines
//! hand us.  All helpers are pure and total: [`normalize`] of the zero vector
//! is the zero vector, so steering code never has to guard a division.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector or point in world units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or [`Vec2::ZERO`] for a zero-length
    /// input.
    #[inline]
    pub fn normalized(self) -> Vec2 {
        normalize(self)
    }

    /// See [`clamp_magnitude`].
    #[inline]
    pub fn clamped(self, max: f32) -> Vec2 {
        clamp_magnitude(self, max)
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Length of `v`.
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    v.length()
}

/// Unit vector along `v`; the zero vector maps to itself.
pub fn normalize(v: Vec2) -> Vec2 {
    let len = v.length();
    if len > 0.0 {
        Vec2::new(v.x / len, v.y / len)
    } else {
        Vec2::ZERO
    }
}

/// `v` unchanged when `|v| <= max`, otherwise `v` rescaled to length `max`.
///
/// A negative `max` is treated as zero.
pub fn clamp_magnitude(v: Vec2, max: f32) -> Vec2 {
    let max = max.max(0.0);
    let len_sq = v.length_squared();
    if len_sq <= max * max {
        return v;
    }
    let scale = max / len_sq.sqrt();
    Vec2::new(v.x * scale, v.y * scale)
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
