//! Validated per-agent tuning scalars.
//!
//! Construction is the only place the numeric invariants are checked; once a
//! `MotionParams` or `ArriveBands` exists the steering math may rely on them
//! (in particular `arrive_radius - stop_radius > 0`, the arrive-blend divisor).

use crate::{BehaviorError, BehaviorResult};

/// Smallest accepted per-tick velocity decay factor.
pub const MIN_DECELERATION: f32 = 0.1;
/// Largest accepted per-tick velocity decay factor.
pub const MAX_DECELERATION: f32 = 0.99;

// ── MotionParams ──────────────────────────────────────────────────────────────

/// Speed limit and idle decay shared by every behavior mode.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionParams {
    max_speed:    f32,
    deceleration: f32,
}

impl MotionParams {
    /// # Errors
    ///
    /// `max_speed` must be finite and positive; `deceleration` must lie in
    /// `[MIN_DECELERATION, MAX_DECELERATION]`.
    pub fn new(max_speed: f32, deceleration: f32) -> BehaviorResult<Self> {
        if !max_speed.is_finite() || max_speed <= 0.0 {
            return Err(BehaviorError::Config(format!(
                "max_speed must be finite and > 0, got {max_speed}"
            )));
        }
        if !(MIN_DECELERATION..=MAX_DECELERATION).contains(&deceleration) {
            return Err(BehaviorError::Config(format!(
                "deceleration must be in [{MIN_DECELERATION}, {MAX_DECELERATION}], got {deceleration}"
            )));
        }
        Ok(Self { max_speed, deceleration })
    }

    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Multiplier applied to velocity on every idle tick.
    #[inline]
    pub fn deceleration(&self) -> f32 {
        self.deceleration
    }
}

impl Default for MotionParams {
    /// 4 units/s, 0.75 decay.
    fn default() -> Self {
        Self { max_speed: 4.0, deceleration: 0.75 }
    }
}

// ── ArriveBands ───────────────────────────────────────────────────────────────

/// The two concentric radii that split pursuit into Idle / Arrive / Seek.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArriveBands {
    arrive_radius: f32,
    stop_radius:   f32,
}

impl ArriveBands {
    /// # Errors
    ///
    /// Both radii must be finite with `0 <= stop_radius < arrive_radius`.
    pub fn new(arrive_radius: f32, stop_radius: f32) -> BehaviorResult<Self> {
        if !arrive_radius.is_finite() || !stop_radius.is_finite() {
            return Err(BehaviorError::Config(format!(
                "arrive/stop radii must be finite, got {arrive_radius}/{stop_radius}"
            )));
        }
        if stop_radius < 0.0 {
            return Err(BehaviorError::Config(format!(
                "stop_radius must be >= 0, got {stop_radius}"
            )));
        }
        if stop_radius >= arrive_radius {
            return Err(BehaviorError::Config(format!(
                "stop_radius ({stop_radius}) must be less than arrive_radius ({arrive_radius})"
            )));
        }
        Ok(Self { arrive_radius, stop_radius })
    }

    #[inline]
    pub fn arrive_radius(&self) -> f32 {
        self.arrive_radius
    }

    #[inline]
    pub fn stop_radius(&self) -> f32 {
        self.stop_radius
    }

    /// Pursuit weight while arriving:
    /// `0.01 + (distance - stop) / (arrive - stop)`.
    ///
    /// 0.01 at the stop radius, 1.01 at the arrive radius.  Not clamped, so a
    /// Cohesion agent arriving from inside its stop radius gets a weight
    /// below 0.01 (down to negative values at `distance == 0`).
    #[inline]
    pub fn blend_factor(&self, distance: f32) -> f32 {
        0.01 + (distance - self.stop_radius) / (self.arrive_radius - self.stop_radius)
    }
}

impl Default for ArriveBands {
    /// Arrive at 1.2, stop at 0.5.
    fn default() -> Self {
        Self { arrive_radius: 1.2, stop_radius: 0.5 }
    }
}
