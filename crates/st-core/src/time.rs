//! Fixed-step simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  Every tick advances the
//! world by the same `fixed_dt` seconds, held in `SimClock`:
//!
//!   elapsed_secs = tick * fixed_dt
//!
//! Steering formulas scale by `fixed_dt`, so the integer tick is the canonical
//! unit and the float duration is derived on demand rather than accumulated
//! (no floating-point drift over long runs).
//!
//! The default step is 0.02 s (50 Hz), the usual physics rate of game hosts.

use std::fmt;

use crate::{SteerError, SteerResult};

/// Default fixed timestep in seconds.
pub const DEFAULT_FIXED_DT: f32 = 0.02;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The single external fixed-step clock every agent update is scaled by.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Seconds of simulated time per tick.
    pub fixed_dt: f32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(fixed_dt: f32) -> Self {
        Self { fixed_dt, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.fixed_dt as f64
    }

    /// How many ticks cover `secs` seconds (rounds up).
    pub fn ticks_for_secs(&self, secs: f32) -> u64 {
        if self.fixed_dt <= 0.0 || secs <= 0.0 {
            return 0;
        }
        (secs / self.fixed_dt).ceil() as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Built in code by the host application and passed to the simulation runner.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Seconds per tick.  Must be finite and positive.
    pub fixed_dt: f32,

    /// Total ticks to simulate with `Sim::run`.
    pub total_ticks: u64,

    /// Master RNG seed for scenario setup.  The same seed always produces
    /// identical results.
    pub seed: u64,

    /// Record agent trace rows every N ticks.  1 = every tick, 0 = never.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.fixed_dt)
    }

    /// Check that the run can be stepped: `fixed_dt` must be finite and
    /// positive.
    pub fn validate(&self) -> SteerResult<()> {
        if !self.fixed_dt.is_finite() || self.fixed_dt <= 0.0 {
            return Err(SteerError::Config(format!(
                "fixed_dt must be finite and positive, got {}",
                self.fixed_dt
            )));
        }
        Ok(())
    }

    /// `true` if `tick` falls on an output interval.
    #[inline]
    pub fn is_output_tick(&self, tick: Tick) -> bool {
        self.output_interval_ticks > 0 && tick.0.is_multiple_of(self.output_interval_ticks)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt:              DEFAULT_FIXED_DT,
            total_ticks:           500,
            seed:                  0,
            output_interval_ticks: 1,
        }
    }
}
