//! Behavior modes as a sum type.
//!
//! Each variant carries only the parameters its logic reads, so an Idle agent
//! cannot be configured with an evade radius and a Seek agent cannot lack its
//! arrive bands.

use std::fmt;

use crate::{ArriveBands, BehaviorError, BehaviorResult, MotionParams, MotionState, SteerInput, SteerOutput};

/// Evade radius an evading agent uses when the host does not pick one.
pub const DEFAULT_EVADE_RADIUS: f32 = 5.0;

/// The fixed category of motion logic an agent runs.  Chosen at creation and
/// never changed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behavior {
    /// Coast to a stop; never looks at the target.
    Idle { motion: MotionParams },

    /// Pursue the target, easing off inside `bands.arrive_radius` and halting
    /// inside `bands.stop_radius`.
    Seek { motion: MotionParams, bands: ArriveBands },

    /// Flee while the target is inside `evade_radius`; broadcasts distress on
    /// entering and leaving that radius.
    Evade { motion: MotionParams, evade_radius: f32 },

    /// Rest until a subscribed evader signals distress, then rush the target.
    Cohesion { motion: MotionParams, bands: ArriveBands },
}

impl Behavior {
    pub fn idle(motion: MotionParams) -> Self {
        Behavior::Idle { motion }
    }

    pub fn seek(motion: MotionParams, bands: ArriveBands) -> Self {
        Behavior::Seek { motion, bands }
    }

    /// # Errors
    ///
    /// `evade_radius` must be finite and positive.
    pub fn evade(motion: MotionParams, evade_radius: f32) -> BehaviorResult<Self> {
        let behavior = Behavior::Evade { motion, evade_radius };
        behavior.validate()?;
        Ok(behavior)
    }

    pub fn cohesion(motion: MotionParams, bands: ArriveBands) -> Self {
        Behavior::Cohesion { motion, bands }
    }

    /// Re-check the invariants that the enum fields cannot encode on their
    /// own.  Called by the agent store builder for variants built literally.
    pub fn validate(&self) -> BehaviorResult<()> {
        if let Behavior::Evade { evade_radius, .. } = *self {
            if !evade_radius.is_finite() || evade_radius <= 0.0 {
                return Err(BehaviorError::Config(format!(
                    "evade_radius must be finite and > 0, got {evade_radius}"
                )));
            }
        }
        Ok(())
    }

    pub fn mode(&self) -> BehaviorMode {
        match self {
            Behavior::Idle { .. }     => BehaviorMode::Idle,
            Behavior::Seek { .. }     => BehaviorMode::Seek,
            Behavior::Evade { .. }    => BehaviorMode::Evade,
            Behavior::Cohesion { .. } => BehaviorMode::Cohesion,
        }
    }

    pub fn motion(&self) -> MotionParams {
        match *self {
            Behavior::Idle { motion }
            | Behavior::Seek { motion, .. }
            | Behavior::Evade { motion, .. }
            | Behavior::Cohesion { motion, .. } => motion,
        }
    }

    /// Speed limit the driver clamps this agent's velocity to.
    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.motion().max_speed()
    }

    /// Radii a host renderer may draw around the agent.
    ///
    /// Seek agents expose their arrive and stop circles and Evade agents
    /// their evade circle.  Idle and Cohesion agents draw nothing.
    pub fn debug_radii(&self) -> DebugRadii {
        match *self {
            Behavior::Seek { bands, .. } => DebugRadii {
                arrive: Some(bands.arrive_radius()),
                stop:   Some(bands.stop_radius()),
                evade:  None,
            },
            Behavior::Evade { evade_radius, .. } => DebugRadii {
                evade: Some(evade_radius),
                ..DebugRadii::default()
            },
            Behavior::Idle { .. } | Behavior::Cohesion { .. } => DebugRadii::default(),
        }
    }

    /// Run one tick of this behavior.  See [`crate::steer`].
    #[inline]
    pub fn steer(&self, state: MotionState, distressed: bool, input: &SteerInput) -> SteerOutput {
        crate::steer(self, state, distressed, input)
    }
}

impl Default for Behavior {
    /// Seek with the default motion parameters and bands.
    fn default() -> Self {
        Behavior::Seek {
            motion: MotionParams::default(),
            bands:  ArriveBands::default(),
        }
    }
}

// ── BehaviorMode ──────────────────────────────────────────────────────────────

/// Fieldless tag of a [`Behavior`], for filtering and display.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorMode {
    Idle,
    Seek,
    Evade,
    Cohesion,
}

impl BehaviorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorMode::Idle     => "idle",
            BehaviorMode::Seek     => "seek",
            BehaviorMode::Evade    => "evade",
            BehaviorMode::Cohesion => "cohesion",
        }
    }
}

impl fmt::Display for BehaviorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DebugRadii ────────────────────────────────────────────────────────────────

/// Circles worth drawing around an agent, in world units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugRadii {
    pub arrive: Option<f32>,
    pub stop:   Option<f32>,
    pub evade:  Option<f32>,
}
