//! The per-tick steering update.

use st_core::{Vec2, normalize};

use crate::{ArriveBands, Behavior, MotionParams, MotionState};

/// Cohesion pursuit runs this much harder than plain Seek.
pub const COHESION_BOOST: f32 = 1.25;

/// Kinematic inputs for one agent on one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteerInput {
    /// Fixed timestep in seconds.
    pub dt:       f32,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Resolved target position.  Agents without a target are not steered.
    pub target:   Vec2,
}

/// Result of one steering update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteerOutput {
    /// New velocity, not yet clamped to `max_speed`.
    pub velocity: Vec2,
    pub state:    MotionState,
    /// `Some(true)` when an Evade agent just entered danger, `Some(false)`
    /// when it just withdrew, `None` otherwise.
    pub distress: Option<bool>,
}

impl SteerOutput {
    /// Velocity change relative to the velocity the update started from.
    #[inline]
    pub fn delta(&self, before: Vec2) -> Vec2 {
        self.velocity - before
    }
}

/// Offset to the target, its length, and the correction toward it.
struct Approach {
    distance: f32,
    steering: Vec2,
}

impl Approach {
    fn new(input: &SteerInput, motion: MotionParams) -> Self {
        let delta = input.target - input.position;
        let desired = normalize(delta) * motion.max_speed();
        Self {
            distance: delta.length(),
            steering: desired - input.velocity,
        }
    }
}

#[inline]
fn decay(velocity: Vec2, motion: MotionParams) -> Vec2 {
    velocity * motion.deceleration()
}

#[inline]
fn arrive(input: &SteerInput, approach: &Approach, bands: ArriveBands) -> Vec2 {
    let factor = bands.blend_factor(approach.distance);
    input.velocity + approach.steering * factor * input.dt
}

/// Compute one tick of `behavior` for an agent currently in `state`.
///
/// `distressed` is only read by Cohesion agents.  The function is pure: the
/// caller commits `SteerOutput::state` and the (clamped) velocity.
pub fn steer(
    behavior:   &Behavior,
    state:      MotionState,
    distressed: bool,
    input:      &SteerInput,
) -> SteerOutput {
    match *behavior {
        Behavior::Idle { motion } => SteerOutput {
            velocity: decay(input.velocity, motion),
            state,
            distress: None,
        },

        Behavior::Seek { motion, bands } => {
            let approach = Approach::new(input, motion);
            let (state, velocity) = if approach.distance < bands.stop_radius() {
                (MotionState::Idle, decay(input.velocity, motion))
            } else if approach.distance < bands.arrive_radius() {
                (MotionState::Arrive, arrive(input, &approach, bands))
            } else {
                (MotionState::Seek, input.velocity + approach.steering * input.dt)
            };
            SteerOutput { velocity, state, distress: None }
        }

        Behavior::Evade { motion, evade_radius } => {
            let approach = Approach::new(input, motion);
            let (state, distress) =
                if approach.distance > evade_radius && state != MotionState::Idle {
                    (MotionState::Idle, Some(false))
                } else if state != MotionState::Evade && approach.distance < evade_radius {
                    (MotionState::Evade, Some(true))
                } else {
                    (state, None)
                };
            let velocity = match state {
                MotionState::Idle  => decay(input.velocity, motion),
                MotionState::Evade => input.velocity - approach.steering * input.dt,
                MotionState::Arrive | MotionState::Seek => input.velocity,
            };
            SteerOutput { velocity, state, distress }
        }

        Behavior::Cohesion { motion, bands } => {
            let approach = Approach::new(input, motion);
            let (state, velocity) = if !distressed {
                (MotionState::Idle, decay(input.velocity, motion))
            } else if approach.distance < bands.arrive_radius() {
                (MotionState::Arrive, arrive(input, &approach, bands))
            } else {
                (
                    MotionState::Seek,
                    input.velocity + approach.steering * input.dt * COHESION_BOOST,
                )
            };
            SteerOutput { velocity, state, distress: None }
        }
    }
}
