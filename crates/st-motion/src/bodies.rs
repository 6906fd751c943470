//! `KinematicBodies` — headless body store.

use st_core::{AgentId, Vec2};

use crate::{MotionError, MotionResult, MotionSink};

/// Positions and velocities for every agent, indexed by `AgentId`.
///
/// Bodies are kinematic: no mass, no collisions.  `advance` performs one
/// explicit Euler step.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KinematicBodies {
    pub positions:  Vec<Vec2>,
    pub velocities: Vec<Vec2>,
}

impl KinematicBodies {
    /// `count` bodies at rest at the origin.
    pub fn new(count: usize) -> Self {
        Self {
            positions:  vec![Vec2::ZERO; count],
            velocities: vec![Vec2::ZERO; count],
        }
    }

    /// Bodies at rest at the given positions.
    pub fn at(positions: Vec<Vec2>) -> Self {
        let velocities = vec![Vec2::ZERO; positions.len()];
        Self { positions, velocities }
    }

    /// Teleport `agent` to `position` (setup or host-driven targets).
    pub fn place(&mut self, agent: AgentId, position: Vec2) -> MotionResult<()> {
        let count = self.positions.len();
        let slot = self
            .positions
            .get_mut(agent.index())
            .ok_or(MotionError::AgentOutOfRange { agent, count })?;
        *slot = position;
        Ok(())
    }

    /// Overwrite `agent`'s velocity without clamping (setup only).
    pub fn launch(&mut self, agent: AgentId, velocity: Vec2) -> MotionResult<()> {
        let count = self.velocities.len();
        let slot = self
            .velocities
            .get_mut(agent.index())
            .ok_or(MotionError::AgentOutOfRange { agent, count })?;
        *slot = velocity;
        Ok(())
    }

    /// Current speed of `agent`.
    #[inline]
    pub fn speed(&self, agent: AgentId) -> f32 {
        self.velocities[agent.index()].length()
    }
}

impl MotionSink for KinematicBodies {
    #[inline]
    fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    fn position(&self, agent: AgentId) -> Vec2 {
        self.positions[agent.index()]
    }

    #[inline]
    fn velocity(&self, agent: AgentId) -> Vec2 {
        self.velocities[agent.index()]
    }

    #[inline]
    fn set_velocity(&mut self, agent: AgentId, velocity: Vec2) {
        self.velocities[agent.index()] = velocity;
    }

    fn advance(&mut self, dt: f32) {
        for (p, &v) in self.positions.iter_mut().zip(&self.velocities) {
            *p += v * dt;
        }
    }
}
