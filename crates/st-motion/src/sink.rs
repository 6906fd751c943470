//! The `MotionSink` trait.

use st_core::{AgentId, Vec2};

/// Narrow interface to whatever owns agent bodies.
///
/// Implementations are indexed by `AgentId` and must hold exactly one body per
/// agent in the simulation.  `position` and `velocity` may be called many
/// times per tick; `set_velocity` is called once per agent per tick with an
/// already clamped value.
pub trait MotionSink {
    /// Number of bodies.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn position(&self, agent: AgentId) -> Vec2;

    fn velocity(&self, agent: AgentId) -> Vec2;

    fn set_velocity(&mut self, agent: AgentId, velocity: Vec2);

    /// Move bodies forward by `dt` seconds.
    ///
    /// Default: no-op, for hosts whose physics engine integrates on its own.
    fn advance(&mut self, _dt: f32) {}
}
