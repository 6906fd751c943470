//! Per-agent tick results handed to observers.

use st_behavior::MotionState;
use st_core::Vec2;

/// What an agent looks like after a tick: the values a host displays.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentReport {
    /// Position after the motion sink advanced.
    pub position:   Vec2,
    /// Committed velocity, already clamped to `max_speed`.
    pub velocity:   Vec2,
    pub state:      MotionState,
    /// The agent's own distress flag (meaningful for Cohesion agents).
    pub distressed: bool,
    /// Distress signal this agent emitted this tick (Evade agents only).
    pub distress:   Option<bool>,
    /// `false` when the agent had no target and its behavior was skipped.
    pub steered:    bool,
}

impl AgentReport {
    /// Upper-case status label ("IDLE", "SEEK", …).
    #[inline]
    pub fn label(&self) -> &'static str {
        self.state.label()
    }
}
