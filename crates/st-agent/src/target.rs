//! Steering targets.

use st_core::{AgentId, Vec2};

/// The external position reference an agent steers toward or away from.
///
/// `None` is a defined state, not an error: an agent without a target skips
/// its behavior update for that tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    #[default]
    None,
    /// A fixed world position.
    Point(Vec2),
    /// Another agent's current position, re-read every tick.
    Agent(AgentId),
}

impl Target {
    #[inline]
    pub fn is_bound(self) -> bool {
        !matches!(self, Target::None)
    }

    /// Resolve to a world position, looking up agent targets with
    /// `position_of`.  Returns `None` for unbound targets and for agent
    /// targets `position_of` does not know.
    pub fn resolve(self, position_of: impl Fn(AgentId) -> Option<Vec2>) -> Option<Vec2> {
        match self {
            Target::None         => None,
            Target::Point(p)     => Some(p),
            Target::Agent(other) => position_of(other),
        }
    }
}

impl From<Vec2> for Target {
    fn from(p: Vec2) -> Self {
        Target::Point(p)
    }
}

impl From<AgentId> for Target {
    fn from(agent: AgentId) -> Self {
        Target::Agent(agent)
    }
}
