//! Core agent storage: `AgentStore` (SoA data).
//!
//! Every `Vec` field has exactly `count` elements and the `AgentId` value is
//! the index into all of them:
//!
//! ```ignore
//! let state = store.motion_state[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! The compute phase of the driver borrows the store immutably; only the
//! sequential apply phase writes `motion_state` and `distressed`.

use st_behavior::{Behavior, BehaviorMode, MotionState};
use st_core::AgentId;

use crate::Target;

/// Structure-of-Arrays storage for all agent state owned by the steering core.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Behavior mode and its parameters.  Fixed after construction.
    pub behavior: Vec<Behavior>,

    /// Current motion state.  Every agent starts `Idle`.
    pub motion_state: Vec<MotionState>,

    /// Distress flag written by the relay, read by Cohesion agents.
    pub distressed: Vec<bool>,

    /// What each agent steers relative to.
    pub target: Vec<Target>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// `true` if `agent` indexes a stored agent.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    #[inline]
    pub fn mode(&self, agent: AgentId) -> BehaviorMode {
        self.behavior[agent.index()].mode()
    }

    /// All agents running `mode`, ascending.
    pub fn agents_in_mode(&self, mode: BehaviorMode) -> impl Iterator<Item = AgentId> + '_ {
        self.agent_ids().filter(move |&a| self.mode(a) == mode)
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn new(behavior: Vec<Behavior>, target: Vec<Target>) -> Self {
        let count = behavior.len();
        debug_assert_eq!(count, target.len());
        Self {
            count,
            behavior,
            motion_state: vec![MotionState::Idle; count],
            distressed:   vec![false; count],
            target,
        }
    }
}
