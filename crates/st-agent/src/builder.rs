//! Fluent builder for constructing an `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use st_agent::{AgentStoreBuilder, Target};
//! use st_behavior::{ArriveBands, Behavior, MotionParams};
//! use st_core::Vec2;
//!
//! let motion = MotionParams::default();
//! let store = AgentStoreBuilder::new()
//!     .agent(Behavior::evade(motion, 5.0).unwrap(), Target::None)
//!     .agent(Behavior::cohesion(motion, ArriveBands::default()), Vec2::new(0.0, 0.0).into())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count, 2);
//! ```

use st_behavior::{Behavior, BehaviorError, BehaviorResult};
use st_core::AgentId;

use crate::{AgentStore, Target};

/// Fluent builder for [`AgentStore`].
///
/// Agents receive ascending `AgentId`s in the order they are added.
#[derive(Default)]
pub struct AgentStoreBuilder {
    behavior: Vec<Behavior>,
    target:   Vec<Target>,
}

impl AgentStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `n` agents.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            behavior: Vec::with_capacity(n),
            target:   Vec::with_capacity(n),
        }
    }

    /// Append one agent.
    pub fn agent(mut self, behavior: Behavior, target: Target) -> Self {
        self.behavior.push(behavior);
        self.target.push(target);
        self
    }

    /// Append `n` agents sharing one behavior and target.
    pub fn agents(mut self, n: usize, behavior: Behavior, target: Target) -> Self {
        self.behavior.extend(std::iter::repeat_n(behavior, n));
        self.target.extend(std::iter::repeat_n(target, n));
        self
    }

    /// The id the next added agent will receive.
    pub fn next_id(&self) -> AgentId {
        AgentId(self.behavior.len() as u32)
    }

    /// Validate every behavior and construct the store.
    ///
    /// Target agent ids are not checked here; the driver checks them against
    /// the final agent count.
    pub fn build(self) -> BehaviorResult<AgentStore> {
        for (i, behavior) in self.behavior.iter().enumerate() {
            behavior
                .validate()
                .map_err(|e| BehaviorError::Config(format!("agent {i}: {e}")))?;
        }
        Ok(AgentStore::new(self.behavior, self.target))
    }
}
