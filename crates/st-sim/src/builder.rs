//! Fluent builder for constructing a [`Sim`].

use st_agent::{AgentStore, Target};
use st_behavior::BehaviorMode;
use st_core::{AgentId, SimConfig};
use st_motion::MotionSink;
use st_relay::DistressRelay;
use tracing::{debug, warn};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<M>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — fixed timestep, total ticks, seed, …
/// - [`AgentStore`] — from [`st_agent::AgentStoreBuilder`]
/// - `M: MotionSink` — the bodies (e.g. [`st_motion::KinematicBodies`])
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                         |
/// |-------------------------|---------------------------------|
/// | `.subscriptions(pairs)` | No distress subscriptions       |
/// | `.subscribe(e, l)`      | —                               |
/// | `.targets(v)`           | Targets already in the store    |
///
/// # Example
///
/// ```rust,ignore
/// let agents = AgentStoreBuilder::new()
///     .agent(Behavior::evade(motion, 5.0)?, Target::Agent(AgentId(1)))
///     .agent(Behavior::default(), Target::Agent(AgentId(0)))
///     .build()?;
/// let mut sim = SimBuilder::new(config, agents, KinematicBodies::at(positions))
///     .subscribe(AgentId(0), AgentId(2))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<M: MotionSink> {
    config:        SimConfig,
    agents:        AgentStore,
    motion:        M,
    subscriptions: Vec<(AgentId, AgentId)>,
    targets:       Option<Vec<Target>>,
}

impl<M: MotionSink> SimBuilder<M> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, agents: AgentStore, motion: M) -> Self {
        Self {
            config,
            agents,
            motion,
            subscriptions: Vec::new(),
            targets:       None,
        }
    }

    /// Add `(evader, listener)` distress subscriptions.
    ///
    /// Pairs whose evader does not run Evade are dropped at build time with a
    /// warning; such an agent never emits distress.
    pub fn subscriptions<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (AgentId, AgentId)>,
    {
        self.subscriptions.extend(pairs);
        self
    }

    /// Add a single distress subscription.
    pub fn subscribe(mut self, evader: AgentId, listener: AgentId) -> Self {
        self.subscriptions.push((evader, listener));
        self
    }

    /// Replace every agent's target (must be length `agent_count`).
    pub fn targets(mut self, targets: Vec<Target>) -> Self {
        self.targets = Some(targets);
        self
    }

    /// Validate inputs, wire the relay, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<M>> {
        let mut agents = self.agents;
        let agent_count = agents.count;

        // ── Validate config and bodies ────────────────────────────────────
        self.config.validate()?;
        if self.motion.len() != agent_count {
            return Err(SimError::AgentCountMismatch {
                expected: agent_count,
                got:      self.motion.len(),
                what:     "motion bodies",
            });
        }

        // ── Resolve targets ───────────────────────────────────────────────
        if let Some(targets) = self.targets {
            if targets.len() != agent_count {
                return Err(SimError::AgentCountMismatch {
                    expected: agent_count,
                    got:      targets.len(),
                    what:     "targets",
                });
            }
            agents.target = targets;
        }
        for (agent, &target) in agents.agent_ids().zip(&agents.target) {
            if let Target::Agent(other) = target {
                if !agents.contains(other) {
                    return Err(SimError::AgentNotFound { agent: other, what: "target" });
                }
                if other == agent {
                    return Err(SimError::SelfTarget(agent));
                }
            }
        }

        // ── Wire the distress relay ───────────────────────────────────────
        let mut relay = DistressRelay::new();
        for (evader, listener) in self.subscriptions {
            for agent in [evader, listener] {
                if !agents.contains(agent) {
                    return Err(SimError::AgentNotFound { agent, what: "subscription" });
                }
            }
            if agents.mode(evader) != BehaviorMode::Evade {
                warn!(
                    %evader, %listener, mode = %agents.mode(evader),
                    "evader is not in Evade mode; subscription skipped",
                );
                continue;
            }
            if agents.mode(listener) != BehaviorMode::Cohesion {
                debug!(%listener, mode = %agents.mode(listener), "listener ignores its distress flag");
            }
            relay.subscribe(evader, listener)?;
        }

        debug!(
            agents = agent_count,
            subscriptions = relay.len(),
            fixed_dt = self.config.fixed_dt,
            "simulation built",
        );

        Ok(Sim {
            clock:  self.config.make_clock(),
            config: self.config,
            agents,
            relay,
            motion: self.motion,
        })
    }
}
