//! The `Sim` struct and its tick loop.

use st_agent::{AgentStore, Target};
use st_behavior::{SteerInput, SteerOutput};
use st_core::{AgentId, SimClock, SimConfig, Tick, clamp_magnitude};
use st_motion::MotionSink;
use st_relay::{DistressRelay, DistressSink};
use tracing::{debug, info, trace};

use crate::{AgentReport, SimError, SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<M>` holds all simulation state and drives the two-phase tick loop:
///
/// 1. **Compute phase** (optionally parallel with the `parallel` feature):
///    resolve each agent's target and run its behavior against a snapshot of
///    its body.  Agents without a target are skipped.
/// 2. **Apply phase** (sequential, ascending `AgentId` for determinism):
///    - commit the new motion state;
///    - clamp the velocity to `max_speed` and hand it to the motion sink
///      (every agent, steered or not);
///    - fan distress signals out through the relay into listeners' flags.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: MotionSink> {
    /// Global configuration (fixed timestep, total ticks, seed, …).
    pub config: SimConfig,

    /// Simulation clock.  Tracks the current tick and maps it to seconds.
    pub clock: SimClock,

    /// Per-agent behavior, state, distress flags and targets (SoA arrays).
    pub agents: AgentStore,

    /// Evader → listener distress subscriptions.
    pub relay: DistressRelay,

    /// Agent bodies.  Read in the compute phase, written in the apply phase.
    pub motion: M,
}

impl<M: MotionSink> Sim<M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.check_bodies()?;
        let start = self.clock.current_tick;
        info!(
            agents = self.agents.count,
            from = %start,
            to = %self.config.end_tick(),
            "simulation started",
        );

        while self.clock.current_tick < self.config.end_tick() {
            self.tick(observer);
        }

        self.finish(observer);
        info!(
            ticks = self.clock.current_tick.since(start),
            secs = self.clock.elapsed_secs(),
            "simulation finished",
        );
        Ok(())
    }

    /// Close the run for `observer` by calling
    /// [`SimObserver::on_sim_end`] with the current tick.
    ///
    /// [`run`][Self::run] does this itself.  Hosts that drive the loop with
    /// [`step`][Self::step] or [`run_ticks`][Self::run_ticks] call it once
    /// when they stop, so output observers can flush.
    pub fn finish<O: SimObserver>(&self, observer: &mut O) {
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and hosts that own the frame loop.  Does not call
    /// `on_sim_end`; see [`finish`][Self::finish].
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.check_bodies()?;
        for _ in 0..n {
            self.tick(observer);
        }
        Ok(())
    }

    /// Run a single tick.  Returns the number of agents that were steered.
    ///
    /// Does not call `on_sim_end`; see [`finish`][Self::finish].
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        self.check_bodies()?;
        Ok(self.tick(observer))
    }

    /// Retarget `agent`.  Takes effect on the next tick.
    ///
    /// An agent may not target itself.
    pub fn set_target(&mut self, agent: AgentId, target: Target) -> SimResult<()> {
        for id in [Some(agent), target_agent(target)].into_iter().flatten() {
            if !self.agents.contains(id) {
                return Err(SimError::AgentNotFound { agent: id, what: "set_target" });
            }
        }
        if target_agent(target) == Some(agent) {
            return Err(SimError::SelfTarget(agent));
        }
        self.agents.target[agent.index()] = target;
        Ok(())
    }

    /// Current view of `agent`, or `None` if it does not exist.
    ///
    /// `distress` is always `None` here; emitted signals are only reported
    /// through [`SimObserver::on_agent`].
    pub fn report(&self, agent: AgentId) -> Option<AgentReport> {
        if !self.agents.contains(agent) {
            return None;
        }
        let i = agent.index();
        Some(AgentReport {
            position:   self.motion.position(agent),
            velocity:   self.motion.velocity(agent),
            state:      self.agents.motion_state[i],
            distressed: self.agents.distressed[i],
            distress:   None,
            steered:    self.agents.target[i].is_bound(),
        })
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.count
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// The sink is a public field, so a host may have swapped it since build.
    fn check_bodies(&self) -> SimResult<()> {
        if self.motion.len() != self.agents.count {
            return Err(SimError::AgentCountMismatch {
                expected: self.agents.count,
                got:      self.motion.len(),
                what:     "motion bodies",
            });
        }
        Ok(())
    }

    fn tick<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let steered = self.process_tick(now, observer);
        observer.on_tick_end(now, steered);
        self.clock.advance();
        steered
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        let dt = self.clock.fixed_dt;

        // ── Phase 1: resolve targets and snapshot bodies (sequential) ─────
        //
        // Agent targets read the other agent's position as of the start of
        // the tick, so the result does not depend on update order.
        let motion = &self.motion;
        let inputs: Vec<Option<SteerInput>> = self
            .agents
            .agent_ids()
            .map(|agent| {
                let target = self.agents.target[agent.index()]
                    .resolve(|other| (other.index() < motion.len()).then(|| motion.position(other)))?;
                Some(SteerInput {
                    dt,
                    position: motion.position(agent),
                    velocity: motion.velocity(agent),
                    target,
                })
            })
            .collect();

        // ── Phase 2: compute phase (produce) ──────────────────────────────
        let outputs = compute_steering(&self.agents, &inputs);

        // ── Phase 3: apply phase (consume) ────────────────────────────────
        //
        // Distress written here is read by listeners in the next tick's
        // compute phase.
        let mut steered = 0;
        for (i, output) in outputs.iter().enumerate() {
            let agent = AgentId(i as u32);
            let velocity = match output {
                Some(out) => {
                    steered += 1;
                    let before = self.agents.motion_state[i];
                    if before != out.state {
                        trace!(tick = %now, %agent, from = %before, to = %out.state, "state change");
                    }
                    self.agents.motion_state[i] = out.state;
                    out.velocity
                }
                None => self.motion.velocity(agent),
            };
            let max_speed = self.agents.behavior[i].max_speed();
            self.motion.set_velocity(agent, clamp_magnitude(velocity, max_speed));

            if let Some(distressed) = output.and_then(|out| out.distress) {
                let mut sink = FlagSink {
                    flags: &mut self.agents.distressed,
                    observer: &mut *observer,
                    tick: now,
                };
                let delivered = self.relay.notify(agent, distressed, &mut sink);
                debug!(tick = %now, evader = %agent, distressed, delivered, "distress signal");
            }
        }

        // ── Phase 4: integrate ────────────────────────────────────────────
        self.motion.advance(dt);

        // ── Phase 5: report ───────────────────────────────────────────────
        for (i, output) in outputs.iter().enumerate() {
            let agent = AgentId(i as u32);
            let report = AgentReport {
                position:   self.motion.position(agent),
                velocity:   self.motion.velocity(agent),
                state:      self.agents.motion_state[i],
                distressed: self.agents.distressed[i],
                distress:   output.and_then(|out| out.distress),
                steered:    output.is_some(),
            };
            observer.on_agent(now, agent, &report);
        }

        steered
    }
}

/// Run every targeted agent's behavior against its input snapshot.
///
/// With the `parallel` Cargo feature this runs on Rayon's thread pool; the
/// phase only reads `agents` and `inputs`, and `collect` keeps index order.
fn compute_steering(agents: &AgentStore, inputs: &[Option<SteerInput>]) -> Vec<Option<SteerOutput>> {
    let step = |(i, input): (usize, &Option<SteerInput>)| {
        input.as_ref().map(|input| {
            agents.behavior[i].steer(agents.motion_state[i], agents.distressed[i], input)
        })
    };

    #[cfg(not(feature = "parallel"))]
    {
        inputs.iter().enumerate().map(step).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        inputs.par_iter().enumerate().map(step).collect()
    }
}

fn target_agent(target: Target) -> Option<AgentId> {
    match target {
        Target::Agent(other) => Some(other),
        _ => None,
    }
}

// ── Distress delivery ─────────────────────────────────────────────────────────

/// Writes delivered distress into the store's flag column and reports each
/// delivery to the observer.
struct FlagSink<'a, O: SimObserver> {
    flags:    &'a mut [bool],
    observer: &'a mut O,
    tick:     Tick,
}

impl<O: SimObserver> DistressSink for FlagSink<'_, O> {
    fn receive(&mut self, listener: AgentId, evader: AgentId, distressed: bool) {
        if let Some(flag) = self.flags.get_mut(listener.index()) {
            *flag = distressed;
        }
        self.observer.on_distress(self.tick, evader, listener, distressed);
    }
}
