//! Simulation observer trait (the driver's status sink).

use st_core::{AgentId, Tick};

use crate::AgentReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  A host UI typically implements `on_agent`
/// to refresh each agent's state label.
///
/// # Example — state change printer
///
/// ```rust,ignore
/// struct Labels(Vec<MotionState>);
///
/// impl SimObserver for Labels {
///     fn on_agent(&mut self, tick: Tick, agent: AgentId, report: &AgentReport) {
///         if self.0[agent.index()] != report.state {
///             println!("{tick} {agent}: {}", report.label());
///             self.0[agent.index()] = report.state;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per distress delivery during the apply phase, in delivery
    /// order.
    fn on_distress(
        &mut self,
        _tick:       Tick,
        _evader:     AgentId,
        _listener:   AgentId,
        _distressed: bool,
    ) {}

    /// Called for every agent, in ascending `AgentId`, after bodies advanced.
    fn on_agent(&mut self, _tick: Tick, _agent: AgentId, _report: &AgentReport) {}

    /// Called at the end of each tick.
    ///
    /// `steered` is the number of agents whose behavior ran (had a target).
    fn on_tick_end(&mut self, _tick: Tick, _steered: usize) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run], or
    /// by [`Sim::finish`][crate::Sim::finish] for host-driven loops.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
