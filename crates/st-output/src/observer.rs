//! `TraceObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use st_core::{AgentId, SimConfig, Tick};
use st_sim::{AgentReport, SimObserver};

use crate::row::{DistressRow, TraceRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent traces and distress deliveries to any
/// [`OutputWriter`] backend.
///
/// Agent rows are recorded only on ticks that fall on
/// `config.output_interval_ticks`; distress deliveries are always recorded.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    config:     SimConfig,
    /// Rows for the tick in progress, written in one batch at tick end.
    pending:    Vec<TraceRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    /// Create an observer backed by `writer`, sampling per `config`.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            config:     config.clone(),
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TraceObserver<W> {
    fn on_distress(&mut self, tick: Tick, evader: AgentId, listener: AgentId, distressed: bool) {
        let row = DistressRow {
            tick:     tick.0,
            evader:   evader.0,
            listener: listener.0,
            distressed,
        };
        let result = self.writer.write_distress(&row);
        self.store_err(result);
    }

    fn on_agent(&mut self, tick: Tick, agent: AgentId, report: &AgentReport) {
        if !self.config.is_output_tick(tick) {
            return;
        }
        self.pending.push(TraceRow {
            tick:       tick.0,
            agent_id:   agent.0,
            x:          report.position.x,
            y:          report.position.y,
            vx:         report.velocity.x,
            vy:         report.velocity.y,
            state:      report.label(),
            distressed: report.distressed,
        });
    }

    fn on_tick_end(&mut self, _tick: Tick, _steered: usize) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_trace(&self.pending);
        self.pending.clear();
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
