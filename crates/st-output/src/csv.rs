//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_trace.csv`
//! - `distress_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{DistressRow, OutputResult, TraceRow};

pub const TRACE_FILE: &str = "agent_trace.csv";
pub const DISTRESS_FILE: &str = "distress_events.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    trace:       Writer<File>,
    distress:    Writer<File>,
    trace_rows:  u64,
    events:      u64,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut trace = Writer::from_path(dir.join(TRACE_FILE))?;
        trace.write_record(["tick", "agent_id", "x", "y", "vx", "vy", "state", "distressed"])?;

        let mut distress = Writer::from_path(dir.join(DISTRESS_FILE))?;
        distress.write_record(["tick", "evader", "listener", "distressed"])?;

        Ok(Self {
            trace,
            distress,
            trace_rows: 0,
            events:     0,
            finished:   false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        for row in rows {
            self.trace.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.vx.to_string(),
                row.vy.to_string(),
                row.state.to_owned(),
                (row.distressed as u8).to_string(),
            ])?;
        }
        self.trace_rows += rows.len() as u64;
        Ok(())
    }

    fn write_distress(&mut self, row: &DistressRow) -> OutputResult<()> {
        self.distress.write_record(&[
            row.tick.to_string(),
            row.evader.to_string(),
            row.listener.to_string(),
            (row.distressed as u8).to_string(),
        ])?;
        self.events += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trace.flush()?;
        self.distress.flush()?;
        debug!(trace_rows = self.trace_rows, distress_events = self.events, "csv output flushed");
        Ok(())
    }
}
