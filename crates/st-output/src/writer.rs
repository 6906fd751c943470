//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DistressRow, OutputResult, TraceRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with [`TraceObserver::take_error`][crate::TraceObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of agent trace rows (one tick's worth).
    fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()>;

    /// Write one distress delivery.
    fn write_distress(&mut self, row: &DistressRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
