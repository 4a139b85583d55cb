//! The `OutputWriter` trait implemented by backend writers.

use crate::{EntitySnapshotRow, OutputResult, PathEventRow};

/// Sink for trajectory snapshots and path events.
///
/// All methods are infallible from the observer's perspective - errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of entity snapshots.
    fn write_snapshots(&mut self, rows: &[EntitySnapshotRow]) -> OutputResult<()>;

    /// Write one path event row.
    fn write_event(&mut self, row: &PathEventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent - safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
