//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `entity_snapshots.csv`
//! - `path_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{EntitySnapshotRow, OutputResult, PathEventRow};
use crate::writer::OutputWriter;

pub const SNAPSHOT_HEADER: [&str; 11] = [
    "entity_id", "tick", "time_secs", "x", "y", "z", "forward_x", "forward_y", "forward_z",
    "status", "waypoint",
];

pub const EVENT_HEADER: [&str; 4] = ["tick", "entity_id", "event", "waypoint"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("entity_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut events = Writer::from_path(dir.join("path_events.csv"))?;
        events.write_record(EVENT_HEADER)?;

        Ok(Self {
            snapshots,
            events,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[EntitySnapshotRow]) -> OutputResult<()> {
        for row in rows {
            let [x, y, z] = row.position;
            let [fx, fy, fz] = row.forward;
            self.snapshots.write_record(&[
                row.entity_id.to_string(),
                row.tick.to_string(),
                row.time_secs.to_string(),
                x.to_string(),
                y.to_string(),
                z.to_string(),
                fx.to_string(),
                fy.to_string(),
                fz.to_string(),
                row.status.to_string(),
                row.waypoint.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_event(&mut self, row: &PathEventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            row.entity_id.to_string(),
            row.event.to_string(),
            row.waypoint.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
