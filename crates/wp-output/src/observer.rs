//! `SimOutputObserver<W>` - bridges `SimObserver` to an `OutputWriter`.

use wp_core::{SimConfig, Tick};
use wp_sim::{EntityEvent, SimEntity, SimObserver};

use crate::row::{EntitySnapshotRow, PathEventRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes entity snapshots and path events to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    dt_secs:    f32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` to convert ticks
    /// to simulated seconds.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            dt_secs:    config.dt_secs,
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

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                log::warn!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_event(&mut self, tick: Tick, event: &EntityEvent) {
        let row = PathEventRow {
            tick:      tick.0,
            entity_id: event.entity.0,
            event:     event.event,
            waypoint:  event.waypoint as u32,
        };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, entities: &[SimEntity]) {
        let time_secs = tick.0 as f64 * self.dt_secs as f64;
        let rows: Vec<EntitySnapshotRow> = entities
            .iter()
            .enumerate()
            .map(|(i, entity)| EntitySnapshotRow {
                entity_id: i as u32,
                tick:      tick.0,
                time_secs,
                position:  entity.pose.position.to_array(),
                forward:   entity.pose.forward.to_array(),
                status:    entity.status(),
                waypoint:  entity.follower.index() as u32,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
