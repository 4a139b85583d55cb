//! Simulation observer trait for progress reporting and data collection.

use wp_core::{EntityId, Tick};
use wp_entity::PathEvent;

use crate::SimEntity;

/// One traversal notification, tagged with the entity it came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EntityEvent {
    pub entity:   EntityId,
    pub event:    PathEvent,
    /// Waypoint the event refers to: the reached point for wait/completed,
    /// 0 for started.
    pub waypoint: usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example - completion printer
///
/// ```rust,ignore
/// struct CompletionPrinter;
///
/// impl SimObserver for CompletionPrinter {
///     fn on_event(&mut self, tick: Tick, event: &EntityEvent) {
///         if event.event == PathEvent::Completed {
///             println!("{tick}: {} finished", event.entity);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every path-started, waypoint-wait, and path-completed
    /// notification, in the order they fired.
    fn on_event(&mut self, _tick: Tick, _event: &EntityEvent) {}

    /// Called at the end of each tick.
    ///
    /// `advanced` is the number of waypoint advances across all entities
    /// this tick.
    fn on_tick_end(&mut self, _tick: Tick, _advanced: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// Provides read-only access to every entity so output writers can record
    /// poses without the sim knowing about any output format.
    fn on_snapshot(&mut self, _tick: Tick, _entities: &[SimEntity]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
