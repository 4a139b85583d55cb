//! Plain data row types written by output backends.

use wp_entity::{PathEvent, TraversalStatus};

/// One entity's pose and traversal progress at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySnapshotRow {
    pub entity_id: u32,
    pub tick:      u64,
    pub time_secs: f64,
    pub position:  [f32; 3],
    pub forward:   [f32; 3],
    pub status:    TraversalStatus,
    /// Waypoint being approached; equals the point count once completed.
    pub waypoint:  u32,
}

/// One traversal notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEventRow {
    pub tick:      u64,
    pub entity_id: u32,
    pub event:     PathEvent,
    pub waypoint:  u32,
}
