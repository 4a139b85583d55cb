//! Per-entity traversal state.

use std::fmt;

use glam::Vec3;

/// Below this a computed segment duration counts as zero.
const MIN_SEGMENT_SECS: f32 = 1e-6;

/// Lifecycle of one traversal session.
///
/// ```text
/// Idle ──begin──▶ Traveling ──wait point / pause()──▶ Paused ──resume()──▶ Traveling
///                     │
///                     └──index ≥ point count──▶ Completed  (terminal until begin)
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraversalStatus {
    #[default]
    Idle,
    Traveling,
    Paused,
    Completed,
}

impl fmt::Display for TraversalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraversalStatus::Idle      => "idle",
            TraversalStatus::Traveling => "traveling",
            TraversalStatus::Paused    => "paused",
            TraversalStatus::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// The moving target used by `PointDrivenSmooth`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChaseGoal {
    pub start:   Vec3,
    pub end:     Vec3,
    /// Last interpolated target.
    pub current: Vec3,
}

impl ChaseGoal {
    /// All three fields at `p`.
    #[inline]
    pub fn at(p: Vec3) -> Self {
        Self { start: p, end: p, current: p }
    }
}

/// Everything a follower tracks between ticks.
///
/// Kept as plain fields so a tick allocates nothing and tests can build any
/// state directly.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalState {
    /// Index of the waypoint being approached.  Equals the point count once
    /// the traversal has completed.
    pub index:  usize,
    pub status: TraversalStatus,

    // ── PointDrivenSmooth segment interpolation ───────────────────────────
    pub chase:                   ChaseGoal,
    pub running_segment_time:    f32,
    pub calculated_segment_time: f32,

    /// Seconds left on a timed wait; `None` for an open-ended pause.
    pub pause_remaining: Option<f32>,
}

impl TraversalState {
    #[inline]
    pub fn is_traveling(&self) -> bool {
        self.status == TraversalStatus::Traveling
    }

    /// Fraction of the current segment elapsed, in `[0, 1]`.
    ///
    /// A zero or near-zero segment duration saturates to `1.0`; an infinite
    /// one (zero move speed) stays at `0.0`.
    pub fn segment_fraction(&self) -> f32 {
        if self.calculated_segment_time > MIN_SEGMENT_SECS {
            (self.running_segment_time / self.calculated_segment_time).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}
