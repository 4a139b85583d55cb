//! A single waypoint and the geometry derived from its neighbors.

use glam::Vec3;

use wp_core::{angle_deg, UP};

/// Sentinel for distances and angles that are undefined because a neighbor
/// is missing.
pub const UNSET: f32 = -1.0;

// ── PointOverrides ────────────────────────────────────────────────────────────

/// Optional per-point locomotion overrides.
///
/// These are plain data.  A follower only applies them when its
/// `honor_point_overrides` option is set, and then only values `> 0` count.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOverrides {
    /// Move speed used while heading to this point.
    pub speed:        Option<f32>,
    /// Segment duration (seconds) used by time-interpolated smoothing for the
    /// segment that ends at this point.
    pub segment_time: Option<f32>,
    /// Timed wait on arrival, after which travel resumes by itself.
    pub pause_secs:   Option<f32>,
}

impl PointOverrides {
    /// The speed override, if set to a positive value.
    #[inline]
    pub fn speed(&self) -> Option<f32> {
        self.speed.filter(|s| *s > 0.0)
    }

    #[inline]
    pub fn segment_time(&self) -> Option<f32> {
        self.segment_time.filter(|t| *t > 0.0)
    }

    #[inline]
    pub fn pause_secs(&self) -> Option<f32> {
        self.pause_secs.filter(|t| *t > 0.0)
    }
}

// ── PathPoint ─────────────────────────────────────────────────────────────────

/// One waypoint.
///
/// `position`, `flag_wait_at`, and `overrides` are authored data.  Every
/// other field is derived from `(position, prev.position, next.position)` by
/// [`recompute`](Self::recompute) and must be refreshed (via
/// `Path::initialize`) whenever the topology changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathPoint {
    pub position:     Vec3,
    /// Pause here until travel is resumed externally.
    pub flag_wait_at: bool,
    pub overrides:    PointOverrides,

    // ── Links (indices into the owning Path) ──────────────────────────────
    prev: Option<usize>,
    next: Option<usize>,

    // ── Derived geometry ──────────────────────────────────────────────────
    has_prev:               bool,
    has_next:               bool,
    dist_to_prev:           f32,
    dist_to_next:           f32,
    vector_to_prev:         Vec3,
    vector_to_next:         Vec3,
    smoothed_position:      Vec3,
    cross_vector:           Vec3,
    cached_angle:           f32,
    dist_prev_to_wide_turn: f32,
}

impl PathPoint {
    /// An unlinked point at `position` with no neighbors.
    pub fn new(position: Vec3) -> Self {
        let mut point = Self {
            position,
            flag_wait_at:           false,
            overrides:              PointOverrides::default(),
            prev:                   None,
            next:                   None,
            has_prev:               false,
            has_next:               false,
            dist_to_prev:           UNSET,
            dist_to_next:           UNSET,
            vector_to_prev:         Vec3::ZERO,
            vector_to_next:         Vec3::ZERO,
            smoothed_position:      position,
            cross_vector:           Vec3::ZERO,
            cached_angle:           UNSET,
            dist_prev_to_wide_turn: UNSET,
        };
        point.recompute(None, None);
        point
    }

    pub fn with_wait(mut self, wait: bool) -> Self {
        self.flag_wait_at = wait;
        self
    }

    pub fn with_overrides(mut self, overrides: PointOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Refresh every derived field from the neighbor positions.
    ///
    /// Pure in its inputs: calling it again with the same positions yields
    /// identical fields.  Neighbors are not touched.
    pub fn recompute(&mut self, prev: Option<Vec3>, next: Option<Vec3>) {
        let pos = self.position;

        self.has_prev               = prev.is_some();
        self.has_next               = next.is_some();
        self.dist_to_prev           = UNSET;
        self.dist_to_next           = UNSET;
        self.vector_to_prev         = Vec3::ZERO;
        self.vector_to_next         = Vec3::ZERO;
        self.smoothed_position      = pos;
        self.cross_vector           = Vec3::ZERO;
        self.cached_angle           = UNSET;
        self.dist_prev_to_wide_turn = UNSET;

        if let Some(next) = next {
            self.dist_to_next   = pos.distance(next);
            self.vector_to_next = next - pos;
        }

        if let Some(prev) = prev {
            self.dist_to_prev   = pos.distance(prev);
            self.vector_to_prev = prev - pos;
        }

        if let (Some(prev), Some(next)) = (prev, next) {
            self.smoothed_position = (pos + prev + next) / 3.0;
            self.cached_angle      = angle_deg(self.vector_to_prev, self.vector_to_next);
        }

        if let Some(prev) = prev {
            let to_smoothed = self.vector_to_smoothed().normalize_or_zero();
            let cross       = (-self.vector_to_prev).cross(UP).normalize_or_zero();
            self.cross_vector = if cross.dot(-to_smoothed) > cross.dot(to_smoothed) {
                -cross
            } else {
                cross
            };
            self.dist_prev_to_wide_turn = prev.distance(self.wide_turn_position());
        }
    }

    /// Record neighbor indices.  Only `Path::initialize` calls this.
    pub(crate) fn link(&mut self, prev: Option<usize>, next: Option<usize>) {
        self.prev = prev;
        self.next = next;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn prev_index(&self) -> Option<usize> {
        self.prev
    }

    #[inline]
    pub fn next_index(&self) -> Option<usize> {
        self.next
    }

    #[inline]
    pub fn has_prev(&self) -> bool {
        self.has_prev
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// `true` at either end of a path (one neighbor missing).
    #[inline]
    pub fn is_endpoint(&self) -> bool {
        !self.has_prev || !self.has_next
    }

    /// Distance to the previous point, or [`UNSET`].
    #[inline]
    pub fn dist_to_prev(&self) -> f32 {
        self.dist_to_prev
    }

    /// Distance to the next point, or [`UNSET`].
    #[inline]
    pub fn dist_to_next(&self) -> f32 {
        self.dist_to_next
    }

    #[inline]
    pub fn vector_to_prev(&self) -> Vec3 {
        self.vector_to_prev
    }

    #[inline]
    pub fn vector_to_next(&self) -> Vec3 {
        self.vector_to_next
    }

    /// Centroid of this point and both neighbors; `position` at endpoints.
    #[inline]
    pub fn smoothed_position(&self) -> Vec3 {
        self.smoothed_position
    }

    #[inline]
    pub fn vector_to_smoothed(&self) -> Vec3 {
        self.smoothed_position - self.position
    }

    /// `smoothed_position` mirrored through `position`.
    #[inline]
    pub fn wide_turn_position(&self) -> Vec3 {
        self.position - self.vector_to_smoothed()
    }

    /// Horizontal unit vector perpendicular to the incoming direction, zero
    /// when there is no previous point.
    #[inline]
    pub fn cross_vector(&self) -> Vec3 {
        self.cross_vector
    }

    /// Angle in degrees between the vectors to both neighbors, or [`UNSET`].
    #[inline]
    pub fn cached_angle(&self) -> f32 {
        self.cached_angle
    }

    #[inline]
    pub fn dist_prev_to_wide_turn(&self) -> f32 {
        self.dist_prev_to_wide_turn
    }
}
