//! `PathFollower` - the per-entity traversal state machine.

use std::sync::Arc;

use wp_path::{Path, PathPoint};

use crate::{
    modes, ChaseGoal, EntityConfig, EntityError, EntityResult, MovementMode, PathEvent,
    PathSignals, Pose, TraversalState, TraversalStatus,
};

// ── TickReport ────────────────────────────────────────────────────────────────

/// What happened during one [`PathFollower::tick`].
///
/// Mirrors the signals that fired so a host can react without registering
/// listeners.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Index of the waypoint that was reached this tick.
    pub advanced_from: Option<usize>,
    /// The waypoint-wait signal fired.
    pub waited:        bool,
    /// The path-completed signal fired.
    pub completed:     bool,
    /// A timed wait elapsed and travel resumed.
    pub resumed:       bool,
}

impl TickReport {
    /// Signals fired this tick, in emission order.
    pub fn events(&self) -> impl Iterator<Item = PathEvent> {
        [(self.waited, PathEvent::WaypointWait), (self.completed, PathEvent::Completed)]
            .into_iter()
            .filter_map(|(fired, event)| fired.then_some(event))
    }

    #[inline]
    pub fn advanced(&self) -> bool {
        self.advanced_from.is_some()
    }
}

// ── PathFollower ──────────────────────────────────────────────────────────────

/// Moves one entity along a shared [`Path`].
///
/// The follower owns its traversal state and listener lists; the pose is
/// borrowed from the host on every call.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use glam::Vec3;
/// use wp_entity::{EntityConfig, MovementMode, PathFollower, Transform, TraversalStatus};
/// use wp_path::Path;
///
/// let path = Arc::new(Path::from_positions([Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)]));
/// let config = EntityConfig { move_speed: 2.0, ..EntityConfig::default() }
///     .with_mode(MovementMode::PointDrivenSmooth);
///
/// let mut follower = PathFollower::new(config);
/// let mut pose = Transform::default();
/// follower.begin_traversal(path, &mut pose);
/// for _ in 0..200 {
///     follower.tick(&mut pose, 0.05);
/// }
/// assert_eq!(follower.status(), TraversalStatus::Completed);
/// ```
#[derive(Debug, Default)]
pub struct PathFollower {
    pub config:  EntityConfig,
    pub signals: PathSignals,
    state:       TraversalState,
    path:        Option<Arc<Path>>,
}

impl PathFollower {
    pub fn new(config: EntityConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Start traversing `path` from its first point, replacing any prior path.
    ///
    /// Emits the started signal even when the path is empty; ticks on an
    /// empty path are no-ops.
    pub fn begin_traversal<P: Pose>(&mut self, path: Arc<Path>, pose: &mut P) {
        let first = path.get(0).map(|p| p.position);

        self.state = TraversalState {
            status: TraversalStatus::Traveling,
            ..TraversalState::default()
        };

        if let Some(first) = first {
            if self.config.snap_to_start {
                pose.set_position(first);
            }
            if self.config.mode == MovementMode::PointDrivenSmooth {
                self.state.chase = ChaseGoal::at(first);
            }
        }

        log::info!(
            "path traversal started: {} points, mode {}",
            path.len(),
            self.config.mode
        );
        self.path = Some(path);
        self.signals.emit(PathEvent::Started);
    }

    /// Begin again from the first point of the current path.
    pub fn restart<P: Pose>(&mut self, pose: &mut P) -> EntityResult<()> {
        let path = self.path.clone().ok_or(EntityError::NoPath)?;
        self.begin_traversal(path, pose);
        Ok(())
    }

    /// Leave `Paused`; index and segment state are untouched.
    ///
    /// Returns `false` if the follower was not paused.
    pub fn resume(&mut self) -> bool {
        if self.state.status != TraversalStatus::Paused {
            return false;
        }
        self.state.status          = TraversalStatus::Traveling;
        self.state.pause_remaining = None;
        true
    }

    /// Pause until [`resume`](Self::resume).  Only a traveling follower can
    /// be paused.
    pub fn pause(&mut self) -> bool {
        if self.state.status != TraversalStatus::Traveling {
            return false;
        }
        self.state.status          = TraversalStatus::Paused;
        self.state.pause_remaining = None;
        true
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the traversal by `dt` seconds.
    ///
    /// A no-op unless traveling on a path whose index is in range, except
    /// that a timed wait counts down while paused.
    pub fn tick<P: Pose>(&mut self, pose: &mut P, dt: f32) -> TickReport {
        let mut report = TickReport::default();

        if self.state.status == TraversalStatus::Paused {
            if let Some(remaining) = self.state.pause_remaining.as_mut() {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    self.state.status          = TraversalStatus::Traveling;
                    self.state.pause_remaining = None;
                    report.resumed             = true;
                    log::debug!("timed wait elapsed at index {}", self.state.index);
                }
            }
            return report;
        }

        if !self.state.is_traveling() {
            return report;
        }
        let Some(path) = self.path.as_deref() else {
            return report;
        };
        if self.state.index >= path.len() {
            return report;
        }

        if modes::step(&self.config, &mut self.state, path, pose, dt) {
            advance(
                &self.config,
                &mut self.state,
                &mut self.signals,
                path,
                pose.position(),
                &mut report,
            );
        }
        report
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    #[inline]
    pub fn status(&self) -> TraversalStatus {
        self.state.status
    }

    /// Index of the waypoint being approached.
    #[inline]
    pub fn index(&self) -> usize {
        self.state.index
    }

    #[inline]
    pub fn path(&self) -> Option<&Arc<Path>> {
        self.path.as_ref()
    }

    #[inline]
    pub fn is_point_driven(&self) -> bool {
        self.config.mode.is_point_driven()
    }

    /// Live interpolation target of `PointDrivenSmooth`.
    #[inline]
    pub fn chase_goal(&self) -> ChaseGoal {
        self.state.chase
    }

    pub fn current_point(&self) -> Option<&PathPoint> {
        self.path.as_deref()?.get(self.state.index)
    }

    pub fn previous_point(&self) -> Option<&PathPoint> {
        self.path.as_deref()?.prev_of(self.state.index)
    }

    pub fn next_point(&self) -> Option<&PathPoint> {
        self.path.as_deref()?.next_of(self.state.index)
    }

    pub fn on_last_point(&self) -> bool {
        self.path
            .as_deref()
            .is_some_and(|p| !p.is_empty() && self.state.index + 1 == p.len())
    }

    pub fn on_start_or_end(&self) -> bool {
        self.current_point().is_some_and(PathPoint::is_endpoint)
    }
}

// ── Increment protocol ────────────────────────────────────────────────────────

/// The current waypoint was reached: wait if asked, step the index, then
/// complete or set up the next segment.
fn advance(
    config:   &EntityConfig,
    state:    &mut TraversalState,
    signals:  &mut PathSignals,
    path:     &Path,
    position: glam::Vec3,
    report:   &mut TickReport,
) {
    let reached = state.index;
    report.advanced_from = Some(reached);

    let point = &path.points()[reached];
    let timed = if config.honor_point_overrides { point.overrides.pause_secs() } else { None };
    if point.flag_wait_at || timed.is_some() {
        state.status          = TraversalStatus::Paused;
        state.pause_remaining = if point.flag_wait_at { None } else { timed };
        report.waited         = true;
        log::debug!("waiting at waypoint {reached}");
        signals.emit(PathEvent::WaypointWait);
    }

    state.index += 1;
    log::debug!("reached waypoint {reached}, heading to {}", state.index);

    if state.index >= path.len() {
        state.status          = TraversalStatus::Completed;
        state.pause_remaining = None;
        report.completed      = true;
        log::info!("reached end of path at {position}");
        signals.emit(PathEvent::Completed);
    } else if config.mode == MovementMode::PointDrivenSmooth {
        begin_segment(config, state, path, position);
    }
}

/// Set up the chase interpolation toward `state.index`.
fn begin_segment(config: &EntityConfig, state: &mut TraversalState, path: &Path, position: glam::Vec3) {
    let index   = state.index;
    let current = &path.points()[index];
    let speed   = config.speed_toward(current);

    state.running_segment_time = 0.0;

    let distance = match path.next_of(index) {
        Some(next) => {
            state.chase.start = if index == 1 {
                current.wide_turn_position()
            } else {
                state.chase.end
            };
            state.chase.end = next.position;
            position.distance(current.smoothed_position())
        }
        None => {
            state.chase.start = state.chase.end;
            state.chase.end   = current.position;
            position.distance(current.position)
        }
    };
    state.chase.current = state.chase.start;

    state.calculated_segment_time = match current.overrides.segment_time() {
        Some(secs) if config.honor_point_overrides => secs,
        _ => distance / speed,
    };

    log::debug!(
        "segment {index}: chase {} -> {} over {:.3}s",
        state.chase.start,
        state.chase.end,
        state.calculated_segment_time
    );
}
