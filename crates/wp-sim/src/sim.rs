//! The `Sim` struct and its tick loop.

use std::sync::Arc;

use wp_core::{EntityId, PathId, SimClock, SimConfig, Tick};
use wp_entity::{EntityConfig, PathEvent, PathFollower, Transform, TraversalStatus};
use wp_path::Path;

use crate::{EntityEvent, SimError, SimObserver, SimResult};

// ── SimEntity ─────────────────────────────────────────────────────────────────

/// One managed entity: its follower, its pose, and the path it was last
/// assigned.
#[derive(Debug)]
pub struct SimEntity {
    pub follower: PathFollower,
    pub pose:     Transform,
    pub path:     Option<PathId>,
}

impl SimEntity {
    #[inline]
    pub fn status(&self) -> TraversalStatus {
        self.follower.status()
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// Every tick each entity's follower is stepped with `dt = config.dt_secs`
/// in ascending [`EntityId`] order, so runs are deterministic.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    /// Global configuration (total ticks, step length, …).
    pub config: SimConfig,

    /// Simulation clock - tracks the current tick.
    pub clock: SimClock,

    /// Registered paths, indexed by `PathId`.
    paths: Vec<Arc<Path>>,

    /// Managed entities, indexed by `EntityId`.
    entities: Vec<SimEntity>,

    /// Started notifications raised outside the tick loop, reported at the
    /// start of the next tick.
    pending: Vec<EntityEvent>,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, paths: Vec<Arc<Path>>) -> Self {
        Self {
            clock: config.make_clock(),
            config,
            paths,
            entities: Vec::new(),
            pending:  Vec::new(),
        }
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register a path and return its id.
    pub fn add_path(&mut self, path: Path) -> SimResult<PathId> {
        let id = PathId::try_from(self.paths.len())
            .map_err(|_| SimError::Config("too many paths".into()))?;
        self.paths.push(Arc::new(path));
        Ok(id)
    }

    /// Add an idle entity and return its id.
    pub fn add_entity(&mut self, config: EntityConfig, pose: Transform) -> SimResult<EntityId> {
        let id = EntityId::try_from(self.entities.len())
            .map_err(|_| SimError::Config("too many entities".into()))?;
        self.entities.push(SimEntity {
            follower: PathFollower::new(config),
            pose,
            path: None,
        });
        Ok(id)
    }

    // ── Entity control ────────────────────────────────────────────────────

    /// Start `entity` on `path` from its first point.
    pub fn begin(&mut self, entity: EntityId, path: PathId) -> SimResult<()> {
        let shared = Arc::clone(self.paths.get(path.index()).ok_or(SimError::UnknownPath(path))?);
        let record = self.entity_mut(entity)?;
        record.follower.begin_traversal(shared, &mut record.pose);
        record.path = Some(path);
        self.pending.push(EntityEvent { entity, event: PathEvent::Started, waypoint: 0 });
        Ok(())
    }

    /// Restart `entity` on the path it was last assigned.
    pub fn restart(&mut self, entity: EntityId) -> SimResult<()> {
        let record = self.entity_mut(entity)?;
        record.follower.restart(&mut record.pose)?;
        self.pending.push(EntityEvent { entity, event: PathEvent::Started, waypoint: 0 });
        Ok(())
    }

    /// Resume a paused entity.  Returns `false` if it was not paused.
    pub fn resume(&mut self, entity: EntityId) -> SimResult<bool> {
        Ok(self.entity_mut(entity)?.follower.resume())
    }

    /// Pause a traveling entity.  Returns `false` if it was not traveling.
    pub fn pause(&mut self, entity: EntityId) -> SimResult<bool> {
        Ok(self.entity_mut(entity)?.follower.pause())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn entity(&self, id: EntityId) -> SimResult<&SimEntity> {
        self.entities.get(id.index()).ok_or(SimError::UnknownEntity(id))
    }

    pub fn entity_mut(&mut self, id: EntityId) -> SimResult<&mut SimEntity> {
        self.entities.get_mut(id.index()).ok_or(SimError::UnknownEntity(id))
    }

    pub fn path(&self, id: PathId) -> SimResult<&Arc<Path>> {
        self.paths.get(id.index()).ok_or(SimError::UnknownPath(id))
    }

    #[inline]
    pub fn entities(&self) -> &[SimEntity] {
        &self.entities
    }

    #[inline]
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Number of entities currently in `status`.
    pub fn count_in(&self, status: TraversalStatus) -> usize {
        self.entities.iter().filter(|e| e.status() == status).count()
    }

    /// `true` once every entity has completed its path.
    pub fn all_completed(&self) -> bool {
        self.entities.iter().all(|e| e.status() == TraversalStatus::Completed)
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        self.flush_pending(self.clock.current_tick, observer);
        observer.on_sim_end(self.clock.current_tick);
        log::info!(
            "simulation finished at {}: {} of {} entities completed",
            self.clock,
            self.count_in(TraversalStatus::Completed),
            self.entities.len()
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer);
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        self.flush_pending(now, observer);

        let advanced = self.process_tick(now, observer);
        observer.on_tick_end(now, advanced);

        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.entities);
        }

        self.clock.advance();
    }

    /// Report started events queued by `begin`/`restart` since the last flush.
    fn flush_pending<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        for event in self.pending.drain(..) {
            observer.on_event(now, &event);
        }
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        let dt = self.clock.dt_secs;
        let mut advanced = 0;

        for (i, record) in self.entities.iter_mut().enumerate() {
            let report = record.follower.tick(&mut record.pose, dt);
            let Some(waypoint) = report.advanced_from else {
                continue;
            };
            advanced += 1;

            let entity = EntityId(i as u32);
            for event in report.events() {
                observer.on_event(now, &EntityEvent { entity, event, waypoint });
            }
        }
        advanced
    }
}
