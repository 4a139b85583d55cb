//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use wp_core::{EntityId, PathId, SimConfig};
use wp_entity::{EntityConfig, Transform};
use wp_path::Path;

use crate::{Sim, SimError, SimResult};

/// An entity queued for construction.
struct EntitySpec {
    config: EntityConfig,
    pose:   Transform,
    path:   Option<PathId>,
}

/// Builder for [`Sim`].
///
/// Paths and entities are registered in order; the returned ids are the
/// indices they will have in the built `Sim`.
///
/// # Required inputs
///
/// - [`SimConfig`] - total ticks, step length, seed, snapshot interval
///
/// # Optional inputs
///
/// | Method                    | Default     |
/// |---------------------------|-------------|
/// | `.path(p)`                | no paths    |
/// | `.entity(cfg, pose, p)`   | no entities |
///
/// Entities registered with `Some(path)` begin traversing it when the sim is
/// built; the started events are reported on the first tick.
///
/// # Example
///
/// ```rust,ignore
/// let mut builder = SimBuilder::new(config);
/// let loop_id = builder.path(load_path_csv("loop.csv".as_ref())?);
/// builder.entity(EntityConfig::default(), Transform::default(), Some(loop_id));
/// let mut sim = builder.build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    paths:    Vec<Path>,
    entities: Vec<EntitySpec>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, paths: Vec::new(), entities: Vec::new() }
    }

    /// Register a path; returns the id it will have once built.
    pub fn path(&mut self, path: Path) -> PathId {
        self.paths.push(path);
        PathId((self.paths.len() - 1) as u32)
    }

    /// Register an entity, optionally starting it on `path` at build time.
    pub fn entity(
        &mut self,
        config: EntityConfig,
        pose:   Transform,
        path:   Option<PathId>,
    ) -> EntityId {
        self.entities.push(EntitySpec { config, pose, path });
        EntityId((self.entities.len() - 1) as u32)
    }

    /// Validate inputs, start any pre-assigned entities, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        if u32::try_from(self.paths.len()).is_err() || u32::try_from(self.entities.len()).is_err() {
            return Err(SimError::Config("path or entity count exceeds u32".into()));
        }

        if self.paths.is_empty() {
            log::warn!("building simulation with no paths; entities will stay idle");
        }

        let path_count = self.paths.len();
        if let Some(bad) = self
            .entities
            .iter()
            .filter_map(|spec| spec.path)
            .find(|path| path.index() >= path_count)
        {
            return Err(SimError::UnknownPath(bad));
        }

        let paths = self.paths.into_iter().map(Arc::new).collect();
        let mut sim = Sim::new(self.config, paths);

        for spec in self.entities {
            let id = sim.add_entity(spec.config, spec.pose)?;
            if let Some(path) = spec.path {
                sim.begin(id, path)?;
            }
        }

        log::info!(
            "simulation built: {} paths, {} entities, dt {}s",
            sim.path_count(),
            sim.entities().len(),
            sim.config.dt_secs
        );
        Ok(sim)
    }
}
