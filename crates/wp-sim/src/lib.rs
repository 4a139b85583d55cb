//! `wp-sim` - drives many path followers over a shared set of paths.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Pending   - report path-started events queued since the last tick.
//!   ② Entities  - tick every follower in ascending EntityId order with
//!                 dt = config.dt_secs; report wait/completed events.
//!   ③ Snapshot  - every output_interval_ticks, hand all poses to the
//!                 observer.
//! ```
//!
//! Paths are immutable once registered and shared between followers via
//! `Arc`; to edit a path, register a new one and re-assign entities.
//!
//! # Quick-start
//!
//! ```
//! use glam::Vec3;
//! use wp_core::SimConfig;
//! use wp_entity::{EntityConfig, Transform};
//! use wp_path::Path;
//! use wp_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig { dt_secs: 0.1, total_ticks: 200, ..SimConfig::default() };
//! let mut builder = SimBuilder::new(config);
//! let route = builder.path(Path::from_positions([Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0)]));
//! builder.entity(EntityConfig::default(), Transform::default(), Some(route));
//!
//! let mut sim = builder.build().unwrap();
//! sim.run(&mut NoopObserver).unwrap();
//! assert!(sim.all_completed());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{EntityEvent, NoopObserver, SimObserver};
pub use sim::{Sim, SimEntity};
