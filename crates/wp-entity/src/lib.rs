//! `wp-entity` - moving one entity along a [`Path`][wp_path::Path].
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`mode`]    | `MovementMode` - the four locomotion variants                     |
//! | [`config`]  | `EntityConfig` - speeds, thresholds, options                      |
//! | [`pose`]    | `Pose` trait (host-owned position/forward), `Transform`           |
//! | [`state`]   | `TraversalState`, `TraversalStatus`, `ChaseGoal`                  |
//! | [`signals`] | `PathEvent`, `Signal`, `PathSignals` - synchronous listener lists |
//! | [`follower`]| `PathFollower` - lifecycle, tick, and the increment protocol      |
//! | `modes`     | per-mode step functions dispatched by `PathFollower::tick`        |
//! | [`error`]   | `EntityError`, `EntityResult<T>`                                  |
//!
//! # Tick model
//!
//! 1. The host calls [`PathFollower::begin_traversal`] with a shared path.
//! 2. Each simulation step the host calls [`PathFollower::tick`] once with
//!    the entity's pose and a non-negative `dt`.
//! 3. The active mode rotates and/or translates the pose and reports whether
//!    the current waypoint has been reached.
//! 4. On arrival the follower runs the increment protocol: optional wait,
//!    index + 1, completion or next-segment setup.
//!
//! Everything runs to completion inside the call; listeners fire
//! synchronously and the returned [`TickReport`] mirrors what fired.

pub mod config;
pub mod error;
pub mod follower;
pub mod mode;
mod modes;
pub mod pose;
pub mod signals;
pub mod state;


pub use config::EntityConfig;
pub use error::{EntityError, EntityResult};
pub use follower::{PathFollower, TickReport};
pub use mode::MovementMode;
pub use pose::{Pose, Transform};
pub use signals::{PathEvent, PathSignals, Signal};
pub use state::{ChaseGoal, TraversalState, TraversalStatus};
