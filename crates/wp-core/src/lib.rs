//! `wp-core` - foundational types for the `waypath` path-traversal framework.
//!
//! This crate is a dependency of every other `wp-*` crate.  It has no `wp-*`
//! dependencies and few external ones (`glam`, `rand`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `EntityId`, `PathId`                                      |
//! | [`geometry`]    | triangle-corner solving, alignment-passed test, rotation  |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                           |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                          |
//! | [`error`]       | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geometry;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geometry::{angle_deg, has_passed_alignment, rotate_towards, solve_triangle_corner, UP};
pub use glam::{Quat, Vec3};
pub use ids::{EntityId, PathId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
