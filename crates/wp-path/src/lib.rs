//! `wp-path` - waypoints and the ordered paths built from them.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`point`]   | `PathPoint` - one waypoint plus neighbor-derived geometry       |
//! | [`path`]    | `Path` (ordered, linked sequence), `PathBuilder`                |
//! | [`loader`]  | `load_path_csv` / `load_path_reader`                            |
//! | [`error`]   | `PathError`, `PathResult<T>`                                    |
//!
//! # Topology model
//!
//! A `Path` owns its points.  Each point refers to its neighbors only by
//! index into the owning path, and those links plus every derived field are
//! rebuilt by [`Path::initialize`] whenever membership, order, or a position
//! changes.  Points never hold references to each other.

pub mod error;
pub mod loader;
pub mod path;
pub mod point;

#[cfg(test)]
mod tests;

pub use error::{PathError, PathResult};
pub use loader::{load_path_csv, load_path_reader};
pub use path::{Path, PathBuilder};
pub use point::{PathPoint, PointOverrides, UNSET};
