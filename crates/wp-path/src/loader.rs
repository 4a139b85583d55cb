//! CSV waypoint loader.
//!
//! # CSV format
//!
//! One row per waypoint, in traversal order.  Only `x,y,z` are required;
//! the remaining columns may be omitted entirely or left empty per row.
//!
//! ```csv
//! x,y,z,wait_at,speed_override,segment_time_override,pause_secs
//! 0,0,0,false,,,
//! 10,0,0,true,,,
//! 10,0,10,false,2.5,,
//! 0,0,10,false,,,1.5
//! ```
//!
//! `wait_at` accepts `true`/`false`.

use std::io::Read;

use glam::Vec3;
use serde::Deserialize;

use crate::{Path, PathError, PathPoint, PathResult, PointOverrides};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WaypointRecord {
    x: f32,
    y: f32,
    z: f32,
    #[serde(default)]
    wait_at:               Option<bool>,
    #[serde(default)]
    speed_override:        Option<f32>,
    #[serde(default)]
    segment_time_override: Option<f32>,
    #[serde(default)]
    pause_secs:            Option<f32>,
}

impl From<WaypointRecord> for PathPoint {
    fn from(r: WaypointRecord) -> Self {
        PathPoint::new(Vec3::new(r.x, r.y, r.z))
            .with_wait(r.wait_at.unwrap_or(false))
            .with_overrides(PointOverrides {
                speed:        r.speed_override,
                segment_time: r.segment_time_override,
                pause_secs:   r.pause_secs,
            })
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Path`] from a CSV file.
pub fn load_path_csv(path: &std::path::Path) -> PathResult<Path> {
    let file = std::fs::File::open(path)?;
    load_path_reader(file)
}

/// Like [`load_path_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded layouts.
pub fn load_path_reader<R: Read>(reader: R) -> PathResult<Path> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let points = csv_reader
        .deserialize::<WaypointRecord>()
        .map(|row| {
            row.map(PathPoint::from)
                .map_err(|e| PathError::Parse(e.to_string()))
        })
        .collect::<PathResult<Vec<PathPoint>>>()?;

    log::debug!("loaded {} waypoints", points.len());
    Ok(Path::new(points))
}
