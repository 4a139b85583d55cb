//! Ordered waypoint sequences and their builder.

use glam::Vec3;

use crate::{PathError, PathPoint, PathResult, PointOverrides};

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered sequence of waypoints; insertion order is traversal order.
///
/// Point `i` links to `i - 1` and `i + 1` (absent at the ends).  Links and
/// derived geometry are established by [`initialize`](Self::initialize),
/// which every mutating method re-runs.  A path is read-only while followers
/// traverse it; share it behind an `Arc` and build a new one to edit.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<PathPoint>,
}

impl Path {
    /// Take ownership of `points` and link them.
    pub fn new(points: Vec<PathPoint>) -> Self {
        let mut path = Self { points };
        path.initialize();
        path
    }

    /// Build a path of plain points (no wait flags or overrides).
    pub fn from_positions<I: IntoIterator<Item = Vec3>>(positions: I) -> Self {
        Self::new(positions.into_iter().map(PathPoint::new).collect())
    }

    /// Link every point to its neighbors and recompute derived geometry.
    pub fn initialize(&mut self) {
        let n = self.points.len();
        let positions: Vec<Vec3> = self.points.iter().map(|p| p.position).collect();

        for (i, point) in self.points.iter_mut().enumerate() {
            let prev = i.checked_sub(1);
            let next = (i + 1 < n).then_some(i + 1);
            point.link(prev, next);
            point.recompute(prev.map(|j| positions[j]), next.map(|j| positions[j]));
        }

        log::debug!("initialized path with {n} points");
    }

    // ── Membership edits ──────────────────────────────────────────────────

    /// Append a point and relink.
    pub fn push(&mut self, point: PathPoint) {
        self.points.push(point);
        self.initialize();
    }

    /// Insert a point at `index` (≤ `len`) and relink.
    pub fn insert(&mut self, index: usize, point: PathPoint) -> PathResult<()> {
        if index > self.points.len() {
            return Err(PathError::IndexOutOfRange { index, len: self.points.len() });
        }
        self.points.insert(index, point);
        self.initialize();
        Ok(())
    }

    /// Remove the point at `index` and relink.
    pub fn remove(&mut self, index: usize) -> PathResult<PathPoint> {
        self.check(index)?;
        let removed = self.points.remove(index);
        self.initialize();
        Ok(removed)
    }

    /// Move the point at `index` and recompute the affected geometry.
    pub fn set_position(&mut self, index: usize, position: Vec3) -> PathResult<()> {
        self.check(index)?;
        self.points[index].position = position;
        self.initialize();
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&PathPoint> {
        self.points.get(index)
    }

    /// Mutable access to authored data (wait flag, overrides).
    ///
    /// Changing `position` through this reference leaves derived geometry
    /// stale until [`initialize`](Self::initialize) runs; prefer
    /// [`set_position`](Self::set_position).
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut PathPoint> {
        self.points.get_mut(index)
    }

    /// The linked previous point of `index`.
    pub fn prev_of(&self, index: usize) -> Option<&PathPoint> {
        self.points.get(index)?.prev_index().and_then(|j| self.points.get(j))
    }

    /// The linked next point of `index`.
    pub fn next_of(&self, index: usize) -> Option<&PathPoint> {
        self.points.get(index)?.next_index().and_then(|j| self.points.get(j))
    }

    /// Position of the final point.
    pub fn destination(&self) -> Option<Vec3> {
        self.points.last().map(|p| p.position)
    }

    /// `true` if `index` is the first or last point.
    #[inline]
    pub fn is_endpoint(&self, index: usize) -> bool {
        index == 0 || index + 1 >= self.points.len()
    }

    pub fn vector_to_next(&self, index: usize) -> PathResult<Vec3> {
        self.check(index + 1)?;
        Ok(self.points[index + 1].position - self.points[index].position)
    }

    pub fn vector_to_prev(&self, index: usize) -> PathResult<Vec3> {
        let prev = index.checked_sub(1).ok_or(PathError::IndexOutOfRange {
            index,
            len: self.points.len(),
        })?;
        self.check(index)?;
        Ok(self.points[prev].position - self.points[index].position)
    }

    pub fn dist_to_next(&self, index: usize) -> PathResult<f32> {
        self.vector_to_next(index).map(Vec3::length)
    }

    pub fn dist_to_prev(&self, index: usize) -> PathResult<f32> {
        self.vector_to_prev(index).map(Vec3::length)
    }

    /// Index of the point nearest `position`; ties go to the earliest point.
    pub fn closest_index(&self, position: Vec3) -> PathResult<usize> {
        let mut best      = None;
        let mut best_dist = f32::INFINITY;
        for (i, point) in self.points.iter().enumerate() {
            let dist = position.distance(point.position);
            if best.is_none() || dist < best_dist {
                best      = Some(i);
                best_dist = dist;
            }
        }
        best.ok_or(PathError::Empty)
    }

    /// The point nearest `position`.
    pub fn closest_point(&self, position: Vec3) -> PathResult<&PathPoint> {
        let index = self.closest_index(position)?;
        Ok(&self.points[index])
    }

    fn check(&self, index: usize) -> PathResult<()> {
        if index >= self.points.len() {
            return Err(PathError::IndexOutOfRange { index, len: self.points.len() });
        }
        Ok(())
    }
}

// ── PathBuilder ───────────────────────────────────────────────────────────────

/// Collect waypoints, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use glam::Vec3;
/// use wp_path::PathBuilder;
///
/// let path = PathBuilder::new()
///     .point(Vec3::ZERO)
///     .wait_point(Vec3::new(5.0, 0.0, 0.0))
///     .point(Vec3::new(5.0, 0.0, 5.0))
///     .build();
/// assert_eq!(path.len(), 3);
/// assert!(path.points()[1].flag_wait_at);
/// ```
#[derive(Default)]
pub struct PathBuilder {
    points: Vec<PathPoint>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(points: usize) -> Self {
        Self { points: Vec::with_capacity(points) }
    }

    /// A plain waypoint.
    pub fn point(mut self, position: Vec3) -> Self {
        self.points.push(PathPoint::new(position));
        self
    }

    /// A waypoint that pauses the follower until resumed.
    pub fn wait_point(mut self, position: Vec3) -> Self {
        self.points.push(PathPoint::new(position).with_wait(true));
        self
    }

    /// A waypoint carrying locomotion overrides.
    pub fn override_point(mut self, position: Vec3, overrides: PointOverrides) -> Self {
        self.points.push(PathPoint::new(position).with_overrides(overrides));
        self
    }

    /// A fully specified point.
    pub fn push(mut self, point: PathPoint) -> Self {
        self.points.push(point);
        self
    }

    pub fn build(self) -> Path {
        Path::new(self.points)
    }
}
