//! Unit tests for wp-path.

use glam::Vec3;

use crate::{Path, PathBuilder, PathPoint, UNSET};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Right-angle corner: east 10 m, then 10 m along +Z.
fn corner(turn_z: f32) -> Path {
    Path::from_positions([
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, turn_z),
    ])
}

fn line(n: usize) -> Path {
    Path::from_positions((0..n).map(|i| Vec3::new(i as f32 * 2.0, 0.0, (i % 2) as f32)))
}

// ── Topology ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod topology {
    use super::*;

    #[test]
    fn endpoints_have_one_neighbor() {
        for n in 2..8 {
            let path = line(n);
            let pts = path.points();
            assert!(!pts[0].has_prev());
            assert!(pts[0].has_next());
            assert!(pts[n - 1].has_prev());
            assert!(!pts[n - 1].has_next());
            for p in &pts[1..n - 1] {
                assert!(p.has_prev() && p.has_next());
            }
        }
    }

    #[test]
    fn links_are_sequence_indices() {
        let path = line(4);
        for (i, p) in path.points().iter().enumerate() {
            assert_eq!(p.prev_index(), i.checked_sub(1));
            assert_eq!(p.next_index(), (i + 1 < 4).then_some(i + 1));
        }
        assert_eq!(path.prev_of(2).unwrap().position, path.points()[1].position);
        assert_eq!(path.next_of(2).unwrap().position, path.points()[3].position);
        assert!(path.next_of(3).is_none());
    }

    #[test]
    fn single_point_has_no_neighbors() {
        let path = Path::from_positions([Vec3::ONE]);
        let p = &path.points()[0];
        assert!(!p.has_prev() && !p.has_next());
        assert_eq!(p.dist_to_prev(), UNSET);
        assert_eq!(p.cross_vector(), Vec3::ZERO);
    }

    #[test]
    fn set_position_relinks_neighbors() {
        let mut path = corner(10.0);
        path.set_position(1, Vec3::new(20.0, 0.0, 0.0)).unwrap();
        assert!((path.points()[0].dist_to_next() - 20.0).abs() < 1e-5);
        assert!((path.points()[2].dist_to_prev() - (10.0f32 * 10.0 + 10.0 * 10.0).sqrt()).abs() < 1e-4);
        assert!(path.set_position(3, Vec3::ZERO).is_err());
    }

    #[test]
    fn insert_and_remove_rebuild_links() {
        let mut path = line(3);
        path.insert(3, PathPoint::new(Vec3::new(9.0, 0.0, 0.0))).unwrap();
        assert_eq!(path.len(), 4);
        assert!(path.points()[2].has_next());
        assert!(!path.points()[3].has_next());

        path.remove(0).unwrap();
        assert!(!path.points()[0].has_prev());
        assert!(path.insert(9, PathPoint::new(Vec3::ZERO)).is_err());
    }

    #[test]
    fn segment_queries() {
        let path = corner(10.0);
        assert_eq!(path.vector_to_next(0).unwrap(), Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(path.vector_to_prev(2).unwrap(), Vec3::new(0.0, 0.0, -10.0));
        assert!((path.dist_to_next(1).unwrap() - 10.0).abs() < 1e-6);
        assert!(path.vector_to_next(2).is_err());
        assert!(path.vector_to_prev(0).is_err());
        assert!(path.is_endpoint(0) && path.is_endpoint(2) && !path.is_endpoint(1));
        assert_eq!(path.destination(), Some(Vec3::new(10.0, 0.0, 10.0)));
    }
}

// ── Derived geometry ──────────────────────────────────────────────────────────

#[cfg(test)]
mod geometry {
    use super::*;

    #[test]
    fn recompute_is_idempotent() {
        let mut p = PathPoint::new(Vec3::new(1.0, 2.0, 3.0));
        let prev = Some(Vec3::new(-4.0, 0.0, 1.0));
        let next = Some(Vec3::new(5.0, 1.0, 9.0));
        p.recompute(prev, next);
        let first = p.clone();
        p.recompute(prev, next);
        assert_eq!(p, first);
    }

    #[test]
    fn smoothing_undefined_at_endpoints() {
        let path = corner(10.0);
        for i in [0, 2] {
            let p = &path.points()[i];
            assert_eq!(p.smoothed_position(), p.position);
            assert_eq!(p.wide_turn_position(), p.position);
            assert_eq!(p.cached_angle(), UNSET);
        }
    }

    #[test]
    fn interior_smoothing_and_wide_turn() {
        let path = corner(10.0);
        let p = &path.points()[1];
        let centroid = Vec3::new(20.0, 0.0, 10.0) / 3.0;
        assert!(p.smoothed_position().distance(centroid) < 1e-5);
        assert_eq!(
            p.wide_turn_position(),
            p.position - (p.smoothed_position() - p.position)
        );
        assert!((p.cached_angle() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn cross_vector_points_to_smoothed_side_for_both_turns() {
        for turn in [10.0, -10.0] {
            let path = corner(turn);
            let p = &path.points()[1];
            let cross = p.cross_vector();
            assert!((cross.length() - 1.0).abs() < 1e-5);
            assert_eq!(cross.y, 0.0);
            assert!(cross.dot(p.vector_to_smoothed()) >= 0.0);
        }
    }

    #[test]
    fn cross_vector_only_with_prev() {
        let path = corner(10.0);
        assert_eq!(path.points()[0].cross_vector(), Vec3::ZERO);
        assert!(path.points()[2].cross_vector().length() > 0.99);
        assert_eq!(path.points()[0].dist_prev_to_wide_turn(), UNSET);
        assert!(path.points()[1].dist_prev_to_wide_turn() > 0.0);
    }
}

// ── Nearest-point queries ─────────────────────────────────────────────────────

#[cfg(test)]
mod closest {
    use super::*;
    use crate::PathError;

    #[test]
    fn picks_minimum_distance() {
        let path = corner(10.0);
        assert_eq!(path.closest_index(Vec3::new(9.0, 0.0, 1.0)).unwrap(), 1);
        assert_eq!(
            path.closest_point(Vec3::new(11.0, 0.0, 12.0)).unwrap().position,
            Vec3::new(10.0, 0.0, 10.0)
        );
    }

    #[test]
    fn ties_go_to_first_point() {
        let path = Path::from_positions([Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)]);
        assert_eq!(path.closest_index(Vec3::ZERO).unwrap(), 0);
    }

    #[test]
    fn empty_path_errors() {
        let path = Path::default();
        assert!(matches!(path.closest_point(Vec3::ZERO), Err(PathError::Empty)));
    }
}

// ── Builder and loader ────────────────────────────────────────────────────────

#[cfg(test)]
mod loading {
    use std::io::Cursor;

    use super::*;
    use crate::{load_path_reader, PointOverrides};

    #[test]
    fn builder_sets_flags_and_overrides() {
        let overrides = PointOverrides { speed: Some(3.0), ..Default::default() };
        let path = PathBuilder::new()
            .point(Vec3::ZERO)
            .wait_point(Vec3::X)
            .override_point(Vec3::Z, overrides)
            .build();
        assert!(path.points()[1].flag_wait_at);
        assert_eq!(path.points()[2].overrides.speed(), Some(3.0));
        assert!(path.points()[1].has_prev() && path.points()[1].has_next());
    }

    #[test]
    fn non_positive_overrides_are_ignored() {
        let o = PointOverrides { speed: Some(-1.0), segment_time: Some(0.0), pause_secs: None };
        assert_eq!(o.speed(), None);
        assert_eq!(o.segment_time(), None);
        assert_eq!(o.pause_secs(), None);
    }

    #[test]
    fn loads_full_columns() {
        let csv = "\
x,y,z,wait_at,speed_override,segment_time_override,pause_secs
0,0,0,false,,,
10,0,0,true,,,
10,0,10,false,2.5,,
0,0,10,,,,1.5
";
        let path = load_path_reader(Cursor::new(csv)).unwrap();
        assert_eq!(path.len(), 4);
        assert!(path.points()[1].flag_wait_at);
        assert!(!path.points()[3].flag_wait_at);
        assert_eq!(path.points()[2].overrides.speed(), Some(2.5));
        assert_eq!(path.points()[3].overrides.pause_secs(), Some(1.5));
        assert!(path.points()[2].has_next());
    }

    #[test]
    fn loads_position_only_columns() {
        let csv = "x,y,z\n0,0,0\n1,0,0\n";
        let path = load_path_reader(Cursor::new(csv)).unwrap();
        assert_eq!(path.len(), 2);
        assert!(!path.points()[0].flag_wait_at);
    }

    #[test]
    fn bad_row_is_parse_error() {
        let csv = "x,y,z\n0,zero,0\n";
        let result = load_path_reader(Cursor::new(csv));
        assert!(matches!(result, Err(crate::PathError::Parse(_))));
    }
}
