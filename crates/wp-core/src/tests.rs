//! Unit tests for wp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EntityId, PathId};

    #[test]
    fn index_roundtrip() {
        let id = EntityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(EntityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(EntityId::INVALID.0, u32::MAX);
        assert_eq!(PathId::default(), PathId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(PathId(3).to_string(), "PathId(3)");
    }
}

#[cfg(test)]
mod geometry {
    use crate::{angle_deg, has_passed_alignment, rotate_towards, solve_triangle_corner, Vec3};

    #[test]
    fn triangle_corner_reconstructs_known_vertex() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(4.0, 0.0, 0.0);
        let c = Vec3::new(0.0, 3.0, 0.0);

        let angle_a = angle_deg(b - a, c - a);
        let angle_b = angle_deg(a - b, c - b);
        let leg_dir = (b - c).normalize();

        let solved = solve_triangle_corner(a, angle_a, b, angle_b, leg_dir);
        assert!(solved.distance(c) < 1e-4, "got {solved}");
    }

    #[test]
    fn triangle_corner_degenerate_is_not_finite() {
        let solved = solve_triangle_corner(
            Vec3::ZERO, 90.0, Vec3::new(4.0, 0.0, 0.0), 270.0, Vec3::X,
        );
        assert!(!solved.is_finite());
    }

    #[test]
    fn alignment_bisector_is_not_passed() {
        let prev    = Vec3::new(-1.0, 0.0, 0.0);
        let current = Vec3::ZERO;
        let next    = Vec3::new(0.0, 0.0, 1.0);
        let agent   = Vec3::new(-1.0, 0.0, 1.0);
        assert!(!has_passed_alignment(agent, prev, current, next));
    }

    #[test]
    fn alignment_past_corner_is_passed() {
        let prev    = Vec3::new(-1.0, 0.0, 0.0);
        let current = Vec3::ZERO;
        let next    = Vec3::new(0.0, 0.0, 1.0);
        assert!(has_passed_alignment(Vec3::new(0.5, 0.0, 1.0), prev, current, next));
        assert!(!has_passed_alignment(Vec3::new(-2.0, 0.0, 0.1), prev, current, next));
    }

    #[test]
    fn rotate_towards_limits_step() {
        let step = 0.1;
        let out = rotate_towards(Vec3::Z, Vec3::X, step);
        assert!((out.length() - 1.0).abs() < 1e-5);
        assert!((out.angle_between(Vec3::Z) - step).abs() < 1e-4);
        assert!(out.x > 0.0);
    }

    #[test]
    fn rotate_towards_snaps_when_within_step() {
        let out = rotate_towards(Vec3::Z * 2.0, Vec3::X * 7.0, 10.0);
        assert!(out.distance(Vec3::X * 2.0) < 1e-5);
    }

    #[test]
    fn rotate_towards_zero_target_is_identity() {
        assert_eq!(rotate_towards(Vec3::Z, Vec3::ZERO, 1.0), Vec3::Z);
    }

    #[test]
    fn rotate_towards_antiparallel_still_turns() {
        let out = rotate_towards(Vec3::Z, -Vec3::Z, 0.5);
        assert!((out.angle_between(Vec3::Z) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn angle_of_zero_vector_is_zero() {
        assert_eq!(angle_deg(Vec3::ZERO, Vec3::X), 0.0);
        assert!((angle_deg(Vec3::X, Vec3::Z) - 90.0).abs() < 1e-4);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
    }

    #[test]
    fn clock_advances() {
        let mut clock = SimClock::new(0.5);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn config_rejects_negative_dt() {
        let cfg = SimConfig { dt_secs: -1.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { dt_secs: f32::NAN, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        assert!(SimConfig::default().validate().is_ok());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_points() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.ground_point(10.0, 0.0), b.ground_point(10.0, 0.0));
        }
    }

    #[test]
    fn ground_point_in_bounds() {
        let mut rng = SimRng::new(1);
        for _ in 0..100 {
            let p = rng.ground_point(5.0, 2.0);
            assert!(p.x.abs() <= 5.0 && p.z.abs() <= 5.0);
            assert_eq!(p.y, 2.0);
        }
    }
}
