//! Stateless vector math shared by the path model and the movement modes.
//!
//! All functions operate on `glam::Vec3` in world space with `+Y` as up.
//! None of them validate their inputs: degenerate geometry (coincident
//! points, zero-length directions) yields zero vectors or non-finite values
//! which callers are expected to tolerate.

use glam::{Quat, Vec3};

/// World up axis.
pub const UP: Vec3 = Vec3::Y;

/// Below this squared length a vector is treated as zero.
const ZERO_LEN_SQ: f32 = 1e-12;

/// Solve the third vertex of a triangle with the law of sines.
///
/// `angle_a` and `angle_b` are the interior angles (degrees) at `pt_a` and
/// `pt_b`.  The third angle is taken as `360 - angle_a - angle_b` and the
/// side opposite `pt_a` as `sin(angle_a) * |AB| / sin(angle_c)`; the result
/// is `pt_b + leg_dir * that_length`.
///
/// With the 360° convention `sin(angle_c)` has the opposite sign to the
/// true third angle, so for a valid triangle the solved length is negative
/// and `leg_dir` must point from the unknown corner back toward `pt_b`.
///
/// No validation is done.  When `sin(angle_c) == 0` the result is infinite
/// or NaN and is returned as is.
pub fn solve_triangle_corner(
    pt_a:    Vec3,
    angle_a: f32,
    pt_b:    Vec3,
    angle_b: f32,
    leg_dir: Vec3,
) -> Vec3 {
    let angle_c = 360.0 - angle_a - angle_b;
    let len_c   = pt_a.distance(pt_b);
    let len_a   = angle_a.to_radians().sin() * len_c / angle_c.to_radians().sin();
    pt_b + leg_dir * len_a
}

/// Corner-crossing test used to advance past a waypoint without reaching it.
///
/// Viewed from `current`, returns `true` iff the direction to `agent` is
/// strictly more aligned with the direction to `next` than with the
/// direction to `prev`.  An agent exactly on the bisector returns `false`.
pub fn has_passed_alignment(agent: Vec3, prev: Vec3, current: Vec3, next: Vec3) -> bool {
    let to_agent = (agent - current).normalize_or_zero();
    let with_next = to_agent.dot((next - current).normalize_or_zero());
    let with_prev = to_agent.dot((prev - current).normalize_or_zero());
    with_next > with_prev
}

/// Rotate `current` toward `target` by at most `max_radians`, keeping the
/// magnitude of `current`.
///
/// If either vector is zero-length `current` is returned unchanged.  When the
/// two are antiparallel the rotation happens about an arbitrary axis
/// perpendicular to `current`.
pub fn rotate_towards(current: Vec3, target: Vec3, max_radians: f32) -> Vec3 {
    if current.length_squared() < ZERO_LEN_SQ || target.length_squared() < ZERO_LEN_SQ {
        return current;
    }
    let len  = current.length();
    let from = current / len;
    let to   = target.normalize();

    let angle = from.angle_between(to);
    if angle <= max_radians {
        return to * len;
    }

    let axis = from.cross(to);
    let axis = if axis.length_squared() < ZERO_LEN_SQ {
        from.any_orthonormal_vector()
    } else {
        axis.normalize()
    };
    Quat::from_axis_angle(axis, max_radians) * from * len
}

/// Unsigned angle between `a` and `b` in degrees, in `[0, 180]`.
///
/// Returns `0.0` if either vector is zero-length.
pub fn angle_deg(a: Vec3, b: Vec3) -> f32 {
    if a.length_squared() < ZERO_LEN_SQ || b.length_squared() < ZERO_LEN_SQ {
        return 0.0;
    }
    a.angle_between(b).to_degrees()
}
