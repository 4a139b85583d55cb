//! Step functions for the four movement modes.
//!
//! Each function moves the pose for one tick and returns `true` when the
//! current waypoint counts as reached.  The caller guarantees
//! `state.index < path.len()`.

use glam::Vec3;

use wp_core::{has_passed_alignment, rotate_towards};
use wp_path::Path;

use crate::{EntityConfig, MovementMode, Pose, TraversalState};

/// Weight applied to segment progress when blending toward the waypoint in
/// forward-smooth steering.
const SMOOTH_BIAS_GAIN: f32 = 1.25;

/// Run the configured mode for one tick.
pub(crate) fn step<P: Pose>(
    config: &EntityConfig,
    state:  &mut TraversalState,
    path:   &Path,
    pose:   &mut P,
    dt:     f32,
) -> bool {
    match config.mode {
        MovementMode::ForwardDrivenStraight => forward_straight(config, path, state.index, pose, dt),
        MovementMode::ForwardDrivenSmooth   => forward_smooth(config, path, state.index, pose, dt),
        MovementMode::PointDrivenStraight   => point_straight(config, path, state.index, pose, dt),
        MovementMode::PointDrivenSmooth     => point_smooth(config, state, path, pose, dt),
    }
}

// ── Forward-driven ────────────────────────────────────────────────────────────

fn forward_straight<P: Pose>(
    config: &EntityConfig,
    path:   &Path,
    index:  usize,
    pose:   &mut P,
    dt:     f32,
) -> bool {
    let target = &path.points()[index];
    let dir    = (target.position - pose.position()).normalize_or_zero();

    let mut rate = config.turn_speed;
    if config.progressive_turn_speed {
        let alignment = pose.forward().dot(dir);
        if alignment > 0.5 {
            rate *= 0.5 + (1.0 - alignment).abs();
        }
    }
    turn(pose, dir, rate * dt);

    let alignment = pose.forward().dot(dir);
    if alignment >= config.roughly_facing {
        let mut speed = config.speed_toward(target);
        if config.speed_easing_distance > 0.0 {
            speed *= (alignment - config.roughly_facing) / (1.0 - config.roughly_facing);
        }
        let step = pose.forward() * speed * dt;
        pose.translate(step);
    }

    pose.position().distance(target.position) <= config.close_enough
}

fn forward_smooth<P: Pose>(
    config: &EntityConfig,
    path:   &Path,
    index:  usize,
    pose:   &mut P,
    dt:     f32,
) -> bool {
    let target = &path.points()[index];
    let wide   = target.wide_turn_position();
    let pos    = pose.position();

    let dir_point = (target.position - pos).normalize_or_zero();
    let heading = if target.has_prev() {
        let remaining = pos.distance(target.position).min(pos.distance(wide));
        let mut bias =
            ((1.0 - remaining / target.dist_to_prev()) * SMOOTH_BIAS_GAIN).clamp(0.0, 1.0);
        if bias.is_nan() {
            bias = 1.0;
        }
        let dir_wide = (wide - pos).normalize_or_zero();
        ((1.0 - bias) * dir_wide + bias * dir_point).normalize_or_zero()
    } else {
        dir_point
    };

    turn(pose, heading, config.turn_speed * dt);

    if pose.forward().dot(heading) >= config.roughly_facing {
        let step = pose.forward() * config.speed_toward(target) * dt;
        pose.translate(step);
    }

    let pos = pose.position();
    let remaining = pos.distance(target.position).min(pos.distance(wide));
    remaining <= config.close_enough || passed_corner(path, index, pos)
}

// ── Point-driven ──────────────────────────────────────────────────────────────

fn point_straight<P: Pose>(
    config: &EntityConfig,
    path:   &Path,
    index:  usize,
    pose:   &mut P,
    dt:     f32,
) -> bool {
    let target = &path.points()[index];
    // Raw vector, so the step shrinks with the remaining distance.
    let step = (target.position - pose.position()) * config.speed_toward(target) * dt;
    pose.translate(step);
    pose.position().distance(target.position) <= config.close_enough
}

fn point_smooth<P: Pose>(
    config: &EntityConfig,
    state:  &mut TraversalState,
    path:   &Path,
    pose:   &mut P,
    dt:     f32,
) -> bool {
    let index  = state.index;
    let target = &path.points()[index];
    let speed  = config.speed_toward(target);

    state.running_segment_time += dt;

    let pos = pose.position();
    let dir = if target.is_endpoint() {
        (target.position - pos).normalize_or_zero()
    } else {
        let t = state.segment_fraction();
        state.chase.current = state.chase.start.lerp(state.chase.end, t);
        (state.chase.current - pos).normalize_or_zero()
    };
    pose.translate(dir * speed * dt);

    let pos = pose.position();
    if pos.distance(state.chase.end) <= config.close_enough || passed_corner(path, index, pos) {
        return true;
    }

    // Past the final point along the incoming segment.
    index + 1 == path.len()
        && target.has_prev()
        && (pos - target.position)
            .normalize_or_zero()
            .dot(target.vector_to_prev().normalize_or_zero())
            < 0.0
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Rotate the pose's forward toward `dir` by at most `max_radians`.
fn turn<P: Pose>(pose: &mut P, dir: Vec3, max_radians: f32) {
    let forward = rotate_towards(pose.forward(), dir, max_radians);
    pose.look_along(forward);
}

/// Corner-crossing test at an interior point; `false` at either end.
fn passed_corner(path: &Path, index: usize, agent: Vec3) -> bool {
    match (path.prev_of(index), path.get(index), path.next_of(index)) {
        (Some(prev), Some(current), Some(next)) => {
            has_passed_alignment(agent, prev.position, current.position, next.position)
        }
        _ => false,
    }
}
