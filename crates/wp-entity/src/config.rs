//! Per-entity movement configuration.

use wp_path::PathPoint;

use crate::MovementMode;

/// Speeds, thresholds, and options for one entity.
///
/// Nothing here is validated.  A `close_enough` ≤ 0 means waypoints are only
/// reached on an exact hit, `roughly_facing` of 1 with easing enabled divides
/// by zero, and a `move_speed` of 0 stalls the entity; all of these are the
/// caller's responsibility.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityConfig {
    /// Units per second (per-second fraction of the remaining vector in
    /// `PointDrivenStraight`).
    pub move_speed:             f32,
    /// Radians per second.
    pub turn_speed:             f32,
    /// Distance at which a waypoint counts as reached.
    pub close_enough:           f32,
    /// Minimum forward·target alignment (0–1) before forward-driven modes
    /// translate.
    pub roughly_facing:         f32,
    /// When > 0, forward-straight speed scales with how far alignment is
    /// above `roughly_facing`.
    pub speed_easing_distance:  f32,
    /// Slow turning as forward-straight alignment passes 0.5.
    pub progressive_turn_speed: bool,
    /// Teleport to the first waypoint when a traversal begins.
    pub snap_to_start:          bool,
    pub mode:                   MovementMode,
    /// Apply per-point speed, segment-time, and timed-pause overrides.
    pub honor_point_overrides:  bool,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            move_speed:             1.0,
            turn_speed:             1.0,
            close_enough:           0.1,
            roughly_facing:         0.9,
            speed_easing_distance:  0.0,
            progressive_turn_speed: false,
            snap_to_start:          false,
            mode:                   MovementMode::ForwardDrivenStraight,
            honor_point_overrides:  false,
        }
    }
}

impl EntityConfig {
    pub fn with_mode(mut self, mode: MovementMode) -> Self {
        self.mode = mode;
        self
    }

    /// Move speed toward `target`, honoring its override when enabled.
    #[inline]
    pub fn speed_toward(&self, target: &PathPoint) -> f32 {
        if self.honor_point_overrides {
            target.overrides.speed().unwrap_or(self.move_speed)
        } else {
            self.move_speed
        }
    }
}
