//! Locomotion variants.

use std::fmt;

/// How an entity moves toward its current waypoint.
///
/// Fixed for a traversal session; selects which step function
/// [`PathFollower::tick`][crate::PathFollower::tick] runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementMode {
    /// Turn toward the waypoint, move forward once roughly facing it.
    #[default]
    ForwardDrivenStraight,
    /// Turn toward a blend of the waypoint and its wide-turn point so
    /// corners are rounded.
    ForwardDrivenSmooth,
    /// Translate along the raw vector to the waypoint; no rotation.
    PointDrivenStraight,
    /// Chase a target interpolated over time along each segment.
    PointDrivenSmooth,
}

impl MovementMode {
    pub const ALL: [MovementMode; 4] = [
        MovementMode::ForwardDrivenStraight,
        MovementMode::ForwardDrivenSmooth,
        MovementMode::PointDrivenStraight,
        MovementMode::PointDrivenSmooth,
    ];

    /// `true` for the modes that translate without steering.
    #[inline]
    pub fn is_point_driven(self) -> bool {
        matches!(self, MovementMode::PointDrivenStraight | MovementMode::PointDrivenSmooth)
    }
}

impl fmt::Display for MovementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MovementMode::ForwardDrivenStraight => "forward-straight",
            MovementMode::ForwardDrivenSmooth   => "forward-smooth",
            MovementMode::PointDrivenStraight   => "point-straight",
            MovementMode::PointDrivenSmooth     => "point-smooth",
        };
        f.write_str(name)
    }
}
