//! Access to the host-owned position and facing of an entity.

use glam::Vec3;

/// Read/write view of an entity's pose.
///
/// The follower never stores a pose; the host passes one into every call so
/// it can live in whatever scene or ECS storage the host uses.
pub trait Pose {
    fn position(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    /// Unit forward direction.
    fn forward(&self) -> Vec3;

    /// Set the forward direction.  `forward` is non-zero and normalized.
    fn set_forward(&mut self, forward: Vec3);

    /// Move by `delta` in world space.
    #[inline]
    fn translate(&mut self, delta: Vec3) {
        let p = self.position();
        self.set_position(p + delta);
    }

    /// Face along `direction`; zero-length directions leave facing unchanged.
    #[inline]
    fn look_along(&mut self, direction: Vec3) {
        if let Some(dir) = direction.try_normalize() {
            self.set_forward(dir);
        }
    }
}

/// A minimal standalone pose: position plus forward vector.
///
/// Faces `+Z` by default.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub forward:  Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self { position: Vec3::ZERO, forward: Vec3::Z }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self { position, ..Self::default() }
    }

    /// A pose at `position` facing `forward` (falls back to `+Z` if zero).
    pub fn facing(position: Vec3, forward: Vec3) -> Self {
        Self { position, forward: forward.try_normalize().unwrap_or(Vec3::Z) }
    }
}

impl Pose for Transform {
    #[inline]
    fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    #[inline]
    fn forward(&self) -> Vec3 {
        self.forward
    }

    #[inline]
    fn set_forward(&mut self, forward: Vec3) {
        self.forward = forward;
    }
}
