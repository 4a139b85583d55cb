//! Deterministic simulation RNG.
//!
//! Path traversal itself is fully deterministic; randomness is only used by
//! applications and tests that generate waypoint layouts.  Seeding from a
//! single `u64` keeps those layouts reproducible across runs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG for layout generation.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset - e.g. one per
    /// generated path so adding a path does not disturb the others.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A point uniformly distributed in the axis-aligned box `[-half, half]`
    /// on X and Z, with Y fixed at `y`.
    pub fn ground_point(&mut self, half: f32, y: f32) -> glam::Vec3 {
        glam::Vec3::new(self.gen_range(-half..=half), y, self.gen_range(-half..=half))
    }
}
