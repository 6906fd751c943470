//! Deterministic scenario RNG.
//!
//! Steering itself is fully deterministic; randomness is only used by hosts
//! and demos to scatter initial positions or wander targets.  A `SimRng`
//! seeded from `SimConfig::seed` makes those scenarios reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Vec2;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG for scenario setup and exogenous target motion.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform point inside the axis-aligned square `[-half, half]²` around
    /// `center`.
    pub fn point_near(&mut self, center: Vec2, half: f32) -> Vec2 {
        if half <= 0.0 {
            return center;
        }
        Vec2::new(
            center.x + self.0.gen_range(-half..=half),
            center.y + self.0.gen_range(-half..=half),
        )
    }

    /// Uniform unit-length direction.
    pub fn unit_direction(&mut self) -> Vec2 {
        let angle: f32 = self.0.gen_range(0.0..std::f32::consts::TAU);
        Vec2::new(angle.cos(), angle.sin())
    }
}
