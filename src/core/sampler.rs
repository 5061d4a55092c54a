// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::math::constants::{Float, Vector2f, Vector2i};

/// Source of uniform numbers in [0, 1) driving every random decision of a
/// render. Seeding is a pure function of the sampler's base seed and the
/// arguments; the numbers drawn after a seed call depend only on the order
/// of calls since then.
pub trait Sampler: ComputationNode + Send + Sync {
    fn seed(&mut self, sample_index: u32);
    fn seed_pixel(&mut self, pixel: Vector2i, sample_index: u32);
    fn next(&mut self) -> Float;
    fn next_2d(&mut self) -> Vector2f {
        let x = self.next();
        let y = self.next();
        Vector2f::new(x, y)
    }
    fn samples_per_pixel(&self) -> u32;
    fn clone_box(&self) -> Box<dyn Sampler>;
}

pub fn pixel_hash(pixel: Vector2i) -> u64 {
    ((pixel.x as u32 as u64) << 32) ^ (pixel.y as u32 as u64)
}
