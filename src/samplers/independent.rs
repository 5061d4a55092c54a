// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::rng::Pcg32;
use crate::core::sampler::{pixel_hash, Sampler};
use crate::math::constants::{Float, Vector2i};

#[derive(Debug, Clone)]
pub struct IndependentSampler {
    seed: u64,
    samples_per_pixel: u32,
    rng: Pcg32,
}

impl IndependentSampler {
    pub fn new(seed: u64, samples_per_pixel: u32) -> Self {
        Self { seed, samples_per_pixel, rng: Pcg32::new(seed, 0) }
    }
}

impl ComputationNode for IndependentSampler {
    fn to_string(&self) -> String {
        format!("IndependentSampler: [ count: {}, seed: {} ]", self.samples_per_pixel, self.seed)
    }
}

impl Sampler for IndependentSampler {
    fn seed(&mut self, sample_index: u32) {
        self.rng.seed(self.seed, sample_index as u64);
    }

    fn seed_pixel(&mut self, pixel: Vector2i, sample_index: u32) {
        self.rng.seed(self.seed, pixel_hash(pixel));
        let pixel_seed = self.rng.next_u32() as u64;
        self.rng.seed(pixel_seed, sample_index as u64);
    }

    fn next(&mut self) -> Float {
        self.rng.next_f32()
    }

    fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    fn clone_box(&self) -> Box<dyn Sampler> {
        Box::new(self.clone())
    }
}
