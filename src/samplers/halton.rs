// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::rng::Pcg32;
use crate::core::sampler::{pixel_hash, Sampler};
use crate::math::constants::{Float, Vector2i, ONE_MINUS_EPSILON};

const PRIMES: [u32; 64] = [
      2,   3,   5,   7,  11,  13,  17,  19,  23,  29,  31,  37,  41,  43,  47,  53,
     59,  61,  67,  71,  73,  79,  83,  89,  97, 101, 103, 107, 109, 113, 127, 131,
    137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193, 197, 199, 211, 223,
    227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307, 311,
];

pub fn radical_inverse(mut index: u32, base: u32) -> f64 {
    let inv_base = 1.0 / base as f64;
    let mut inv_base_n = inv_base;
    let mut reversed = 0.0f64;
    while index > 0 {
        let digit = index % base;
        reversed += digit as f64 * inv_base_n;
        index /= base;
        inv_base_n *= inv_base;
    }
    reversed
}

// Every `next()` moves to the next prime base; the rotation offsets come
// from a PCG32 stream selected by the pixel, so neighbouring pixels see
// decorrelated shifts of the same sequence. Once the prime table runs out
// the remaining dimensions are plain PCG32 numbers.
#[derive(Debug, Clone)]
pub struct HaltonSampler {
    seed: u64,
    samples_per_pixel: u32,
    sample_index: u32,
    dimension: usize,
    rng: Pcg32,
}

impl HaltonSampler {
    pub fn new(seed: u64, samples_per_pixel: u32) -> Self {
        Self { seed,
               samples_per_pixel,
               sample_index: 0,
               dimension: 0,
               rng: Pcg32::new(seed, 0) }
    }
}

impl ComputationNode for HaltonSampler {
    fn to_string(&self) -> String {
        format!("HaltonSampler: [ count: {}, seed: {} ]", self.samples_per_pixel, self.seed)
    }
}

impl Sampler for HaltonSampler {
    fn seed(&mut self, sample_index: u32) {
        self.sample_index = sample_index;
        self.dimension = 0;
        self.rng.seed(self.seed, 0);
    }

    fn seed_pixel(&mut self, pixel: Vector2i, sample_index: u32) {
        self.sample_index = sample_index;
        self.dimension = 0;
        self.rng.seed(self.seed, pixel_hash(pixel));
    }

    fn next(&mut self) -> Float {
        let offset = self.rng.next_f32() as f64;
        let Some(&base) = PRIMES.get(self.dimension) else {
            return offset as Float;
        };
        self.dimension += 1;

        let value = (radical_inverse(self.sample_index, base) + offset).fract();
        (value as Float).min(ONE_MINUS_EPSILON)
    }

    fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    fn clone_box(&self) -> Box<dyn Sampler> {
        Box::new(self.clone())
    }
}
