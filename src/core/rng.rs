// Copyright @yucwang 2026

use crate::math::constants::{Float, ONE_MINUS_EPSILON};

const PCG32_DEFAULT_STATE: u64 = 0x853c49e6748fea9b;
const PCG32_DEFAULT_STREAM: u64 = 0xda3e39cb94b95bdb;
const PCG32_MULT: u64 = 0x5851f42d4c957f2d;

#[derive(Debug, Clone, PartialEq)]
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Default for Pcg32 {
    fn default() -> Self {
        Self { state: PCG32_DEFAULT_STATE, inc: PCG32_DEFAULT_STREAM }
    }
}

impl Pcg32 {
    pub fn new(init_state: u64, init_seq: u64) -> Self {
        let mut rng = Self::default();
        rng.seed(init_state, init_seq);
        rng
    }

    pub fn seed(&mut self, init_state: u64, init_seq: u64) {
        self.state = 0;
        self.inc = (init_seq << 1) | 1;
        self.next_u32();
        self.state = self.state.wrapping_add(init_state);
        self.next_u32();
    }

    pub fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.state = old_state.wrapping_mul(PCG32_MULT).wrapping_add(self.inc);
        let xor_shifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xor_shifted.rotate_right(rot)
    }

    pub fn next_f32(&mut self) -> Float {
        let bits = (self.next_u32() >> 9) | 0x3f800000;
        (f32::from_bits(bits) - 1.0).min(ONE_MINUS_EPSILON)
    }
}
