// Copyright @yucwang 2023

use crate::core::computation_node::ComputationNode;
use crate::core::sampler::Sampler;
use crate::math::constants::{ Vector2f, Vector3f };
use crate::math::spectrum::RGBSpectrum;

// Definitions of types used in BSDF sampling and eval
// processes.

// BSDF value with the foreshortening cosine already folded in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BSDFEval {
    pub value: RGBSpectrum,
    valid: bool,
}

impl BSDFEval {
    pub fn new(value: RGBSpectrum) -> Self {
        Self { value, valid: true }
    }

    /// Sentinel for directions no light-sampling strategy can produce
    /// (delta lobes). Its value is black.
    pub fn invalid() -> Self {
        Self { value: RGBSpectrum::black(), valid: false }
    }

    pub fn is_invalid(&self) -> bool {
        !self.valid
    }
}

impl Default for BSDFEval {
    fn default() -> Self {
        Self::new(RGBSpectrum::black())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BSDFSample {
    pub wi: Vector3f,
    pub weight: RGBSpectrum,
}

impl BSDFSample {
    pub fn new(wi: Vector3f, weight: RGBSpectrum) -> Self {
        Self { wi, weight }
    }

    pub fn invalid() -> Self {
        Self { wi: Vector3f::zeros(), weight: RGBSpectrum::black() }
    }

    pub fn is_invalid(&self) -> bool {
        self.weight.is_black()
    }

    pub fn sanitized(self) -> Self {
        let finite_dir = self.wi.iter().all(|c| c.is_finite());
        if !finite_dir || !self.weight.is_finite() || self.wi.norm_squared() == 0.0 {
            return Self::invalid();
        }
        Self { wi: self.wi, weight: self.weight.clamp_negative() }
    }
}

pub trait BSDF: ComputationNode + Send + Sync {
    fn eval(&self, uv: &Vector2f, wo: &Vector3f, wi: &Vector3f) -> BSDFEval;
    fn sample(&self, uv: &Vector2f, wo: &Vector3f, rng: &mut dyn Sampler) -> BSDFSample;
    fn albedo(&self, uv: &Vector2f) -> RGBSpectrum;
}
