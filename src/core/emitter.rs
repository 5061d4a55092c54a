// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::computation_node::ComputationNode;
use crate::core::sampler::Sampler;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectLightSample {
    pub wi: Vector3f,
    pub weight: RGBSpectrum,
    pub distance: Float,
}

impl DirectLightSample {
    pub fn invalid() -> Self {
        Self { wi: Vector3f::zeros(), weight: RGBSpectrum::black(), distance: 0.0 }
    }

    pub fn is_invalid(&self) -> bool {
        self.weight.is_black()
    }
}

#[derive(Clone)]
pub struct LightSample {
    pub light: Arc<dyn Emitter>,
    pub probability: Float,
}

pub trait Emitter: ComputationNode + Send + Sync {
    fn sample_direct(&self, origin: &Vector3f, rng: &mut dyn Sampler) -> DirectLightSample;
    // Whether rays can hit this light, in which case its contribution is
    // already collected through surface emission.
    fn can_be_intersected(&self) -> bool;
}

pub trait Background: ComputationNode + Send + Sync {
    fn eval(&self, direction: &Vector3f) -> RGBSpectrum;
}
