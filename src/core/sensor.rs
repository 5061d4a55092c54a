// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::sampler::Sampler;
use crate::math::constants::{Vector2f, Vector2i};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

pub struct CameraSample {
    pub ray: Ray3f,
    pub weight: RGBSpectrum,
}

pub trait Sensor: ComputationNode + Send + Sync {
    fn sample(&self, normalized: &Vector2f, rng: &mut dyn Sampler) -> CameraSample;
    fn resolution(&self) -> Vector2i;
}
