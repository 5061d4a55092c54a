// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::math::constants::{Vector2f, Vector3f};
use crate::math::spectrum::RGBSpectrum;

pub trait Emission: ComputationNode + Send + Sync {
    fn eval(&self, uv: &Vector2f, wo: &Vector3f) -> RGBSpectrum;
}
