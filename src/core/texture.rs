// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::math::constants::{Float, Vector2f};
use crate::math::spectrum::RGBSpectrum;

pub trait Texture: ComputationNode + Send + Sync {
    fn eval(&self, uv: Vector2f) -> RGBSpectrum;

    fn scalar(&self, uv: Vector2f) -> Float {
        self.eval(uv).mean()
    }
}
