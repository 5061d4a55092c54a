// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::computation_node::ComputationNode;
use crate::core::emission::Emission;
use crate::core::texture::Texture;
use crate::math::constants::{Vector2f, Vector3f};
use crate::math::frame::Frame;
use crate::math::spectrum::RGBSpectrum;

pub struct LambertianEmission {
    emission: Arc<dyn Texture>,
}

impl LambertianEmission {
    pub fn new(emission: Arc<dyn Texture>) -> Self {
        Self { emission }
    }
}

impl ComputationNode for LambertianEmission {
    fn to_string(&self) -> String {
        format!("LambertianEmission: [ emission: {} ]", self.emission.to_string())
    }
}

impl Emission for LambertianEmission {
    fn eval(&self, uv: &Vector2f, wo: &Vector3f) -> RGBSpectrum {
        if Frame::cos_theta(wo) < 0.0 {
            return RGBSpectrum::black();
        }
        self.emission.eval(*uv)
    }
}
