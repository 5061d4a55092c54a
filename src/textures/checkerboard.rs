// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::texture::Texture;
use crate::math::constants::Vector2f;
use crate::math::spectrum::RGBSpectrum;

pub struct CheckerboardTexture {
    color0: RGBSpectrum,
    color1: RGBSpectrum,
    scale: Vector2f,
}

impl CheckerboardTexture {
    pub fn new(color0: RGBSpectrum, color1: RGBSpectrum, scale: Vector2f) -> Self {
        Self { color0, color1, scale }
    }
}

impl ComputationNode for CheckerboardTexture {
    fn to_string(&self) -> String {
        format!("CheckerboardTexture: [ scale: ({}, {}) ]", self.scale.x, self.scale.y)
    }
}

impl Texture for CheckerboardTexture {
    fn eval(&self, uv: Vector2f) -> RGBSpectrum {
        let cu = (uv.x * self.scale.x).floor() as i64;
        let cv = (uv.y * self.scale.y).floor() as i64;
        if (cu + cv).rem_euclid(2) == 1 {
            self.color1
        } else {
            self.color0
        }
    }
}
