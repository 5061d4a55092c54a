// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::texture::Texture;
use crate::math::constants::{Float, Vector2f};
use crate::math::spectrum::RGBSpectrum;

pub struct ConstantTexture {
    value: RGBSpectrum,
}

impl ConstantTexture {
    pub fn new(value: RGBSpectrum) -> Self {
        Self { value }
    }

    pub fn from_float(value: Float) -> Self {
        Self { value: RGBSpectrum::splat(value) }
    }
}

impl ComputationNode for ConstantTexture {
    fn to_string(&self) -> String {
        format!("ConstantTexture: [ value: {:?} ]", self.value.to_vector().as_slice())
    }
}

impl Texture for ConstantTexture {
    fn eval(&self, _uv: Vector2f) -> RGBSpectrum {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::ConstantTexture;
    use crate::core::texture::Texture;
    use crate::math::constants::Vector2f;
    use crate::math::spectrum::RGBSpectrum;

    #[test]
    fn test_constant_texture_eval() {
        let value = RGBSpectrum::new(0.25, 0.5, 0.75);
        let tex = ConstantTexture::new(value);
        let result = tex.eval(Vector2f::new(0.1, 0.9));
        assert_eq!(result, value);
        assert!((tex.scalar(Vector2f::new(0.3, 0.3)) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_constant_texture_from_float() {
        let tex = ConstantTexture::from_float(0.3);
        assert_eq!(tex.eval(Vector2f::zeros()), RGBSpectrum::splat(0.3));
    }
}
