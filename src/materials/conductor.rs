// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::bsdf::{BSDFEval, BSDFSample, BSDF};
use crate::core::computation_node::ComputationNode;
use crate::core::sampler::Sampler;
use crate::core::texture::Texture;
use crate::math::constants::{Vector2f, Vector3f};
use crate::math::spectrum::RGBSpectrum;

pub struct ConductorBSDF {
    reflectance: Arc<dyn Texture>,
}

impl ConductorBSDF {
    pub fn new(reflectance: Arc<dyn Texture>) -> Self {
        Self { reflectance }
    }
}

impl ComputationNode for ConductorBSDF {
    fn to_string(&self) -> String {
        format!("ConductorBSDF: [ reflectance: {} ]", self.reflectance.to_string())
    }
}

impl BSDF for ConductorBSDF {
    fn eval(&self, _uv: &Vector2f, _wo: &Vector3f, _wi: &Vector3f) -> BSDFEval {
        BSDFEval::invalid()
    }

    fn sample(&self, uv: &Vector2f, wo: &Vector3f, _rng: &mut dyn Sampler) -> BSDFSample {
        BSDFSample::new(Vector3f::new(-wo.x, -wo.y, wo.z), self.reflectance.eval(*uv))
    }

    fn albedo(&self, uv: &Vector2f) -> RGBSpectrum {
        self.reflectance.eval(*uv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samplers::independent::IndependentSampler;
    use crate::textures::constant::ConstantTexture;

    #[test]
    fn test_conductor_mirror_sample() {
        let reflectance = RGBSpectrum::new(0.9, 0.7, 0.3);
        let bsdf = ConductorBSDF::new(Arc::new(ConstantTexture::new(reflectance)));
        let mut rng = IndependentSampler::new(1337, 1);
        let wo = Vector3f::new(0.3, -0.4, 0.866).normalize();
        let sample = bsdf.sample(&Vector2f::zeros(), &wo, &mut rng);
        assert_eq!(sample.wi, Vector3f::new(-wo.x, -wo.y, wo.z));
        assert_eq!(sample.weight, reflectance);
    }

    #[test]
    fn test_conductor_eval_invalid() {
        let bsdf = ConductorBSDF::new(Arc::new(ConstantTexture::from_float(1.0)));
        let uv = Vector2f::zeros();
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        for wi in [Vector3f::new(0.0, 0.0, 1.0), Vector3f::new(0.6, 0.0, 0.8), Vector3f::new(0.0, 0.6, -0.8)] {
            assert!(bsdf.eval(&uv, &wo, &wi).is_invalid());
        }
    }
}
