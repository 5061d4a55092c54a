// Copyright @yucwang 2023

use std::sync::Arc;

use crate::core::bsdf::{BSDFEval, BSDFSample, BSDF};
use crate::core::computation_node::ComputationNode;
use crate::core::sampler::Sampler;
use crate::core::texture::Texture;
use crate::math::constants::{ INV_PI, Vector2f, Vector3f };
use crate::math::frame::Frame;
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::sample_cosine_hemisphere;

pub struct DiffuseBSDF {
    albedo: Arc<dyn Texture>,
}

impl DiffuseBSDF {
    pub fn new(albedo: Arc<dyn Texture>) -> Self {
        Self { albedo }
    }
}

impl ComputationNode for DiffuseBSDF {
    fn to_string(&self) -> String {
        format!("DiffuseBSDF: [ albedo: {} ]", self.albedo.to_string())
    }
}

impl BSDF for DiffuseBSDF {
    fn eval(&self, uv: &Vector2f, _wo: &Vector3f, wi: &Vector3f) -> BSDFEval {
        let cos_theta = Frame::cos_theta(wi);
        if cos_theta <= 0.0 {
            return BSDFEval::new(RGBSpectrum::black());
        }
        BSDFEval::new(self.albedo.eval(*uv) * (cos_theta * INV_PI))
    }

    // Cosine sampling cancels the cosine and 1/pi of eval.
    fn sample(&self, uv: &Vector2f, _wo: &Vector3f, rng: &mut dyn Sampler) -> BSDFSample {
        let wi = sample_cosine_hemisphere(&rng.next_2d());
        BSDFSample::new(wi, self.albedo.eval(*uv))
    }

    fn albedo(&self, uv: &Vector2f) -> RGBSpectrum {
        self.albedo.eval(*uv)
    }
}
