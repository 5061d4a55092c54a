// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::bsdf::{BSDFEval, BSDFSample, BSDF};
use crate::core::computation_node::ComputationNode;
use crate::core::sampler::Sampler;
use crate::core::texture::Texture;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::frame::Frame;
use crate::math::spectrum::RGBSpectrum;
use crate::materials::microfacet::{ggx_d, reflect, roughness_to_alpha, sample_ggx_vndf, smith_g1};

pub(crate) fn eval_ggx_reflection(alpha: Float, color: RGBSpectrum, wo: &Vector3f, wi: &Vector3f) -> BSDFEval {
    let cos_o = Frame::abs_cos_theta(wo);
    let half = wi + wo;
    if cos_o == 0.0 || half.norm_squared() == 0.0 {
        return BSDFEval::new(RGBSpectrum::black());
    }
    let wh = half.normalize();
    let g = smith_g1(alpha, &wh, wo) * smith_g1(alpha, &wh, wi);
    BSDFEval::new(color * (g * ggx_d(alpha, &wh) / (4.0 * cos_o)))
}

pub(crate) fn sample_ggx_reflection(alpha: Float, color: RGBSpectrum, wo: &Vector3f, rng: &mut dyn Sampler) -> BSDFSample {
    let wh = sample_ggx_vndf(alpha, wo, &rng.next_2d());
    let wi = reflect(wo, &wh);
    BSDFSample::new(wi, color * smith_g1(alpha, &wh, &wi))
}

pub struct RoughConductorBSDF {
    reflectance: Arc<dyn Texture>,
    roughness: Arc<dyn Texture>,
}

impl ComputationNode for RoughConductorBSDF {
    fn to_string(&self) -> String {
        format!("RoughConductorBSDF: [ reflectance: {}, roughness: {} ]",
                self.reflectance.to_string(), self.roughness.to_string())
    }
}

impl RoughConductorBSDF {
    pub fn new(reflectance: Arc<dyn Texture>, roughness: Arc<dyn Texture>) -> Self {
        Self { reflectance, roughness }
    }

    pub fn alpha(&self, uv: &Vector2f) -> Float {
        roughness_to_alpha(self.roughness.scalar(*uv))
    }
}

impl BSDF for RoughConductorBSDF {
    fn eval(&self, uv: &Vector2f, wo: &Vector3f, wi: &Vector3f) -> BSDFEval {
        eval_ggx_reflection(self.alpha(uv), self.reflectance.eval(*uv), wo, wi)
    }

    fn sample(&self, uv: &Vector2f, wo: &Vector3f, rng: &mut dyn Sampler) -> BSDFSample {
        sample_ggx_reflection(self.alpha(uv), self.reflectance.eval(*uv), wo, rng)
    }

    fn albedo(&self, uv: &Vector2f) -> RGBSpectrum {
        self.reflectance.eval(*uv)
    }
}
