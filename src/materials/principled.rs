// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::bsdf::{BSDFEval, BSDFSample, BSDF};
use crate::core::computation_node::ComputationNode;
use crate::core::sampler::Sampler;
use crate::core::texture::Texture;
use crate::math::constants::{Float, INV_PI, Vector2f, Vector3f};
use crate::math::frame::Frame;
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::sample_cosine_hemisphere;
use crate::materials::microfacet::{roughness_to_alpha, schlick};
use crate::materials::roughconductor::{eval_ggx_reflection, sample_ggx_reflection};

struct DiffuseLobe {
    color: RGBSpectrum,
}

impl DiffuseLobe {
    fn eval(&self, wi: &Vector3f) -> RGBSpectrum {
        let cos_theta = Frame::cos_theta(wi);
        if cos_theta <= 0.0 {
            return RGBSpectrum::black();
        }
        self.color * (cos_theta * INV_PI)
    }

    fn sample(&self, rng: &mut dyn Sampler) -> BSDFSample {
        BSDFSample::new(sample_cosine_hemisphere(&rng.next_2d()), self.color)
    }
}

struct MetallicLobe {
    alpha: Float,
    color: RGBSpectrum,
}

impl MetallicLobe {
    fn eval(&self, wo: &Vector3f, wi: &Vector3f) -> RGBSpectrum {
        eval_ggx_reflection(self.alpha, self.color, wo, wi).value
    }

    fn sample(&self, wo: &Vector3f, rng: &mut dyn Sampler) -> BSDFSample {
        sample_ggx_reflection(self.alpha, self.color, wo, rng)
    }
}

struct Combination {
    diffuse_selection_prob: Float,
    diffuse: DiffuseLobe,
    metallic: MetallicLobe,
}

pub struct PrincipledBSDF {
    base_color: Arc<dyn Texture>,
    roughness: Arc<dyn Texture>,
    metallic: Arc<dyn Texture>,
    specular: Arc<dyn Texture>,
}

impl PrincipledBSDF {
    pub fn new(base_color: Arc<dyn Texture>,
               roughness: Arc<dyn Texture>,
               metallic: Arc<dyn Texture>,
               specular: Arc<dyn Texture>) -> Self {
        Self { base_color, roughness, metallic, specular }
    }

    fn combine(&self, uv: &Vector2f, wo: &Vector3f) -> Combination {
        let base_color = self.base_color.eval(*uv);
        let alpha = roughness_to_alpha(self.roughness.scalar(*uv));
        let specular = self.specular.scalar(*uv);
        let metallic = self.metallic.scalar(*uv);
        let f = specular * schlick((1.0 - metallic) * 0.08, Frame::cos_theta(wo));

        let diffuse = DiffuseLobe { color: base_color * ((1.0 - f) * (1.0 - metallic)) };
        let metallic = MetallicLobe { alpha,
                                      color: RGBSpectrum::splat(f) + base_color * ((1.0 - f) * metallic) };

        let diffuse_albedo = diffuse.color.mean();
        let total_albedo = diffuse_albedo + metallic.color.mean();
        let diffuse_selection_prob = if total_albedo > 0.0 { diffuse_albedo / total_albedo } else { 1.0 };

        Combination { diffuse_selection_prob, diffuse, metallic }
    }
}

impl ComputationNode for PrincipledBSDF {
    fn to_string(&self) -> String {
        format!("PrincipledBSDF: [ baseColor: {}, roughness: {}, metallic: {}, specular: {} ]",
                self.base_color.to_string(), self.roughness.to_string(),
                self.metallic.to_string(), self.specular.to_string())
    }
}

impl BSDF for PrincipledBSDF {
    fn eval(&self, uv: &Vector2f, wo: &Vector3f, wi: &Vector3f) -> BSDFEval {
        let combination = self.combine(uv, wo);
        BSDFEval::new(combination.diffuse.eval(wi) + combination.metallic.eval(wo, wi))
    }

    fn sample(&self, uv: &Vector2f, wo: &Vector3f, rng: &mut dyn Sampler) -> BSDFSample {
        let combination = self.combine(uv, wo);
        let p = combination.diffuse_selection_prob;
        if rng.next() < p {
            let sample = combination.diffuse.sample(rng);
            return BSDFSample::new(sample.wi, sample.weight / p);
        }
        let sample = combination.metallic.sample(wo, rng);
        BSDFSample::new(sample.wi, sample.weight / (1.0 - p))
    }

    fn albedo(&self, uv: &Vector2f) -> RGBSpectrum {
        self.base_color.eval(*uv)
    }
}
