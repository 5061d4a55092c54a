// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::SurfaceIntersection;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

pub trait Integrator: ComputationNode + Send + Sync {
    fn li(&self, scene: &Scene, ray: &Ray3f, rng: &mut dyn Sampler) -> RGBSpectrum;
}

// One light-sampling estimate of the radiance reflected at `its` towards
// `its.wo`. Lights that rays can hit are skipped, their energy is picked up
// through emission instead.
pub fn next_event_estimation(scene: &Scene, its: &SurfaceIntersection<'_>, rng: &mut dyn Sampler) -> RGBSpectrum {
    let light_sample = match scene.sample_light(rng) {
        Some(sample) => sample,
        None => return RGBSpectrum::black(),
    };
    let direct = light_sample.light.sample_direct(&its.position, rng);
    if direct.is_invalid() || light_sample.light.can_be_intersected() {
        return RGBSpectrum::black();
    }

    let shadow_ray = Ray3f::new(its.position, direct.wi);
    if scene.is_occluded(&shadow_ray, direct.distance, rng) {
        return RGBSpectrum::black();
    }

    let eval = its.evaluate_bsdf(&direct.wi);
    eval.value * direct.weight / light_sample.probability
}
