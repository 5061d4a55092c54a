// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::integrator::{next_event_estimation, Integrator};
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

pub struct DirectIntegrator;

impl DirectIntegrator {
    pub fn new() -> Self {
        Self
    }
}

impl ComputationNode for DirectIntegrator {
    fn to_string(&self) -> String {
        String::from("DirectIntegrator")
    }
}

impl Integrator for DirectIntegrator {
    fn li(&self, scene: &Scene, ray: &Ray3f, rng: &mut dyn Sampler) -> RGBSpectrum {
        let its = match scene.intersect(ray, rng) {
            Some(its) => its,
            None => return scene.evaluate_background(&ray.dir()),
        };

        let mut radiance = its.evaluate_emission();
        if scene.has_lights() {
            radiance += next_event_estimation(scene, &its, rng);
        }

        let sample = its.sample_bsdf(rng);
        if sample.is_invalid() {
            return radiance;
        }
        let bounce = Ray3f::new(its.position, sample.wi);
        let incoming = match scene.intersect(&bounce, rng) {
            Some(next) => next.evaluate_emission(),
            None => scene.evaluate_background(&bounce.dir()),
        };
        radiance + sample.weight * incoming
    }
}
