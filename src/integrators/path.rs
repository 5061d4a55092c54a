// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::integrator::{next_event_estimation, Integrator};
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

pub struct PathIntegrator {
    max_depth: u32,
}

impl PathIntegrator {
    pub fn new(max_depth: u32) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

impl ComputationNode for PathIntegrator {
    fn to_string(&self) -> String {
        format!("PathIntegrator: [ depth: {} ]", self.max_depth)
    }
}

impl Integrator for PathIntegrator {
    fn li(&self, scene: &Scene, ray: &Ray3f, rng: &mut dyn Sampler) -> RGBSpectrum {
        let mut radiance = RGBSpectrum::black();
        let mut throughput = RGBSpectrum::white();
        let mut ray = *ray;

        for depth in 0..self.max_depth {
            let its = match scene.intersect(&ray, rng) {
                Some(its) => its,
                None => {
                    radiance += throughput * scene.evaluate_background(&ray.dir());
                    break;
                }
            };

            radiance += throughput * its.evaluate_emission();
            if depth + 1 == self.max_depth {
                break;
            }

            if scene.has_lights() {
                radiance += throughput * next_event_estimation(scene, &its, rng);
            }

            let sample = its.sample_bsdf(rng);
            if sample.is_invalid() {
                break;
            }
            throughput *= sample.weight;
            ray = Ray3f::new(its.position, sample.wi);
        }

        radiance
    }
}
