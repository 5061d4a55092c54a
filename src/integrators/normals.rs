// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::integrator::Integrator;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::math::constants::Vector3f;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

pub struct NormalsIntegrator {
    remap: bool,
}

impl NormalsIntegrator {
    pub fn new(remap: bool) -> Self {
        Self { remap }
    }
}

impl ComputationNode for NormalsIntegrator {
    fn to_string(&self) -> String {
        format!("NormalsIntegrator: [ remap: {} ]", self.remap)
    }
}

impl Integrator for NormalsIntegrator {
    fn li(&self, scene: &Scene, ray: &Ray3f, rng: &mut dyn Sampler) -> RGBSpectrum {
        let normal = match scene.intersect(ray, rng) {
            Some(its) => its.frame.normal,
            None => Vector3f::zeros(),
        };
        if self.remap {
            return RGBSpectrum::from_vector(&((normal + Vector3f::new(1.0, 1.0, 1.0)) * 0.5));
        }
        RGBSpectrum::from_vector(&normal)
    }
}
