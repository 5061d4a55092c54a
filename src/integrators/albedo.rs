// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::integrator::Integrator;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

pub struct AlbedoIntegrator;

impl AlbedoIntegrator {
    pub fn new() -> Self {
        Self
    }
}

impl ComputationNode for AlbedoIntegrator {
    fn to_string(&self) -> String {
        String::from("AlbedoIntegrator")
    }
}

impl Integrator for AlbedoIntegrator {
    fn li(&self, scene: &Scene, ray: &Ray3f, rng: &mut dyn Sampler) -> RGBSpectrum {
        match scene.intersect(ray, rng) {
            Some(its) => its.evaluate_albedo(),
            None => RGBSpectrum::black(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::core::instance::Instance;
    use crate::materials::diffuse::DiffuseBSDF;
    use crate::math::constants::Vector3f;
    use crate::samplers::independent::IndependentSampler;
    use crate::shapes::sphere::Sphere;
    use crate::textures::constant::ConstantTexture;

    #[test]
    fn test_albedo_first_hit() {
        let albedo = RGBSpectrum::new(0.7, 0.2, 0.1);
        let mut scene = Scene::new();
        scene.add_instance(Instance::new(Arc::new(Sphere::new()))
            .with_bsdf(Arc::new(DiffuseBSDF::new(Arc::new(ConstantTexture::new(albedo))))));
        let mut rng = IndependentSampler::new(1337, 1);

        let hit = Ray3f::new(Vector3f::new(0.0, 0.0, -3.0), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(AlbedoIntegrator::new().li(&scene, &hit, &mut rng), albedo);
        let miss = Ray3f::new(Vector3f::new(0.0, 3.0, -3.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(AlbedoIntegrator::new().li(&scene, &miss, &mut rng).is_black());
    }
}
