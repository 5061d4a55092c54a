// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::emitter::{Background, Emitter, LightSample};
use crate::core::instance::Instance;
use crate::core::interaction::SurfaceIntersection;
use crate::core::sampler::Sampler;
use crate::core::sensor::Sensor;
use crate::math::constants::{Float, INFINITY, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

pub struct Scene {
    instances: Vec<Instance>,
    lights: Vec<Arc<dyn Emitter>>,
    background: Option<Arc<dyn Background>>,
    camera: Option<Arc<dyn Sensor>>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            lights: Vec::new(),
            background: None,
            camera: None,
        }
    }

    pub fn add_instance(&mut self, instance: Instance) {
        self.instances.push(instance);
    }

    pub fn add_light(&mut self, light: Arc<dyn Emitter>) {
        self.lights.push(light);
    }

    pub fn set_background(&mut self, background: Arc<dyn Background>) {
        self.background = Some(background);
    }

    pub fn set_camera(&mut self, camera: Arc<dyn Sensor>) {
        self.camera = Some(camera);
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn lights(&self) -> &[Arc<dyn Emitter>] {
        &self.lights
    }

    pub fn camera(&self) -> Option<&Arc<dyn Sensor>> {
        self.camera.as_ref()
    }

    pub fn intersect(&self, ray: &Ray3f, rng: &mut dyn Sampler) -> Option<SurfaceIntersection<'_>> {
        let mut its = SurfaceIntersection::new(INFINITY);
        let mut hit = false;
        for instance in &self.instances {
            hit |= instance.intersect(ray, &mut its, rng);
        }
        if !hit {
            return None;
        }
        its.wo = -ray.dir();
        Some(its)
    }

    pub fn is_occluded(&self, ray: &Ray3f, max_distance: Float, rng: &mut dyn Sampler) -> bool {
        let mut its = SurfaceIntersection::new(max_distance);
        self.instances.iter().any(|instance| instance.intersect(ray, &mut its, rng))
    }

    pub fn has_lights(&self) -> bool {
        !self.lights.is_empty()
    }

    pub fn sample_light(&self, rng: &mut dyn Sampler) -> Option<LightSample> {
        if self.lights.is_empty() {
            return None;
        }
        let count = self.lights.len();
        let index = ((rng.next() * count as Float) as usize).min(count - 1);
        Some(LightSample { light: self.lights[index].clone(),
                           probability: 1.0 / count as Float })
    }

    pub fn evaluate_background(&self, direction: &Vector3f) -> RGBSpectrum {
        match &self.background {
            Some(background) => background.eval(direction),
            None => RGBSpectrum::black(),
        }
    }
}
