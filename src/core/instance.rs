// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::bsdf::BSDF;
use crate::core::computation_node::ComputationNode;
use crate::core::emission::Emission;
use crate::core::interaction::SurfaceIntersection;
use crate::core::sampler::Sampler;
use crate::core::shape::Shape;
use crate::math::frame::Frame;
use crate::math::ray::Ray3f;
use crate::math::transform::Transform;

pub struct Instance {
    shape: Arc<dyn Shape>,
    bsdf: Option<Arc<dyn BSDF>>,
    emission: Option<Arc<dyn Emission>>,
    to_world: Option<Transform>,
    flip_normal: bool,
}

impl Instance {
    pub fn new(shape: Arc<dyn Shape>) -> Self {
        Self { shape, bsdf: None, emission: None, to_world: None, flip_normal: false }
    }

    pub fn with_bsdf(mut self, bsdf: Arc<dyn BSDF>) -> Self {
        self.bsdf = Some(bsdf);
        self
    }

    pub fn with_emission(mut self, emission: Arc<dyn Emission>) -> Self {
        self.emission = Some(emission);
        self
    }

    pub fn with_transform(mut self, to_world: Transform) -> Self {
        self.to_world = Some(to_world);
        self
    }

    pub fn with_flip_normal(mut self, flip_normal: bool) -> Self {
        self.flip_normal = flip_normal;
        self
    }

    pub fn bsdf(&self) -> Option<&dyn BSDF> {
        self.bsdf.as_deref()
    }

    pub fn emission(&self) -> Option<&dyn Emission> {
        self.emission.as_deref()
    }

    // Flipping both normal and bitangent keeps the frame right-handed.
    fn flip(&self, frame: &mut Frame) {
        if self.flip_normal {
            frame.normal = -frame.normal;
            frame.bitangent = -frame.bitangent;
        }
    }

    fn transform_frame(to_world: &Transform, frame: &Frame) -> Frame {
        let tangent = to_world.apply_vector(frame.tangent).normalize();
        let bitangent = to_world.apply_vector(frame.bitangent);
        let normal = tangent.cross(&bitangent).normalize();
        let bitangent = normal.cross(&tangent).normalize();
        Frame::new(tangent, bitangent, normal)
    }

    pub fn intersect<'a>(&'a self,
                         world_ray: &Ray3f,
                         its: &mut SurfaceIntersection<'a>,
                         rng: &mut dyn Sampler) -> bool {
        let to_world = match &self.to_world {
            Some(to_world) => to_world,
            None => {
                if !self.shape.intersect(world_ray, its, rng) {
                    return false;
                }
                self.flip(&mut its.frame);
                its.instance = Some(self);
                return true;
            }
        };

        let previous_t = its.t;
        let local_ray = to_world.inv_apply_ray(world_ray);
        let scale = local_ray.dir().norm();
        if scale == 0.0 {
            return false;
        }

        its.t = previous_t * scale;
        if !self.shape.intersect(&local_ray.normalized(), its, rng) {
            its.t = previous_t;
            return false;
        }

        its.t /= scale;
        its.position = to_world.apply_point(its.position);
        self.flip(&mut its.frame);
        its.frame = Self::transform_frame(to_world, &its.frame);
        its.instance = Some(self);
        true
    }
}

impl ComputationNode for Instance {
    fn to_string(&self) -> String {
        format!("Instance: [ shape: {}, bsdf: {}, emission: {}, transformed: {}, flip_normal: {} ]",
                self.shape.to_string(),
                self.bsdf.as_ref().map(|b| b.to_string()).unwrap_or_else(|| String::from("none")),
                self.emission.as_ref().map(|e| e.to_string()).unwrap_or_else(|| String::from("none")),
                self.to_world.is_some(),
                self.flip_normal)
    }
}
