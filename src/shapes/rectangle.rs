// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::SurfaceIntersection;
use crate::core::sampler::Sampler;
use crate::core::shape::Shape;
use crate::math::constants::{EPSILON, Vector2f, Vector3f};
use crate::math::frame::Frame;
use crate::math::ray::Ray3f;

pub struct Rectangle;

impl Rectangle {
    pub fn new() -> Self {
        Self
    }
}

impl ComputationNode for Rectangle {
    fn to_string(&self) -> String {
        String::from("Rectangle")
    }
}

impl Shape for Rectangle {
    fn intersect(&self, ray: &Ray3f, its: &mut SurfaceIntersection<'_>, _rng: &mut dyn Sampler) -> bool {
        let dir = ray.dir();
        if dir.z == 0.0 {
            return false;
        }

        let t = -ray.origin().z / dir.z;
        if t < EPSILON || t >= its.t {
            return false;
        }

        let p = ray.at(t);
        if p.x.abs() > 1.0 || p.y.abs() > 1.0 {
            return false;
        }

        its.t = t;
        its.position = Vector3f::new(p.x, p.y, 0.0);
        its.uv = Vector2f::new(0.5 * (p.x + 1.0), 0.5 * (p.y + 1.0));
        its.frame = Frame::new(Vector3f::new(1.0, 0.0, 0.0),
                               Vector3f::new(0.0, 1.0, 0.0),
                               Vector3f::new(0.0, 0.0, 1.0));
        its.pdf = 0.25;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::INFINITY;
    use crate::samplers::independent::IndependentSampler;

    #[test]
    fn test_rectangle_hit_and_miss() {
        let rect = Rectangle::new();
        let mut rng = IndependentSampler::new(1337, 1);

        let mut its = SurfaceIntersection::new(INFINITY);
        let ray = Ray3f::new(Vector3f::new(0.5, -0.5, 2.0), Vector3f::new(0.0, 0.0, -1.0));
        assert!(rect.intersect(&ray, &mut its, &mut rng));
        assert!((its.t - 2.0).abs() < 1e-6);
        assert!((its.uv - Vector2f::new(0.75, 0.25)).norm() < 1e-6);
        assert_eq!(its.frame.normal, Vector3f::new(0.0, 0.0, 1.0));

        let mut its = SurfaceIntersection::new(INFINITY);
        let outside = Ray3f::new(Vector3f::new(1.5, 0.0, 2.0), Vector3f::new(0.0, 0.0, -1.0));
        assert!(!rect.intersect(&outside, &mut its, &mut rng));

        let mut its = SurfaceIntersection::new(1.0);
        assert!(!rect.intersect(&ray, &mut its, &mut rng));
    }
}
