// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::SurfaceIntersection;
use crate::core::sampler::Sampler;
use crate::core::shape::Shape;
use crate::math::constants::{EPSILON, INV_2PI, INV_4PI, INV_PI, Vector2f};
use crate::math::frame::Frame;
use crate::math::ray::Ray3f;

pub struct Sphere;

impl Sphere {
    pub fn new() -> Self {
        Self
    }
}

impl ComputationNode for Sphere {
    fn to_string(&self) -> String {
        String::from("Sphere")
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray3f, its: &mut SurfaceIntersection<'_>, _rng: &mut dyn Sampler) -> bool {
        let o = ray.origin();
        let d = ray.dir();

        let a = d.norm_squared();
        let b = 2.0 * d.dot(&o);
        let c = o.norm_squared() - 1.0;
        let discriminant = b * b - 4.0 * a * c;
        if a == 0.0 || discriminant < 0.0 {
            return false;
        }

        let root = discriminant.sqrt();
        let mut t = (-b - root) / (2.0 * a);
        if t < EPSILON {
            t = (-b + root) / (2.0 * a);
        }
        if t < EPSILON || t >= its.t {
            return false;
        }

        let normal = ray.at(t).normalize();
        its.t = t;
        its.position = normal;
        its.frame = Frame::from_normal(normal);
        its.uv = Vector2f::new(0.5 + (-normal.x).atan2(-normal.z) * INV_2PI,
                               0.5 + (-normal.y).clamp(-1.0, 1.0).asin() * INV_PI);
        its.pdf = INV_4PI;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::{INFINITY, Vector3f};
    use crate::samplers::independent::IndependentSampler;

    #[test]
    fn test_sphere_outside_hit() {
        let sphere = Sphere::new();
        let mut rng = IndependentSampler::new(1337, 1);
        let mut its = SurfaceIntersection::new(INFINITY);
        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, -3.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(sphere.intersect(&ray, &mut its, &mut rng));
        assert!((its.t - 2.0).abs() < 1e-5);
        assert!((its.frame.normal - Vector3f::new(0.0, 0.0, -1.0)).norm() < 1e-5);
        assert!((its.pdf - INV_4PI).abs() < 1e-7);
        assert!(its.uv.x >= 0.0 && its.uv.x <= 1.0 && its.uv.y >= 0.0 && its.uv.y <= 1.0);
    }

    #[test]
    fn test_sphere_inside_hit_uses_far_root() {
        let sphere = Sphere::new();
        let mut rng = IndependentSampler::new(1337, 1);
        let mut its = SurfaceIntersection::new(INFINITY);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0));
        assert!(sphere.intersect(&ray, &mut its, &mut rng));
        assert!((its.t - 1.0).abs() < 1e-5);
        assert!((its.uv.y - 0.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_miss_and_cutoff() {
        let sphere = Sphere::new();
        let mut rng = IndependentSampler::new(1337, 1);
        let mut its = SurfaceIntersection::new(INFINITY);
        let miss = Ray3f::new(Vector3f::new(0.0, 2.0, -3.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(!sphere.intersect(&miss, &mut its, &mut rng));

        let mut its = SurfaceIntersection::new(1.5);
        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, -3.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(!sphere.intersect(&ray, &mut its, &mut rng));
    }
}
