// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::sampler::Sampler;
use crate::core::sensor::{CameraSample, Sensor};
use crate::math::constants::{Float, Vector2f, Vector2i, Vector3f};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::math::transform::Transform;
use crate::math::warp::sample_uniform_disk_concentric;
use crate::sensors::perspective::{image_plane_scale, FovAxis};

pub struct ThinLensCamera {
    resolution: Vector2i,
    scale: Vector2f,
    radius: Float,
    focal_distance: Float,
    to_world: Transform,
}

impl ThinLensCamera {
    pub fn new(resolution: Vector2i,
               fov_degrees: Float,
               fov_axis: FovAxis,
               radius: Float,
               focal_distance: Float,
               to_world: Transform) -> Self {
        Self { resolution,
               scale: image_plane_scale(fov_degrees, fov_axis, resolution),
               radius,
               focal_distance,
               to_world }
    }
}

impl ComputationNode for ThinLensCamera {
    fn to_string(&self) -> String {
        format!("ThinLensCamera: [ width: {}, height: {}, radius: {}, focalDistance: {} ]",
                self.resolution.x, self.resolution.y, self.radius, self.focal_distance)
    }
}

impl Sensor for ThinLensCamera {
    fn sample(&self, normalized: &Vector2f, rng: &mut dyn Sampler) -> CameraSample {
        let lens = sample_uniform_disk_concentric(&rng.next_2d()) * self.radius;
        let focus = Vector3f::new(normalized.x * self.scale.x,
                                  normalized.y * self.scale.y,
                                  1.0) * self.focal_distance;
        let origin = Vector3f::new(lens.x, lens.y, 0.0);
        let local = Ray3f::new(origin, focus - origin);
        CameraSample { ray: self.to_world.apply_ray(&local).normalized(),
                       weight: RGBSpectrum::white() }
    }

    fn resolution(&self) -> Vector2i {
        self.resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samplers::independent::IndependentSampler;

    #[test]
    fn test_thinlens_rays_converge_on_focal_plane() {
        let cam = ThinLensCamera::new(Vector2i::new(64, 64), 60.0, FovAxis::Y, 0.5, 4.0, Transform::default());
        let mut rng = IndependentSampler::new(1337, 1);
        rng.seed(0);
        let normalized = Vector2f::new(0.3, -0.2);

        let first = cam.sample(&normalized, &mut rng).ray;
        let focus = first.at(4.0 / first.dir().z - first.origin().z / first.dir().z);
        for _ in 0..16 {
            let ray = cam.sample(&normalized, &mut rng).ray;
            let t = (4.0 - ray.origin().z) / ray.dir().z;
            assert!((ray.at(t) - focus).norm() < 1e-4);
            assert!(ray.origin().z.abs() < 1e-6);
            assert!(ray.origin().xy().norm() <= 0.5 + 1e-5);
        }
    }

    #[test]
    fn test_thinlens_zero_radius_matches_pinhole() {
        use crate::sensors::perspective::PerspectiveCamera;
        let thin = ThinLensCamera::new(Vector2i::new(32, 16), 45.0, FovAxis::X, 0.0, 2.0, Transform::default());
        let pinhole = PerspectiveCamera::new(Vector2i::new(32, 16), 45.0, FovAxis::X, Transform::default());
        let mut rng = IndependentSampler::new(1337, 1);
        let n = Vector2f::new(-0.7, 0.4);
        let a = thin.sample(&n, &mut rng).ray.dir();
        let b = pinhole.sample(&n, &mut rng).ray.dir();
        assert!((a - b).norm() < 1e-5);
    }
}
