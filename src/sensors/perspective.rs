// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::sampler::Sampler;
use crate::core::sensor::{CameraSample, Sensor};
use crate::math::constants::{Float, Vector2f, Vector2i, Vector3f, PI};
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::math::transform::Transform;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FovAxis {
    X,
    Y,
}

pub fn image_plane_scale(fov_degrees: Float, axis: FovAxis, resolution: Vector2i) -> Vector2f {
    let tan_half = (0.5 * fov_degrees * PI / 180.0).tan();
    let aspect = resolution.x as Float / resolution.y as Float;
    match axis {
        FovAxis::X => Vector2f::new(tan_half, tan_half / aspect),
        FovAxis::Y => Vector2f::new(tan_half * aspect, tan_half),
    }
}

pub struct PerspectiveCamera {
    resolution: Vector2i,
    scale: Vector2f,
    to_world: Transform,
}

impl PerspectiveCamera {
    pub fn new(resolution: Vector2i, fov_degrees: Float, fov_axis: FovAxis, to_world: Transform) -> Self {
        Self { resolution,
               scale: image_plane_scale(fov_degrees, fov_axis, resolution),
               to_world }
    }
}

impl ComputationNode for PerspectiveCamera {
    fn to_string(&self) -> String {
        format!("PerspectiveCamera: [ width: {}, height: {} ]", self.resolution.x, self.resolution.y)
    }
}

impl Sensor for PerspectiveCamera {
    fn sample(&self, normalized: &Vector2f, _rng: &mut dyn Sampler) -> CameraSample {
        let dir = Vector3f::new(normalized.x * self.scale.x, normalized.y * self.scale.y, 1.0);
        let local = Ray3f::new(Vector3f::zeros(), dir);
        CameraSample { ray: self.to_world.apply_ray(&local).normalized(),
                       weight: RGBSpectrum::white() }
    }

    fn resolution(&self) -> Vector2i {
        self.resolution
    }
}
