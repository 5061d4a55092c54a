// Copyright @yucwang 2023

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::SurfaceIntersection;
use crate::core::sampler::Sampler;
use crate::math::ray::Ray3f;

pub trait Shape: ComputationNode + Send + Sync {
    /// Tests the ray against the shape in its local space. A hit is only
    /// recorded when `EPSILON <= t < its.t`; on success the shape writes
    /// `t`, position, frame, uv and area pdf into `its` and returns true.
    fn intersect(&self, ray: &Ray3f, its: &mut SurfaceIntersection<'_>, rng: &mut dyn Sampler) -> bool;
}
