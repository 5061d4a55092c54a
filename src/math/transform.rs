// Copyright 2020 @TwoCookingMice

use super::constants::{ Float, Vector3f, Vector4f, Matrix4f, PI };
use super::ray::Ray3f;

use nalgebra as na;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    matrix: Matrix4f,
    inv_matrix: Matrix4f
}

impl Default for Transform {
    fn default() -> Self {
        Self { matrix: Matrix4f::identity(),
               inv_matrix: Matrix4f::identity() }
    }
}

impl Transform {
    pub fn new(matrix: Matrix4f) -> Self {
        Self { matrix: matrix,
               inv_matrix: matrix.try_inverse().unwrap_or(Matrix4f::identity())}
    }

    pub fn translate(t: &Vector3f) -> Self {
        Self::new(Matrix4f::new_translation(t))
    }

    pub fn scale(s: &Vector3f) -> Self {
        Self::new(Matrix4f::new_nonuniform_scaling(s))
    }

    pub fn rotate(axis: &Vector3f, angle_degrees: Float) -> Self {
        let axis = na::Unit::new_normalize(*axis);
        let rotation = na::Rotation3::from_axis_angle(&axis, angle_degrees * PI / 180.0);
        Self::new(rotation.to_homogeneous())
    }

    // Camera-style look-at: local +z points from origin to target, local +x
    // to the viewer's right and +y up.
    pub fn look_at(origin: &Vector3f, target: &Vector3f, up: &Vector3f) -> Self {
        let forward = (target - origin).normalize();
        let right = forward.cross(up).normalize();
        let new_up = right.cross(&forward);

        let mut matrix = Matrix4f::identity();
        for idx in 0..3 {
            matrix[(idx, 0)] = right[idx];
            matrix[(idx, 1)] = new_up[idx];
            matrix[(idx, 2)] = forward[idx];
            matrix[(idx, 3)] = origin[idx];
        }
        Self::new(matrix)
    }

    pub fn then(&self, other: &Transform) -> Self {
        Self { matrix: other.matrix * self.matrix,
               inv_matrix: self.inv_matrix * other.inv_matrix }
    }

    pub fn matrix(&self) -> &Matrix4f {
        &self.matrix
    }

    pub fn apply_point(&self, p: Vector3f) -> Vector3f {
        let h = self.matrix * Vector4f::new(p.x, p.y, p.z, 1.0);
        Vector3f::new(h.x / h.w, h.y / h.w, h.z / h.w)
    }

    pub fn apply_vector(&self, v: Vector3f) -> Vector3f {
        self.matrix.fixed_slice::<3, 3>(0, 0) * v
    }

    // Normal transformation is different from point transformation.
    // Before transformation, we have n^Tx = 0
    // After transformation, we have (Sn)^T(Mx) = 0
    // Then, we will get: S = (M^{-1})^T
    pub fn apply_normal(&self, n: Vector3f) -> Vector3f {
        self.inv_matrix.fixed_slice::<3, 3>(0, 0).transpose() * n
    }

    pub fn apply_ray(&self, ray: &Ray3f) -> Ray3f {
        let new_p = self.apply_point(ray.origin());
        let new_d = self.apply_vector(ray.dir());

        Ray3f::new_unnormalized(new_p, new_d)
    }

    pub fn inv_apply_point(&self, p: Vector3f) -> Vector3f {
        let h = self.inv_matrix * Vector4f::new(p.x, p.y, p.z, 1.0);
        Vector3f::new(h.x / h.w, h.y / h.w, h.z / h.w)
    }

    pub fn inv_apply_vector(&self, v: Vector3f) -> Vector3f {
        self.inv_matrix.fixed_slice::<3, 3>(0, 0) * v
    }

    pub fn inv_apply_ray(&self, ray: &Ray3f) -> Ray3f {
        let new_p = self.inv_apply_point(ray.origin());
        let new_d = self.inv_apply_vector(ray.dir());

        Ray3f::new_unnormalized(new_p, new_d)
    }
}
