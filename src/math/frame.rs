// Copyright @yucwang 2023

use crate::math::constants::{ Float, Vector3f };

// Orthonormal shading frame. In local coordinates the normal is the `z`
// axis, so `cos_theta(w) == w.z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub tangent: Vector3f,
    pub bitangent: Vector3f,
    pub normal: Vector3f
}

impl Default for Frame {
    fn default() -> Self {
        Frame {
            tangent: Vector3f::new(1.0, 0.0, 0.0),
            bitangent: Vector3f::new(0.0, 1.0, 0.0),
            normal: Vector3f::new(0.0, 0.0, 1.0)
        }
    }
}

impl Frame {
    pub fn new(tangent: Vector3f, bitangent: Vector3f, normal: Vector3f) -> Frame {
        Frame { tangent, bitangent, normal }
    }

    pub fn from_normal(n: Vector3f) -> Frame {
        let up = if n.z.abs() < 0.999 {
            Vector3f::new(0.0, 0.0, 1.0)
        } else {
            Vector3f::new(1.0, 0.0, 0.0)
        };
        let tangent = n.cross(&up).normalize();
        let bitangent = n.cross(&tangent).normalize();
        Frame { tangent, bitangent, normal: n }
    }

    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.tangent), v.dot(&self.bitangent), v.dot(&self.normal))
    }

    pub fn to_world(&self, v: &Vector3f) -> Vector3f {
        self.tangent * v.x + self.bitangent * v.y + self.normal * v.z
    }

    pub fn cos_theta(w: &Vector3f) -> Float {
        w.z
    }

    pub fn abs_cos_theta(w: &Vector3f) -> Float {
        w.z.abs()
    }

    pub fn cos_theta2(w: &Vector3f) -> Float {
        w.z * w.z
    }

    pub fn sin_theta2(w: &Vector3f) -> Float {
        (1.0 - Self::cos_theta2(w)).max(0.0)
    }

    pub fn tan_theta(w: &Vector3f) -> Float {
        Self::sin_theta2(w).sqrt() / w.z
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;
    use crate::math::constants::Vector3f;

    #[test]
    fn test_frame_round_trip() {
        let n = Vector3f::new(0.3, -0.5, 0.8).normalize();
        let frame = Frame::from_normal(n);
        assert!(frame.tangent.dot(&frame.normal).abs() < 1e-5);
        assert!(frame.bitangent.dot(&frame.normal).abs() < 1e-5);
        assert!(frame.tangent.dot(&frame.bitangent).abs() < 1e-5);

        let v = Vector3f::new(0.1, 0.7, -0.2);
        let back = frame.to_world(&frame.to_local(&v));
        assert!((back - v).norm() < 1e-5);
        assert!((frame.to_local(&n).z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_frame_from_pole_normal() {
        let frame = Frame::from_normal(Vector3f::new(0.0, 0.0, -1.0));
        assert!((frame.tangent.norm() - 1.0).abs() < 1e-5);
        assert!((frame.bitangent.norm() - 1.0).abs() < 1e-5);
    }
}
