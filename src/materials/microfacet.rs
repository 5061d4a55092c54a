// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f, Vector3f, PI};
use crate::math::frame::Frame;
use crate::math::spectrum::RGBSpectrum;

pub fn roughness_to_alpha(roughness: Float) -> Float {
    (roughness * roughness).max(1e-3)
}

pub fn ggx_d(alpha: Float, wh: &Vector3f) -> Float {
    let cos2_theta = Frame::cos_theta(wh) * Frame::cos_theta(wh);
    let a2 = alpha * alpha;
    let t = 1.0 + (a2 - 1.0) * cos2_theta;
    a2 / (PI * t * t)
}

pub fn smith_g1(alpha: Float, wh: &Vector3f, w: &Vector3f) -> Float {
    if w.dot(wh) * Frame::cos_theta(w) * Frame::cos_theta(wh) <= 0.0 {
        return 0.0;
    }
    let tan_theta = Frame::tan_theta(w).abs();
    if tan_theta == 0.0 {
        return 1.0;
    }
    let root = alpha * tan_theta;
    2.0 / (1.0 + (1.0 + root * root).sqrt())
}

// Heitz 2018, sampling the distribution of normals visible from `wo`.
// A `wo` below the surface is mirrored, so is the returned normal.
pub fn sample_ggx_vndf(alpha: Float, wo: &Vector3f, u: &Vector2f) -> Vector3f {
    let sign: Float = if wo.z < 0.0 { -1.0 } else { 1.0 };
    let wo = Vector3f::new(wo.x, wo.y, wo.z * sign);
    let vh = Vector3f::new(alpha * wo.x, alpha * wo.y, wo.z).normalize();

    let len2 = vh.x * vh.x + vh.y * vh.y;
    let t1 = if len2 > 0.0 {
        Vector3f::new(-vh.y, vh.x, 0.0) / len2.sqrt()
    } else {
        Vector3f::new(1.0, 0.0, 0.0)
    };
    let t2 = vh.cross(&t1);

    let r = u.x.sqrt();
    let phi = 2.0 * PI * u.y;
    let p1 = r * phi.cos();
    let mut p2 = r * phi.sin();
    let s = 0.5 * (1.0 + vh.z);
    p2 = (1.0 - s) * (1.0 - p1 * p1).max(0.0).sqrt() + s * p2;

    let nh = t1 * p1 + t2 * p2 + vh * (1.0 - p1 * p1 - p2 * p2).max(0.0).sqrt();
    let m = Vector3f::new(alpha * nh.x, alpha * nh.y, nh.z.max(0.0)).normalize();
    Vector3f::new(m.x, m.y, m.z * sign)
}

pub fn pdf_ggx_vndf(alpha: Float, wo: &Vector3f, wh: &Vector3f) -> Float {
    let cos_o = Frame::abs_cos_theta(wo);
    if cos_o == 0.0 {
        return 0.0;
    }
    let wh_up = Vector3f::new(wh.x, wh.y, wh.z.abs());
    let wo_up = Vector3f::new(wo.x, wo.y, wo.z.abs());
    ggx_d(alpha, &wh_up) * smith_g1(alpha, &wh_up, &wo_up) * wo_up.dot(&wh_up).abs() / cos_o
}

pub fn reflect(w: &Vector3f, n: &Vector3f) -> Vector3f {
    2.0 * w.dot(n) * n - w
}

// Vector-form Snell's law; `eta` is the ratio of the IOR on the far side
// over the IOR on the side of `w`. Returns the zero vector for total
// internal reflection.
pub fn refract(w: &Vector3f, n: &Vector3f, eta: Float) -> Vector3f {
    let inv_eta = 1.0 / eta;
    let cos_i = w.dot(n);
    let k = 1.0 - inv_eta * inv_eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return Vector3f::zeros();
    }
    (inv_eta * cos_i - k.sqrt()) * n - inv_eta * w
}

pub fn fresnel_dielectric(cos_theta_i: Float, eta: Float) -> Option<Float> {
    let cos_i = cos_theta_i.abs().min(1.0);
    let inv_eta = 1.0 / eta;
    let cos2_t = 1.0 - inv_eta * inv_eta * (1.0 - cos_i * cos_i);
    if cos2_t <= 0.0 {
        return None;
    }
    let cos_t = cos2_t.sqrt();
    let rs = (cos_i - eta * cos_t) / (cos_i + eta * cos_t);
    let rp = (eta * cos_i - cos_t) / (eta * cos_i + cos_t);
    Some(0.5 * (rs * rs + rp * rp))
}

pub fn schlick(f0: Float, cos_theta: Float) -> Float {
    let cos_theta = cos_theta.clamp(0.0, 1.0);
    f0 + (1.0 - f0) * (1.0 - cos_theta).powi(5)
}

pub fn fresnel_schlick(f0: RGBSpectrum, cos_theta: Float) -> RGBSpectrum {
    let weight = (1.0 - cos_theta.clamp(0.0, 1.0)).powi(5);
    f0 + (RGBSpectrum::white() - f0) * weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Pcg32;

    fn assert_close(a: Float, b: Float, tol: Float) {
        assert!((a - b).abs() < tol, "expected {} ≈ {}", a, b);
    }

    #[test]
    fn test_fresnel_normal_incidence() {
        let expected = ((1.0 - 1.5) / (1.0 + 1.5) as Float).powi(2);
        assert_close(fresnel_dielectric(1.0, 1.5).unwrap(), expected, 1e-6);
        assert_close(fresnel_dielectric(1.0, 1.0 / 1.5).unwrap(), expected, 1e-6);
    }

    #[test]
    fn test_fresnel_total_internal_reflection() {
        assert!(fresnel_dielectric(0.1, 1.0 / 1.5).is_none());
        assert!(fresnel_dielectric(0.1, 1.5).is_some());
    }

    #[test]
    fn test_reflect_refract() {
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let w = Vector3f::new(0.6, 0.0, 0.8);
        let r = reflect(&w, &n);
        assert_close(r.x, -0.6, 1e-6);
        assert_close(r.z, 0.8, 1e-6);

        let t = refract(&w, &n, 1.5);
        assert_close(t.norm(), 1.0, 1e-5);
        assert!(t.z < 0.0);
        // sin_t = sin_i / eta
        assert_close(-t.x, 0.6 / 1.5, 1e-5);

        let grazing = Vector3f::new(0.95, 0.0, (1.0 - 0.95 * 0.95 as Float).sqrt());
        assert_eq!(refract(&grazing, &n, 1.0 / 1.5), Vector3f::zeros());
    }

    #[test]
    fn test_ggx_d_normalized() {
        // Integral of D(wh) cos(wh) over the hemisphere is one.
        let alpha = 0.3;
        let mut rng = Pcg32::new(3, 5);
        let n = 200_000;
        let mut sum = 0.0f64;
        for _ in 0..n {
            let z = rng.next_f32();
            let phi = 2.0 * PI * rng.next_f32();
            let r = (1.0 - z * z).max(0.0).sqrt();
            let wh = Vector3f::new(r * phi.cos(), r * phi.sin(), z);
            sum += (ggx_d(alpha, &wh) * z * 2.0 * PI) as f64;
        }
        assert_close((sum / n as f64) as Float, 1.0, 0.05);
    }

    #[test]
    fn test_ggx_d_mirrored_normal() {
        let wh = Vector3f::new(0.2, -0.3, 0.9).normalize();
        let below = Vector3f::new(wh.x, wh.y, -wh.z);
        assert!(ggx_d(0.25, &wh) > 0.0);
        assert_close(ggx_d(0.25, &below), ggx_d(0.25, &wh), 1e-6);
    }

    #[test]
    fn test_vndf_sample_visible() {
        let mut rng = Pcg32::new(9, 1);
        let wo = Vector3f::new(0.3, -0.2, 0.9).normalize();
        for _ in 0..1000 {
            let u = Vector2f::new(rng.next_f32(), rng.next_f32());
            let m = sample_ggx_vndf(0.5, &wo, &u);
            assert_close(m.norm(), 1.0, 1e-4);
            assert!(m.z >= 0.0);
            assert!(wo.dot(&m) >= -1e-4);

            let below = Vector3f::new(wo.x, wo.y, -wo.z);
            let mb = sample_ggx_vndf(0.5, &below, &u);
            assert!(mb.z <= 0.0);
        }
    }

    #[test]
    fn test_smith_g1_limits() {
        let up = Vector3f::new(0.0, 0.0, 1.0);
        assert_close(smith_g1(0.5, &up, &up), 1.0, 1e-6);
        let w = Vector3f::new(0.6, 0.0, 0.8);
        let g = smith_g1(0.5, &up, &w);
        assert!(g > 0.0 && g < 1.0);
        let tilted = Vector3f::new(0.6, 0.0, 0.8);
        let below = Vector3f::new(0.9, 0.0, -0.1).normalize();
        assert_eq!(smith_g1(0.5, &tilted, &below), 0.0);
    }

    #[test]
    fn test_schlick() {
        assert_close(schlick(0.04, 1.0), 0.04, 1e-6);
        assert_close(schlick(0.04, 0.0), 1.0, 1e-6);
        assert_close(schlick(0.04, 2.0), 0.04, 1e-6);
    }
}
