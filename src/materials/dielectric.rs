// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::bsdf::{BSDFEval, BSDFSample, BSDF};
use crate::core::computation_node::ComputationNode;
use crate::core::sampler::Sampler;
use crate::core::texture::Texture;
use crate::math::constants::{Vector2f, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::materials::microfacet::{fresnel_dielectric, refract};

pub struct DielectricBSDF {
    ior: Arc<dyn Texture>,
    reflectance: Arc<dyn Texture>,
    transmittance: Arc<dyn Texture>,
}

impl DielectricBSDF {
    pub fn new(ior: Arc<dyn Texture>,
               reflectance: Arc<dyn Texture>,
               transmittance: Arc<dyn Texture>) -> Self {
        Self { ior, reflectance, transmittance }
    }

    fn reflection(&self, uv: &Vector2f, wo: &Vector3f) -> BSDFSample {
        BSDFSample::new(Vector3f::new(-wo.x, -wo.y, wo.z), self.reflectance.eval(*uv))
    }
}

impl ComputationNode for DielectricBSDF {
    fn to_string(&self) -> String {
        format!("DielectricBSDF: [ ior: {}, reflectance: {}, transmittance: {} ]",
                self.ior.to_string(), self.reflectance.to_string(), self.transmittance.to_string())
    }
}

impl BSDF for DielectricBSDF {
    fn eval(&self, _uv: &Vector2f, _wo: &Vector3f, _wi: &Vector3f) -> BSDFEval {
        BSDFEval::invalid()
    }

    fn sample(&self, uv: &Vector2f, wo: &Vector3f, rng: &mut dyn Sampler) -> BSDFSample {
        let mut eta = self.ior.scalar(*uv);
        let mut normal = Vector3f::new(0.0, 0.0, 1.0);
        if wo.z < 0.0 {
            eta = 1.0 / eta;
            normal = -normal;
        }

        let fresnel = match fresnel_dielectric(wo.z.abs(), eta) {
            Some(f) => f,
            None => return self.reflection(uv, wo),
        };
        if rng.next() < fresnel {
            return self.reflection(uv, wo);
        }

        let wi = refract(wo, &normal, eta);
        if wi.norm_squared() == 0.0 {
            return self.reflection(uv, wo);
        }
        BSDFSample::new(wi.normalize(), self.transmittance.eval(*uv) / (eta * eta))
    }

    fn albedo(&self, _uv: &Vector2f) -> RGBSpectrum {
        RGBSpectrum::white()
    }
}
