// Copyright @yucwang 2023

use crate::core::bsdf::{BSDFEval, BSDFSample};
use crate::core::instance::Instance;
use crate::core::sampler::Sampler;
use crate::math::constants::{ Float, INFINITY, Vector2f, Vector3f };
use crate::math::frame::Frame;
use crate::math::spectrum::RGBSpectrum;

/// Result of a ray query. During a query `t` is the current cutoff: a
/// candidate only replaces the recorded hit when it is strictly closer.
#[derive(Clone)]
pub struct SurfaceIntersection<'a> {
    pub position: Vector3f,
    pub frame: Frame,
    pub uv: Vector2f,
    pub t: Float,
    pub pdf: Float,
    pub wo: Vector3f,
    pub instance: Option<&'a Instance>,
}

impl Default for SurfaceIntersection<'_> {
    fn default() -> Self {
        Self::new(INFINITY)
    }
}

impl<'a> SurfaceIntersection<'a> {
    pub fn new(t: Float) -> Self {
        Self { position: Vector3f::zeros(),
               frame: Frame::default(),
               uv: Vector2f::zeros(),
               t,
               pdf: 0.0,
               wo: Vector3f::zeros(),
               instance: None }
    }

    pub fn is_valid(&self) -> bool {
        self.instance.is_some()
    }

    fn local_wo(&self) -> Vector3f {
        self.frame.to_local(&self.wo)
    }

    pub fn evaluate_emission(&self) -> RGBSpectrum {
        match self.instance.and_then(|instance| instance.emission()) {
            Some(emission) => emission.eval(&self.uv, &self.local_wo()),
            None => RGBSpectrum::black(),
        }
    }

    pub fn evaluate_albedo(&self) -> RGBSpectrum {
        match self.instance.and_then(|instance| instance.bsdf()) {
            Some(bsdf) => bsdf.albedo(&self.uv),
            None => RGBSpectrum::black(),
        }
    }

    pub fn evaluate_bsdf(&self, wi: &Vector3f) -> BSDFEval {
        match self.instance.and_then(|instance| instance.bsdf()) {
            Some(bsdf) => bsdf.eval(&self.uv, &self.local_wo(), &self.frame.to_local(wi)),
            None => BSDFEval::invalid(),
        }
    }

    pub fn sample_bsdf(&self, rng: &mut dyn Sampler) -> BSDFSample {
        let bsdf = match self.instance.and_then(|instance| instance.bsdf()) {
            Some(bsdf) => bsdf,
            None => return BSDFSample::invalid(),
        };
        let sample = bsdf.sample(&self.uv, &self.local_wo(), rng).sanitized();
        if sample.is_invalid() {
            return sample;
        }
        BSDFSample::new(self.frame.to_world(&sample.wi).normalize(), sample.weight)
    }
}
