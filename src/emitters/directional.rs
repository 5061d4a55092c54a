// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::emitter::{DirectLightSample, Emitter};
use crate::core::sampler::Sampler;
use crate::math::constants::{Vector3f, INFINITY};
use crate::math::spectrum::RGBSpectrum;

pub struct DirectionalEmitter {
    direction: Vector3f,
    intensity: RGBSpectrum,
}

impl DirectionalEmitter {
    // `direction` points from the scene towards the light.
    pub fn new(direction: Vector3f, intensity: RGBSpectrum) -> Self {
        let len = direction.norm();
        let direction = if len > 0.0 { direction / len } else { Vector3f::new(0.0, 0.0, 1.0) };
        Self { direction, intensity }
    }
}

impl ComputationNode for DirectionalEmitter {
    fn to_string(&self) -> String {
        format!("DirectionalEmitter: [ direction: ({}, {}, {}) ]",
                self.direction.x, self.direction.y, self.direction.z)
    }
}

impl Emitter for DirectionalEmitter {
    fn sample_direct(&self, _origin: &Vector3f, _rng: &mut dyn Sampler) -> DirectLightSample {
        DirectLightSample { wi: self.direction,
                            weight: self.intensity,
                            distance: INFINITY }
    }

    fn can_be_intersected(&self) -> bool {
        false
    }
}
