// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::emitter::Background;
use crate::math::constants::Vector3f;
use crate::math::spectrum::RGBSpectrum;

pub struct ConstantBackground {
    radiance: RGBSpectrum,
}

impl ConstantBackground {
    pub fn new(radiance: RGBSpectrum) -> Self {
        Self { radiance }
    }
}

impl ComputationNode for ConstantBackground {
    fn to_string(&self) -> String {
        format!("ConstantBackground: [ radiance: {:?} ]", self.radiance.to_vector().as_slice())
    }
}

impl Background for ConstantBackground {
    fn eval(&self, _direction: &Vector3f) -> RGBSpectrum {
        self.radiance
    }
}
