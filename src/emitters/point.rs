// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::emitter::{DirectLightSample, Emitter};
use crate::core::sampler::Sampler;
use crate::math::constants::{Vector3f, INV_4PI};
use crate::math::spectrum::RGBSpectrum;

pub struct PointEmitter {
    position: Vector3f,
    power: RGBSpectrum,
}

impl PointEmitter {
    pub fn new(position: Vector3f, power: RGBSpectrum) -> Self {
        Self { position, power }
    }
}

impl ComputationNode for PointEmitter {
    fn to_string(&self) -> String {
        format!("PointEmitter: [ position: ({}, {}, {}), power: {:?} ]",
                self.position.x, self.position.y, self.position.z,
                self.power.to_vector().as_slice())
    }
}

impl Emitter for PointEmitter {
    fn sample_direct(&self, origin: &Vector3f, _rng: &mut dyn Sampler) -> DirectLightSample {
        let to_light = self.position - origin;
        let distance = to_light.norm();
        if distance == 0.0 {
            return DirectLightSample::invalid();
        }
        DirectLightSample { wi: to_light / distance,
                            weight: self.power * (INV_4PI / (distance * distance)),
                            distance }
    }

    fn can_be_intersected(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::{Float, PI};
    use crate::samplers::independent::IndependentSampler;

    #[test]
    fn test_point_light_falloff() {
        let power = RGBSpectrum::new(100.0, 50.0, 10.0);
        let light = PointEmitter::new(Vector3f::new(0.0, 3.0, 0.0), power);
        let mut rng = IndependentSampler::new(1337, 1);
        let origin = Vector3f::new(0.0, 0.0, 4.0);
        let sample = light.sample_direct(&origin, &mut rng);

        let d: Float = 5.0;
        assert!((sample.distance - d).abs() < 1e-5);
        assert!((sample.wi.norm() - 1.0).abs() < 1e-6);
        assert!((sample.wi - Vector3f::new(0.0, 0.6, -0.8)).norm() < 1e-6);
        for c in 0..3 {
            let expected = power[c] / (4.0 * PI * d * d);
            assert!((sample.weight[c] - expected).abs() < 1e-5 * expected);
        }
        assert!(!light.can_be_intersected());
    }
}
