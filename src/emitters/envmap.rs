// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::computation_node::ComputationNode;
use crate::core::emitter::Background;
use crate::core::texture::Texture;
use crate::math::constants::{Vector2f, Vector3f, INV_2PI, INV_PI};
use crate::math::spectrum::RGBSpectrum;
use crate::math::transform::Transform;

pub struct EnvMap {
    texture: Arc<dyn Texture>,
    to_world: Transform,
}

impl EnvMap {
    pub fn new(texture: Arc<dyn Texture>, to_world: Transform) -> Self {
        Self { texture, to_world }
    }

    fn uv_from_direction(d: &Vector3f) -> Vector2f {
        let raw_u = d.x.atan2(-d.z) * INV_2PI;
        let u = raw_u - raw_u.floor();
        let v = d.y.clamp(-1.0, 1.0).acos() * INV_PI;
        Vector2f::new(u, 1.0 - v)
    }
}

impl ComputationNode for EnvMap {
    fn to_string(&self) -> String {
        format!("EnvMap: [ texture: {} ]", self.texture.to_string())
    }
}

impl Background for EnvMap {
    fn eval(&self, direction: &Vector3f) -> RGBSpectrum {
        let local = self.to_world.inv_apply_vector(*direction);
        let len = local.norm();
        if len == 0.0 {
            return RGBSpectrum::black();
        }
        self.texture.eval(Self::uv_from_direction(&(local / len)))
    }
}
