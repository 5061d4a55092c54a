// Copyright @yucwang 2026

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::scene_loader::SceneLoadError;
use crate::core::texture::Texture;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::math::transform::Transform;
use crate::textures::constant::ConstantTexture;

#[derive(Clone)]
pub enum Property {
    Float(Float),
    Integer(i64),
    Boolean(bool),
    String(String),
    Vector(Vector3f),
    Color(RGBSpectrum),
    Texture(Arc<dyn Texture>),
    Transform(Transform),
}

impl Property {
    fn kind(&self) -> &'static str {
        match self {
            Property::Float(_) => "float",
            Property::Integer(_) => "integer",
            Property::Boolean(_) => "boolean",
            Property::String(_) => "string",
            Property::Vector(_) => "vector",
            Property::Color(_) => "color",
            Property::Texture(_) => "texture",
            Property::Transform(_) => "transform",
        }
    }
}

#[derive(Clone, Default)]
pub struct Properties {
    type_name: String,
    values: HashMap<String, Property>,
}

impl Properties {
    pub fn new(type_name: &str) -> Self {
        Self { type_name: type_name.to_string(), values: HashMap::new() }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn set_type_name(&mut self, type_name: &str) {
        self.type_name = type_name.to_string();
    }

    pub fn set(&mut self, name: &str, value: Property) -> Option<Property> {
        self.values.insert(name.to_string(), value)
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn lookup(&self, name: &str) -> Result<&Property, SceneLoadError> {
        self.values.get(name)
            .ok_or_else(|| SceneLoadError::MissingProperty(format!("{}.{}", self.type_name, name)))
    }

    fn mismatch(&self, name: &str, expected: &str, found: &Property) -> SceneLoadError {
        SceneLoadError::Parse(format!("{}.{}: expected {}, found {}",
                                      self.type_name, name, expected, found.kind()))
    }

    pub fn get_float(&self, name: &str) -> Result<Float, SceneLoadError> {
        match self.lookup(name)? {
            Property::Float(v) => Ok(*v),
            Property::Integer(v) => Ok(*v as Float),
            other => Err(self.mismatch(name, "float", other)),
        }
    }

    pub fn get_float_or(&self, name: &str, default: Float) -> Result<Float, SceneLoadError> {
        if self.has(name) { self.get_float(name) } else { Ok(default) }
    }

    pub fn get_integer(&self, name: &str) -> Result<i64, SceneLoadError> {
        match self.lookup(name)? {
            Property::Integer(v) => Ok(*v),
            other => Err(self.mismatch(name, "integer", other)),
        }
    }

    pub fn get_integer_or(&self, name: &str, default: i64) -> Result<i64, SceneLoadError> {
        if self.has(name) { self.get_integer(name) } else { Ok(default) }
    }

    pub fn get_u32_or(&self, name: &str, default: u32) -> Result<u32, SceneLoadError> {
        let value = self.get_integer_or(name, default as i64)?;
        u32::try_from(value).map_err(|_| {
            SceneLoadError::Parse(format!("{}.{}: {} is out of range", self.type_name, name, value))
        })
    }

    pub fn get_bool_or(&self, name: &str, default: bool) -> Result<bool, SceneLoadError> {
        match self.values.get(name) {
            None => Ok(default),
            Some(Property::Boolean(v)) => Ok(*v),
            Some(other) => Err(self.mismatch(name, "boolean", other)),
        }
    }

    pub fn get_string(&self, name: &str) -> Result<String, SceneLoadError> {
        match self.lookup(name)? {
            Property::String(v) => Ok(v.clone()),
            other => Err(self.mismatch(name, "string", other)),
        }
    }

    pub fn get_string_or(&self, name: &str, default: &str) -> Result<String, SceneLoadError> {
        if self.has(name) { self.get_string(name) } else { Ok(default.to_string()) }
    }

    pub fn get_vector(&self, name: &str) -> Result<Vector3f, SceneLoadError> {
        match self.lookup(name)? {
            Property::Vector(v) => Ok(*v),
            other => Err(self.mismatch(name, "vector", other)),
        }
    }

    pub fn get_vector2_or(&self, name: &str, default: Vector2f) -> Result<Vector2f, SceneLoadError> {
        if !self.has(name) {
            return Ok(default);
        }
        let v = self.get_vector(name)?;
        Ok(Vector2f::new(v.x, v.y))
    }

    pub fn get_color(&self, name: &str) -> Result<RGBSpectrum, SceneLoadError> {
        match self.lookup(name)? {
            Property::Color(c) => Ok(*c),
            Property::Float(v) => Ok(RGBSpectrum::splat(*v)),
            other => Err(self.mismatch(name, "color", other)),
        }
    }

    pub fn get_color_or(&self, name: &str, default: RGBSpectrum) -> Result<RGBSpectrum, SceneLoadError> {
        if self.has(name) { self.get_color(name) } else { Ok(default) }
    }

    pub fn get_texture(&self, name: &str) -> Result<Arc<dyn Texture>, SceneLoadError> {
        match self.lookup(name)? {
            Property::Texture(t) => Ok(t.clone()),
            Property::Color(c) => Ok(Arc::new(ConstantTexture::new(*c))),
            Property::Float(v) => Ok(Arc::new(ConstantTexture::from_float(*v))),
            other => Err(self.mismatch(name, "texture", other)),
        }
    }

    pub fn get_texture_or(&self, name: &str, default: Float) -> Result<Arc<dyn Texture>, SceneLoadError> {
        if self.has(name) {
            self.get_texture(name)
        } else {
            Ok(Arc::new(ConstantTexture::from_float(default)))
        }
    }

    pub fn get_transform(&self, name: &str) -> Result<Option<Transform>, SceneLoadError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(Property::Transform(t)) => Ok(Some(*t)),
            Some(other) => Err(self.mismatch(name, "transform", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::Vector2f;

    fn assert_close(a: Float, b: Float) {
        assert!((a - b).abs() < 1e-6, "expected {} ≈ {}", a, b);
    }

    #[test]
    fn test_missing_property_names_owner() {
        let props = Properties::new("diffuse");
        match props.get_texture("albedo") {
            Err(SceneLoadError::MissingProperty(name)) => assert_eq!(name, "diffuse.albedo"),
            _ => panic!("expected a missing property error"),
        }
    }

    #[test]
    fn test_defaults_and_type_mismatch() {
        let mut props = Properties::new("path");
        props.set("depth", Property::Integer(5));
        props.set("name", Property::String("x".to_string()));
        assert_eq!(props.get_u32_or("depth", 2).unwrap(), 5);
        assert_eq!(props.get_u32_or("missing", 2).unwrap(), 2);
        assert!(props.get_bool_or("remap", true).unwrap());
        assert!(matches!(props.get_float("name"), Err(SceneLoadError::Parse(_))));

        props.set("negative", Property::Integer(-1));
        assert!(props.get_u32_or("negative", 0).is_err());
    }

    #[test]
    fn test_texture_coercion() {
        let mut props = Properties::new("dielectric");
        props.set("ior", Property::Float(1.5));
        props.set("reflectance", Property::Color(RGBSpectrum::new(0.2, 0.4, 0.6)));

        let uv = Vector2f::new(0.3, 0.7);
        assert_close(props.get_texture("ior").unwrap().scalar(uv), 1.5);
        let reflectance = props.get_texture("reflectance").unwrap().eval(uv);
        assert_close(reflectance.g(), 0.4);
        assert_close(props.get_texture_or("transmittance", 1.0).unwrap().scalar(uv), 1.0);
        assert_close(props.get_color("ior").unwrap().b(), 1.5);
    }

    #[test]
    fn test_vector2_uses_leading_components() {
        let mut props = Properties::new("checkerboard");
        props.set("scale", Property::Vector(Vector3f::new(4.0, 2.0, 0.0)));
        let scale = props.get_vector2_or("scale", Vector2f::new(1.0, 1.0)).unwrap();
        assert_close(scale.x, 4.0);
        assert_close(scale.y, 2.0);
        assert!(props.get_transform("to_world").unwrap().is_none());
    }
}
