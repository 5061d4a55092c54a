// Copyright @yucwang 2026

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::core::bsdf::BSDF;
use crate::core::instance::Instance;
use crate::core::integrator::Integrator;
use crate::core::properties::{Properties, Property};
use crate::core::registry;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::core::texture::Texture;
use crate::math::constants::{Float, Matrix4f, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::math::transform::Transform;

#[derive(Debug)]
pub enum SceneLoadError {
    Io(std::io::Error),
    Xml(quick_xml::Error),
    Parse(String),
    MissingProperty(String),
    UnknownType(String),
    Image(String),
}

impl From<std::io::Error> for SceneLoadError {
    fn from(err: std::io::Error) -> Self {
        SceneLoadError::Io(err)
    }
}

impl From<quick_xml::Error> for SceneLoadError {
    fn from(err: quick_xml::Error) -> Self {
        SceneLoadError::Xml(err)
    }
}

impl fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneLoadError::Io(err) => write!(f, "io error: {}", err),
            SceneLoadError::Xml(err) => write!(f, "malformed xml: {}", err),
            SceneLoadError::Parse(msg) => write!(f, "parse error: {}", msg),
            SceneLoadError::MissingProperty(name) => write!(f, "missing property: {}", name),
            SceneLoadError::UnknownType(name) => write!(f, "unknown type: {}", name),
            SceneLoadError::Image(msg) => write!(f, "image error: {}", msg),
        }
    }
}

impl std::error::Error for SceneLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneLoadError::Io(err) => Some(err),
            SceneLoadError::Xml(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOverrides {
    pub samples_per_pixel: Option<u32>,
    pub max_depth: Option<u32>,
    pub seed: Option<u64>,
}

impl RenderOverrides {
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        fn value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
            let value = value.ok_or_else(|| format!("{} expects a value", flag))?;
            value.parse::<T>().map_err(|_| format!("invalid value for {}: {}", flag, value))
        }

        let mut overrides = Self::default();
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--spp" => {
                    i += 1;
                    overrides.samples_per_pixel = Some(value("--spp", args.get(i))?);
                }
                "--depth" => {
                    i += 1;
                    overrides.max_depth = Some(value("--depth", args.get(i))?);
                }
                "--seed" => {
                    i += 1;
                    overrides.seed = Some(value("--seed", args.get(i))?);
                }
                other => return Err(format!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(overrides)
    }
}

pub struct SceneDescription {
    pub scene: Scene,
    pub integrator: Properties,
    pub sampler: Properties,
}

impl SceneDescription {
    pub fn apply_overrides(&mut self, overrides: &RenderOverrides) {
        if let Some(spp) = overrides.samples_per_pixel {
            self.sampler.set("count", Property::Integer(spp as i64));
        }
        if let Some(depth) = overrides.max_depth {
            self.integrator.set("depth", Property::Integer(depth as i64));
        }
        if let Some(seed) = overrides.seed {
            self.sampler.set("seed", Property::Integer(seed.min(i64::MAX as u64) as i64));
        }
    }

    pub fn build_integrator(&self) -> Result<Box<dyn Integrator>, SceneLoadError> {
        registry::create_integrator(&self.integrator)
    }

    pub fn build_sampler(&self) -> Result<Box<dyn Sampler>, SceneLoadError> {
        registry::create_sampler(&self.sampler)
    }
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<SceneDescription, SceneLoadError> {
    let path = path.as_ref();
    let xml = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    log::info!("Loading scene {}", path.display());
    parse_scene(&xml, base_dir)
}

pub fn parse_scene(xml: &str, base_dir: &Path) -> Result<SceneDescription, SceneLoadError> {
    let root = parse_tree(xml)?;
    if root.name != "scene" {
        return Err(SceneLoadError::Parse(format!("expected <scene> as root, found <{}>", root.name)));
    }
    SceneBuilder::new(base_dir).build(&root)
}

#[derive(Debug, Clone)]
struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    fn required_attr(&self, key: &str) -> Result<&str, SceneLoadError> {
        self.attr(key).ok_or_else(|| SceneLoadError::MissingProperty(format!("<{}>.{}", self.name, key)))
    }

    fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }
}

fn read_element(start: &BytesStart<'_>, defaults: &HashMap<String, String>) -> Result<XmlElement, SceneLoadError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = resolve_value(&attr.unescape_value()?, defaults);
        attributes.push((key, value));
    }
    Ok(XmlElement { name, attributes, children: Vec::new() })
}

fn parse_tree(xml: &str) -> Result<XmlElement, SceneLoadError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();

    let mut defaults: HashMap<String, String> = HashMap::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let finished = match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(e) => {
                stack.push(read_element(&e, &defaults)?);
                None
            }
            Event::Empty(e) => Some(read_element(&e, &defaults)?),
            Event::End(_) => {
                let element = stack.pop()
                    .ok_or_else(|| SceneLoadError::Parse("unbalanced closing tag".to_string()))?;
                Some(element)
            }
            _ => None,
        };

        if let Some(element) = finished {
            if element.name == "default" {
                let key = element.required_attr("name")?.to_string();
                let value = element.required_attr("value")?.to_string();
                defaults.insert(key, value);
            }
            match stack.last_mut() {
                Some(parent) => parent.children.push(element),
                None if root.is_none() => root = Some(element),
                None => return Err(SceneLoadError::Parse("more than one root element".to_string())),
            }
        }

        buf.clear();
    }

    if !stack.is_empty() {
        return Err(SceneLoadError::Parse(format!("unclosed element <{}>", stack[stack.len() - 1].name)));
    }
    root.ok_or_else(|| SceneLoadError::Parse("empty scene description".to_string()))
}

fn resolve_value(raw: &str, defaults: &HashMap<String, String>) -> String {
    let mut out = raw.to_string();
    for (k, v) in defaults {
        out = out.replace(&format!("${}", k), v);
    }
    out
}

struct SceneBuilder<'a> {
    base_dir: &'a Path,
    bsdfs: HashMap<String, Arc<dyn BSDF>>,
    textures: HashMap<String, Arc<dyn Texture>>,
}

impl<'a> SceneBuilder<'a> {
    fn new(base_dir: &'a Path) -> Self {
        Self { base_dir, bsdfs: HashMap::new(), textures: HashMap::new() }
    }

    fn build(mut self, root: &XmlElement) -> Result<SceneDescription, SceneLoadError> {
        let mut scene = Scene::new();
        let mut integrator = Properties::new("path");
        let mut sampler = Properties::new("halton");

        for element in &root.children {
            match element.name.as_str() {
                "default" => {}
                "camera" => {
                    if scene.camera().is_some() {
                        log::warn!("Scene declares more than one camera, using the last one");
                    }
                    scene.set_camera(registry::create_camera(&self.properties(element, &[])?)?);
                }
                "instance" => scene.add_instance(self.instance(element)?),
                "light" => scene.add_light(registry::create_light(&self.properties(element, &[])?)?),
                "background" => {
                    scene.set_background(registry::create_background(&self.properties(element, &[])?)?);
                }
                "integrator" => {
                    integrator = self.properties(element, &["sampler"])?;
                    if let Some(nested) = element.child("sampler") {
                        sampler = self.properties(nested, &[])?;
                    }
                }
                "sampler" => sampler = self.properties(element, &[])?,
                "bsdf" => {
                    let id = element.required_attr("id")?.to_string();
                    let bsdf = registry::create_bsdf(&self.properties(element, &[])?)?;
                    self.bsdfs.insert(id, bsdf);
                }
                "texture" => {
                    let id = element.required_attr("id")?.to_string();
                    let texture = registry::create_texture(&self.properties(element, &[])?)?;
                    self.textures.insert(id, texture);
                }
                other => log::warn!("Ignoring unknown element <{}>", other),
            }
        }

        let camera = scene.camera()
            .ok_or_else(|| SceneLoadError::MissingProperty("scene.camera".to_string()))?;
        let resolution = camera.resolution();
        log::info!("Scene loaded: {} instances, {} lights, camera {}x{}, integrator '{}', sampler '{}'",
                   scene.instances().len(),
                   scene.lights().len(),
                   resolution.x,
                   resolution.y,
                   integrator.type_name(),
                   sampler.type_name());

        Ok(SceneDescription { scene, integrator, sampler })
    }

    fn instance(&self, element: &XmlElement) -> Result<Instance, SceneLoadError> {
        let props = self.properties(element, &["shape", "bsdf", "emission", "ref"])?;
        let shape_element = element.child("shape")
            .ok_or_else(|| SceneLoadError::MissingProperty("instance.shape".to_string()))?;
        let shape = registry::create_shape(&self.properties(shape_element, &[])?)?;

        let mut instance = Instance::new(shape).with_flip_normal(props.get_bool_or("flip_normal", false)?);
        if let Some(bsdf) = element.child("bsdf") {
            instance = instance.with_bsdf(registry::create_bsdf(&self.properties(bsdf, &[])?)?);
        } else if let Some(reference) = element.child("ref") {
            let id = reference.required_attr("id")?;
            let bsdf = self.bsdfs.get(id)
                .ok_or_else(|| SceneLoadError::Parse(format!("missing bsdf ref: {}", id)))?;
            instance = instance.with_bsdf(bsdf.clone());
        }
        if let Some(emission) = element.child("emission") {
            instance = instance.with_emission(registry::create_emission(&self.properties(emission, &[])?)?);
        }
        if let Some(to_world) = props.get_transform("to_world")? {
            instance = instance.with_transform(to_world);
        }
        Ok(instance)
    }

    fn properties(&self, element: &XmlElement, nested: &[&str]) -> Result<Properties, SceneLoadError> {
        let mut props = Properties::new(element.attr("type").unwrap_or(&element.name));

        for child in &element.children {
            if nested.contains(&child.name.as_str()) {
                continue;
            }
            let (name, value) = match child.name.as_str() {
                "transform" => {
                    (child.attr("name").unwrap_or("to_world"), Property::Transform(parse_transform(child)?))
                }
                "texture" => {
                    let texture = registry::create_texture(&self.properties(child, &[])?)?;
                    (child.required_attr("name")?, Property::Texture(texture))
                }
                "ref" => {
                    let id = child.required_attr("id")?;
                    let texture = self.textures.get(id)
                        .ok_or_else(|| SceneLoadError::Parse(format!("missing texture ref: {}", id)))?;
                    (child.required_attr("name")?, Property::Texture(texture.clone()))
                }
                "float" | "integer" | "boolean" | "string" | "vector" | "color" | "rgb" => {
                    let name = child.required_attr("name")?;
                    (name, self.scalar_property(child, name)?)
                }
                other => {
                    log::warn!("Ignoring unknown element <{}> inside <{}>", other, element.name);
                    continue;
                }
            };
            if props.set(name, value).is_some() {
                log::warn!("{}: property '{}' given twice, keeping the last one", props.type_name(), name);
            }
        }

        Ok(props)
    }

    fn scalar_property(&self, element: &XmlElement, name: &str) -> Result<Property, SceneLoadError> {
        let value = element.required_attr("value")?;
        let property = match element.name.as_str() {
            "float" => Property::Float(parse_float(value)?),
            "integer" => Property::Integer(parse_integer(value)?),
            "boolean" => Property::Boolean(parse_bool(value)?),
            "vector" => Property::Vector(parse_vector(value)?),
            "color" | "rgb" => Property::Color(parse_color(value)?),
            _ if name == "filename" && Path::new(value).is_relative() => {
                Property::String(self.base_dir.join(value).to_string_lossy().to_string())
            }
            _ => Property::String(value.to_string()),
        };
        Ok(property)
    }
}

fn parse_transform(element: &XmlElement) -> Result<Transform, SceneLoadError> {
    let mut transform = Transform::default();
    for op in &element.children {
        let step = match op.name.as_str() {
            "translate" => Transform::translate(&transform_operand(op, 0.0)?),
            "scale" => Transform::scale(&transform_operand(op, 1.0)?),
            "rotate" => {
                let axis = parse_vector(op.required_attr("axis")?)?;
                if axis.norm() == 0.0 {
                    return Err(SceneLoadError::Parse("rotate: axis must not be zero".to_string()));
                }
                Transform::rotate(&axis, parse_float(op.required_attr("angle")?)?)
            }
            "matrix" => {
                let values = parse_numbers(op.required_attr("value")?)?;
                if values.len() != 16 {
                    return Err(SceneLoadError::Parse(format!("matrix: expected 16 values, found {}", values.len())));
                }
                let matrix = Matrix4f::from_row_slice(&values);
                if matrix.try_inverse().is_none() {
                    return Err(SceneLoadError::Parse("matrix: not invertible".to_string()));
                }
                Transform::new(matrix)
            }
            "lookat" => {
                let origin = parse_vector(op.required_attr("origin")?)?;
                let target = parse_vector(op.required_attr("target")?)?;
                let up = match op.attr("up") {
                    Some(up) => parse_vector(up)?,
                    None => Vector3f::new(0.0, 1.0, 0.0),
                };
                Transform::look_at(&origin, &target, &up)
            }
            other => return Err(SceneLoadError::Parse(format!("unknown transform operation <{}>", other))),
        };
        transform = transform.then(&step);
    }
    Ok(transform)
}

// Either `value="x,y,z"` (a single number applies to every axis) or
// separate x/y/z attributes defaulting to `fill`.
fn transform_operand(op: &XmlElement, fill: Float) -> Result<Vector3f, SceneLoadError> {
    if let Some(value) = op.attr("value") {
        return parse_vector(value);
    }
    let mut v = Vector3f::new(fill, fill, fill);
    for (idx, key) in ["x", "y", "z"].iter().enumerate() {
        if let Some(component) = op.attr(key) {
            v[idx] = parse_float(component)?;
        }
    }
    Ok(v)
}

fn parse_float(value: &str) -> Result<Float, SceneLoadError> {
    value.trim().parse::<Float>().map_err(|_| SceneLoadError::Parse(format!("invalid float: {}", value)))
}

fn parse_integer(value: &str) -> Result<i64, SceneLoadError> {
    value.trim().parse::<i64>().map_err(|_| SceneLoadError::Parse(format!("invalid integer: {}", value)))
}

fn parse_bool(value: &str) -> Result<bool, SceneLoadError> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(SceneLoadError::Parse(format!("invalid boolean: {}", other))),
    }
}

fn parse_numbers(value: &str) -> Result<Vec<Float>, SceneLoadError> {
    value.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(parse_float)
        .collect()
}

fn parse_vector(value: &str) -> Result<Vector3f, SceneLoadError> {
    match parse_numbers(value)?.as_slice() {
        [v] => Ok(Vector3f::new(*v, *v, *v)),
        [x, y] => Ok(Vector3f::new(*x, *y, 0.0)),
        [x, y, z] => Ok(Vector3f::new(*x, *y, *z)),
        _ => Err(SceneLoadError::Parse(format!("invalid vector: {}", value))),
    }
}

fn parse_color(value: &str) -> Result<RGBSpectrum, SceneLoadError> {
    match parse_numbers(value)?.as_slice() {
        [v] => Ok(RGBSpectrum::splat(*v)),
        [r, g, b] => Ok(RGBSpectrum::new(*r, *g, *b)),
        _ => Err(SceneLoadError::Parse(format!("invalid color: {}", value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::Vector2i;
    use crate::math::ray::Ray3f;
    use crate::samplers::independent::IndependentSampler;

    const SIMPLE_SCENE: &str = r#"
        <scene>
            <default name="spp" value="4"/>
            <camera type="perspective">
                <integer name="width" value="64"/>
                <integer name="height" value="48"/>
                <float name="fov" value="40"/>
                <string name="fovAxis" value="x"/>
                <transform>
                    <lookat origin="0,0,-5" target="0,0,0" up="0,1,0"/>
                </transform>
            </camera>
            <bsdf type="conductor" id="mirror">
                <color name="reflectance" value="0.9"/>
            </bsdf>
            <instance>
                <shape type="sphere"/>
                <bsdf type="diffuse">
                    <texture name="albedo" type="checkerboard">
                        <color name="color0" value="0.1,0.2,0.3"/>
                        <color name="color1" value="0.8"/>
                        <vector name="scale" value="4,4"/>
                    </texture>
                </bsdf>
                <emission type="lambertian">
                    <color name="emission" value="1,1,1"/>
                </emission>
                <transform>
                    <translate z="2"/>
                </transform>
            </instance>
            <instance>
                <shape type="rectangle"/>
                <ref id="mirror"/>
                <boolean name="flip_normal" value="true"/>
            </instance>
            <light type="point">
                <vector name="position" value="0,3,0"/>
                <color name="power" value="100"/>
            </light>
            <background type="constant">
                <color name="radiance" value="0.5"/>
            </background>
            <integrator type="path">
                <integer name="depth" value="3"/>
                <sampler type="independent">
                    <integer name="count" value="$spp"/>
                    <integer name="seed" value="7"/>
                </sampler>
            </integrator>
        </scene>
    "#;

    fn load(xml: &str) -> Result<SceneDescription, SceneLoadError> {
        parse_scene(xml, Path::new("."))
    }

    fn assert_vec_close(a: Vector3f, b: Vector3f) {
        assert!((a - b).norm() < 1e-5, "expected {:?} ≈ {:?}", a, b);
    }

    #[test]
    fn test_load_simple_scene() {
        let description = load(SIMPLE_SCENE).unwrap();
        let scene = &description.scene;
        assert_eq!(scene.instances().len(), 2);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.camera().unwrap().resolution(), Vector2i::new(64, 48));
        assert_eq!(description.integrator.type_name(), "path");
        assert_eq!(description.sampler.type_name(), "independent");

        let sampler = description.build_sampler().unwrap();
        assert_eq!(sampler.samples_per_pixel(), 4);
        assert!(description.build_integrator().is_ok());

        let background = scene.evaluate_background(&Vector3f::new(0.0, 1.0, 0.0));
        assert!((background.g() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_loaded_instances_are_placed() {
        let description = load(SIMPLE_SCENE).unwrap();
        let mut rng = IndependentSampler::new(0, 1);
        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
        let its = description.scene.intersect(&ray, &mut rng).unwrap();

        // The rectangle sits at z = 0 in front of the translated sphere.
        assert!((its.t - 5.0).abs() < 1e-4);
        assert_vec_close(its.frame.normal, Vector3f::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut description = load(SIMPLE_SCENE).unwrap();
        description.apply_overrides(&RenderOverrides { samples_per_pixel: Some(16),
                                                       max_depth: Some(8),
                                                       seed: Some(3) });
        assert_eq!(description.build_sampler().unwrap().samples_per_pixel(), 16);
        assert_eq!(description.integrator.get_u32_or("depth", 0).unwrap(), 8);
        assert_eq!(description.sampler.get_integer("seed").unwrap(), 3);
    }

    #[test]
    fn test_overrides_from_args() {
        let args: Vec<String> = ["--spp", "32", "--seed", "9"].iter().map(|s| s.to_string()).collect();
        let overrides = RenderOverrides::from_args(&args).unwrap();
        assert_eq!(overrides.samples_per_pixel, Some(32));
        assert_eq!(overrides.max_depth, None);
        assert_eq!(overrides.seed, Some(9));

        assert!(RenderOverrides::from_args(&["--depth".to_string()]).is_err());
        assert!(RenderOverrides::from_args(&["--depth".to_string(), "-1".to_string()]).is_err());
        assert!(RenderOverrides::from_args(&["--camera".to_string(), "1".to_string()]).is_err());
    }

    #[test]
    fn test_missing_camera_is_an_error() {
        let result = load("<scene><light type=\"point\"><vector name=\"position\" value=\"0\"/><color name=\"power\" value=\"1\"/></light></scene>");
        match result {
            Err(SceneLoadError::MissingProperty(name)) => assert_eq!(name, "scene.camera"),
            _ => panic!("expected a missing camera error"),
        }
    }

    #[test]
    fn test_unknown_bsdf_type() {
        let xml = r#"
            <scene>
                <camera type="perspective"><float name="fov" value="30"/></camera>
                <instance><shape type="sphere"/><bsdf type="velvet"/></instance>
            </scene>
        "#;
        assert!(matches!(load(xml), Err(SceneLoadError::UnknownType(_))));
    }

    #[test]
    fn test_instance_requires_shape() {
        let xml = r#"
            <scene>
                <camera type="perspective"><float name="fov" value="30"/></camera>
                <instance><bsdf type="diffuse"><color name="albedo" value="0.5"/></bsdf></instance>
            </scene>
        "#;
        match load(xml) {
            Err(SceneLoadError::MissingProperty(name)) => assert_eq!(name, "instance.shape"),
            _ => panic!("expected a missing shape error"),
        }
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(load("<scene><camera></scene>"), Err(SceneLoadError::Xml(_))));
        assert!(matches!(load("<world/>"), Err(SceneLoadError::Parse(_))));
    }

    #[test]
    fn test_transform_composition_order() {
        let root = parse_tree(r#"
            <transform>
                <scale value="2"/>
                <translate x="0" y="1" z="0"/>
                <rotate axis="0,0,1" angle="90"/>
            </transform>
        "#).unwrap();
        let t = parse_transform(&root).unwrap();
        // (1,0,0) -> scale (2,0,0) -> translate (2,1,0) -> rotate (-1,2,0)
        assert_vec_close(t.apply_point(Vector3f::new(1.0, 0.0, 0.0)), Vector3f::new(-1.0, 2.0, 0.0));
    }

    #[test]
    fn test_matrix_transform() {
        let root = parse_tree(r#"
            <transform>
                <matrix value="1 0 0 3  0 1 0 0  0 0 1 0  0 0 0 1"/>
            </transform>
        "#).unwrap();
        let t = parse_transform(&root).unwrap();
        assert_vec_close(t.apply_point(Vector3f::zeros()), Vector3f::new(3.0, 0.0, 0.0));

        let singular = parse_tree("<transform><matrix value=\"0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0\"/></transform>").unwrap();
        assert!(parse_transform(&singular).is_err());
    }

    #[test]
    fn test_default_substitution() {
        let mut defaults = HashMap::new();
        defaults.insert("res".to_string(), "256".to_string());
        assert_eq!(resolve_value("$res", &defaults), "256");
        assert_eq!(resolve_value("plain", &defaults), "plain");
    }

    #[test]
    fn test_value_parsers() {
        assert_vec_close(parse_vector("1, 2 3").unwrap(), Vector3f::new(1.0, 2.0, 3.0));
        assert_vec_close(parse_vector("0.5").unwrap(), Vector3f::new(0.5, 0.5, 0.5));
        assert!(parse_vector("1,2,3,4").is_err());
        assert!(parse_color("1,2").is_err());
        assert!(parse_bool("yes").is_err());
        assert_eq!(parse_integer(" 12 ").unwrap(), 12);
    }
}
