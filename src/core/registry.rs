// Copyright @yucwang 2026

//! Name-to-constructor tables used when building a scene from its
//! description. The tables are filled once on first use and never change.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::core::bsdf::BSDF;
use crate::core::emission::Emission;
use crate::core::emitter::{Background, Emitter};
use crate::core::integrator::Integrator;
use crate::core::properties::Properties;
use crate::core::sampler::Sampler;
use crate::core::scene_loader::SceneLoadError;
use crate::core::sensor::Sensor;
use crate::core::shape::Shape;
use crate::core::texture::Texture;
use crate::emitters::constant::ConstantBackground;
use crate::emitters::directional::DirectionalEmitter;
use crate::emitters::envmap::EnvMap;
use crate::emitters::lambertian::LambertianEmission;
use crate::emitters::point::PointEmitter;
use crate::integrators::albedo::AlbedoIntegrator;
use crate::integrators::direct::DirectIntegrator;
use crate::integrators::normals::NormalsIntegrator;
use crate::integrators::path::PathIntegrator;
use crate::materials::conductor::ConductorBSDF;
use crate::materials::dielectric::DielectricBSDF;
use crate::materials::diffuse::DiffuseBSDF;
use crate::materials::principled::PrincipledBSDF;
use crate::materials::roughconductor::RoughConductorBSDF;
use crate::math::constants::{Float, Vector2f, Vector2i};
use crate::math::spectrum::RGBSpectrum;
use crate::math::transform::Transform;
use crate::samplers::halton::HaltonSampler;
use crate::samplers::independent::IndependentSampler;
use crate::sensors::perspective::{FovAxis, PerspectiveCamera};
use crate::sensors::thinlens::ThinLensCamera;
use crate::shapes::rectangle::Rectangle;
use crate::shapes::sphere::Sphere;
use crate::textures::checkerboard::CheckerboardTexture;
use crate::textures::image::{BorderMode, FilterMode, ImageData, ImageTexture};

pub type Factory<T> = fn(&Properties) -> Result<T, SceneLoadError>;

pub const DEFAULT_SAMPLE_COUNT: u32 = 64;
pub const DEFAULT_SEED: u64 = 1337;

struct Registry {
    bsdfs: HashMap<&'static str, Factory<Arc<dyn BSDF>>>,
    textures: HashMap<&'static str, Factory<Arc<dyn Texture>>>,
    emissions: HashMap<&'static str, Factory<Arc<dyn Emission>>>,
    lights: HashMap<&'static str, Factory<Arc<dyn Emitter>>>,
    backgrounds: HashMap<&'static str, Factory<Arc<dyn Background>>>,
    shapes: HashMap<&'static str, Factory<Arc<dyn Shape>>>,
    cameras: HashMap<&'static str, Factory<Arc<dyn Sensor>>>,
    integrators: HashMap<&'static str, Factory<Box<dyn Integrator>>>,
    samplers: HashMap<&'static str, Factory<Box<dyn Sampler>>>,
}

impl Registry {
    fn build() -> Self {
        let mut bsdfs: HashMap<&'static str, Factory<Arc<dyn BSDF>>> = HashMap::new();
        bsdfs.insert("diffuse", create_diffuse);
        bsdfs.insert("conductor", create_conductor);
        bsdfs.insert("dielectric", create_dielectric);
        bsdfs.insert("roughconductor", create_roughconductor);
        bsdfs.insert("principled", create_principled);

        let mut textures: HashMap<&'static str, Factory<Arc<dyn Texture>>> = HashMap::new();
        textures.insert("constant", create_constant_texture);
        textures.insert("checkerboard", create_checkerboard);
        textures.insert("image", create_image_texture);

        let mut emissions: HashMap<&'static str, Factory<Arc<dyn Emission>>> = HashMap::new();
        emissions.insert("lambertian", create_lambertian);

        let mut lights: HashMap<&'static str, Factory<Arc<dyn Emitter>>> = HashMap::new();
        lights.insert("point", create_point_light);
        lights.insert("directional", create_directional_light);

        let mut backgrounds: HashMap<&'static str, Factory<Arc<dyn Background>>> = HashMap::new();
        backgrounds.insert("constant", create_constant_background);
        backgrounds.insert("envmap", create_envmap);

        let mut shapes: HashMap<&'static str, Factory<Arc<dyn Shape>>> = HashMap::new();
        shapes.insert("sphere", create_sphere);
        shapes.insert("rectangle", create_rectangle);

        let mut cameras: HashMap<&'static str, Factory<Arc<dyn Sensor>>> = HashMap::new();
        cameras.insert("perspective", create_perspective);
        cameras.insert("thinlens", create_thinlens);

        let mut integrators: HashMap<&'static str, Factory<Box<dyn Integrator>>> = HashMap::new();
        integrators.insert("path", create_path_integrator);
        integrators.insert("pathtracer", create_path_integrator);
        integrators.insert("direct", create_direct_integrator);
        integrators.insert("normals", create_normals_integrator);
        integrators.insert("albedo", create_albedo_integrator);

        let mut samplers: HashMap<&'static str, Factory<Box<dyn Sampler>>> = HashMap::new();
        samplers.insert("halton", create_halton);
        samplers.insert("independent", create_independent);

        Self { bsdfs, textures, emissions, lights, backgrounds, shapes, cameras, integrators, samplers }
    }
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::build)
}

fn create<T>(table: &HashMap<&'static str, Factory<T>>,
             category: &str,
             props: &Properties) -> Result<T, SceneLoadError> {
    let factory = table.get(props.type_name())
        .ok_or_else(|| SceneLoadError::UnknownType(format!("{} '{}'", category, props.type_name())))?;
    log::debug!("Creating {} '{}' with {} properties", category, props.type_name(), props.len());
    factory(props)
}

pub fn create_bsdf(props: &Properties) -> Result<Arc<dyn BSDF>, SceneLoadError> {
    create(&registry().bsdfs, "bsdf", props)
}

pub fn create_texture(props: &Properties) -> Result<Arc<dyn Texture>, SceneLoadError> {
    create(&registry().textures, "texture", props)
}

pub fn create_emission(props: &Properties) -> Result<Arc<dyn Emission>, SceneLoadError> {
    create(&registry().emissions, "emission", props)
}

pub fn create_light(props: &Properties) -> Result<Arc<dyn Emitter>, SceneLoadError> {
    create(&registry().lights, "light", props)
}

pub fn create_background(props: &Properties) -> Result<Arc<dyn Background>, SceneLoadError> {
    create(&registry().backgrounds, "background", props)
}

pub fn create_shape(props: &Properties) -> Result<Arc<dyn Shape>, SceneLoadError> {
    create(&registry().shapes, "shape", props)
}

pub fn create_camera(props: &Properties) -> Result<Arc<dyn Sensor>, SceneLoadError> {
    create(&registry().cameras, "camera", props)
}

pub fn create_integrator(props: &Properties) -> Result<Box<dyn Integrator>, SceneLoadError> {
    create(&registry().integrators, "integrator", props)
}

pub fn create_sampler(props: &Properties) -> Result<Box<dyn Sampler>, SceneLoadError> {
    create(&registry().samplers, "sampler", props)
}

fn create_diffuse(props: &Properties) -> Result<Arc<dyn BSDF>, SceneLoadError> {
    Ok(Arc::new(DiffuseBSDF::new(props.get_texture("albedo")?)))
}

fn create_conductor(props: &Properties) -> Result<Arc<dyn BSDF>, SceneLoadError> {
    Ok(Arc::new(ConductorBSDF::new(props.get_texture("reflectance")?)))
}

fn create_dielectric(props: &Properties) -> Result<Arc<dyn BSDF>, SceneLoadError> {
    Ok(Arc::new(DielectricBSDF::new(props.get_texture("ior")?,
                                    props.get_texture_or("reflectance", 1.0)?,
                                    props.get_texture_or("transmittance", 1.0)?)))
}

fn create_roughconductor(props: &Properties) -> Result<Arc<dyn BSDF>, SceneLoadError> {
    Ok(Arc::new(RoughConductorBSDF::new(props.get_texture("reflectance")?,
                                        props.get_texture("roughness")?)))
}

fn create_principled(props: &Properties) -> Result<Arc<dyn BSDF>, SceneLoadError> {
    Ok(Arc::new(PrincipledBSDF::new(props.get_texture("baseColor")?,
                                    props.get_texture("roughness")?,
                                    props.get_texture("metallic")?,
                                    props.get_texture("specular")?)))
}

fn create_constant_texture(props: &Properties) -> Result<Arc<dyn Texture>, SceneLoadError> {
    Ok(Arc::new(crate::textures::constant::ConstantTexture::new(props.get_color("value")?)))
}

fn create_checkerboard(props: &Properties) -> Result<Arc<dyn Texture>, SceneLoadError> {
    Ok(Arc::new(CheckerboardTexture::new(props.get_color("color0")?,
                                         props.get_color("color1")?,
                                         props.get_vector2_or("scale", Vector2f::new(1.0, 1.0))?)))
}

fn create_image_texture(props: &Properties) -> Result<Arc<dyn Texture>, SceneLoadError> {
    let filename = props.get_string("filename")?;
    let border = match props.get_string_or("border", "repeat")?.as_str() {
        "repeat" => BorderMode::Repeat,
        "clamp" => BorderMode::Clamp,
        other => return Err(SceneLoadError::Parse(format!("image.border: unknown mode '{}'", other))),
    };
    let filter = match props.get_string_or("filter", "bilinear")?.as_str() {
        "bilinear" => FilterMode::Bilinear,
        "nearest" => FilterMode::Nearest,
        other => return Err(SceneLoadError::Parse(format!("image.filter: unknown mode '{}'", other))),
    };
    let image = ImageData::from_file(&filename).map_err(SceneLoadError::Image)?;
    let (width, height) = image.dimensions();
    log::info!("Loaded texture {} ({}x{})", filename, width, height);
    Ok(Arc::new(ImageTexture::new(image, props.get_float_or("exposure", 1.0)?, filter, border)))
}

fn create_lambertian(props: &Properties) -> Result<Arc<dyn Emission>, SceneLoadError> {
    Ok(Arc::new(LambertianEmission::new(props.get_texture("emission")?)))
}

fn create_point_light(props: &Properties) -> Result<Arc<dyn Emitter>, SceneLoadError> {
    Ok(Arc::new(PointEmitter::new(props.get_vector("position")?, props.get_color("power")?)))
}

fn create_directional_light(props: &Properties) -> Result<Arc<dyn Emitter>, SceneLoadError> {
    let direction = props.get_vector("direction")?;
    if direction.norm() == 0.0 {
        return Err(SceneLoadError::Parse("directional.direction must not be zero".to_string()));
    }
    Ok(Arc::new(DirectionalEmitter::new(direction, props.get_color("intensity")?)))
}

fn create_constant_background(props: &Properties) -> Result<Arc<dyn Background>, SceneLoadError> {
    Ok(Arc::new(ConstantBackground::new(props.get_color_or("radiance", RGBSpectrum::white())?)))
}

fn create_envmap(props: &Properties) -> Result<Arc<dyn Background>, SceneLoadError> {
    let to_world = props.get_transform("to_world")?.unwrap_or_default();
    Ok(Arc::new(EnvMap::new(props.get_texture("texture")?, to_world)))
}

fn create_sphere(_props: &Properties) -> Result<Arc<dyn Shape>, SceneLoadError> {
    Ok(Arc::new(Sphere::new()))
}

fn create_rectangle(_props: &Properties) -> Result<Arc<dyn Shape>, SceneLoadError> {
    Ok(Arc::new(Rectangle::new()))
}

fn camera_resolution(props: &Properties) -> Result<Vector2i, SceneLoadError> {
    let width = props.get_u32_or("width", 512)?;
    let height = props.get_u32_or("height", 512)?;
    if width == 0 || height == 0 {
        return Err(SceneLoadError::Parse(format!("{}: resolution must be positive", props.type_name())));
    }
    Ok(Vector2i::new(width as i32, height as i32))
}

fn camera_fov_axis(props: &Properties) -> Result<FovAxis, SceneLoadError> {
    match props.get_string_or("fovAxis", "x")?.as_str() {
        "x" => Ok(FovAxis::X),
        "y" => Ok(FovAxis::Y),
        other => Err(SceneLoadError::Parse(format!("{}.fovAxis: unknown axis '{}'", props.type_name(), other))),
    }
}

fn create_perspective(props: &Properties) -> Result<Arc<dyn Sensor>, SceneLoadError> {
    Ok(Arc::new(PerspectiveCamera::new(camera_resolution(props)?,
                                       props.get_float("fov")?,
                                       camera_fov_axis(props)?,
                                       props.get_transform("to_world")?.unwrap_or_else(Transform::default))))
}

fn create_thinlens(props: &Properties) -> Result<Arc<dyn Sensor>, SceneLoadError> {
    Ok(Arc::new(ThinLensCamera::new(camera_resolution(props)?,
                                    props.get_float("fov")?,
                                    camera_fov_axis(props)?,
                                    props.get_float("radius")?,
                                    thinlens_focal_distance(props)?,
                                    props.get_transform("to_world")?.unwrap_or_else(Transform::default))))
}

fn thinlens_focal_distance(props: &Properties) -> Result<Float, SceneLoadError> {
    if !props.has("focalDistance") && props.has("focal_length") {
        return props.get_float("focal_length");
    }
    props.get_float("focalDistance")
}

fn create_path_integrator(props: &Properties) -> Result<Box<dyn Integrator>, SceneLoadError> {
    Ok(Box::new(PathIntegrator::new(props.get_u32_or("depth", 2)?)))
}

fn create_direct_integrator(_props: &Properties) -> Result<Box<dyn Integrator>, SceneLoadError> {
    Ok(Box::new(DirectIntegrator::new()))
}

fn create_albedo_integrator(_props: &Properties) -> Result<Box<dyn Integrator>, SceneLoadError> {
    Ok(Box::new(AlbedoIntegrator::new()))
}

fn create_normals_integrator(props: &Properties) -> Result<Box<dyn Integrator>, SceneLoadError> {
    Ok(Box::new(NormalsIntegrator::new(props.get_bool_or("remap", true)?)))
}

fn sampler_seed(props: &Properties) -> Result<u64, SceneLoadError> {
    let seed = props.get_integer_or("seed", DEFAULT_SEED as i64)?;
    u64::try_from(seed).map_err(|_| SceneLoadError::Parse(format!("{}.seed: {} is negative", props.type_name(), seed)))
}

fn create_halton(props: &Properties) -> Result<Box<dyn Sampler>, SceneLoadError> {
    Ok(Box::new(HaltonSampler::new(sampler_seed(props)?, props.get_u32_or("count", DEFAULT_SAMPLE_COUNT)?)))
}

fn create_independent(props: &Properties) -> Result<Box<dyn Sampler>, SceneLoadError> {
    Ok(Box::new(IndependentSampler::new(sampler_seed(props)?, props.get_u32_or("count", DEFAULT_SAMPLE_COUNT)?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::properties::Property;
    use crate::math::constants::Vector3f;

    #[test]
    fn test_unknown_type_is_reported() {
        let props = Properties::new("velvet");
        match create_bsdf(&props) {
            Err(SceneLoadError::UnknownType(message)) => assert!(message.contains("velvet")),
            _ => panic!("expected an unknown type error"),
        }
    }

    #[test]
    fn test_every_category_is_registered() {
        let table = registry();
        assert_eq!(table.bsdfs.len(), 5);
        assert!(table.lights.contains_key("point") && table.lights.contains_key("directional"));
        assert!(table.samplers.contains_key("halton") && table.samplers.contains_key("independent"));
        assert_eq!(table.integrators.len(), 5);
        assert_eq!(table.cameras.len(), 2);
    }

    #[test]
    fn test_sampler_defaults() {
        let sampler = create_sampler(&Properties::new("halton")).unwrap();
        assert_eq!(sampler.samples_per_pixel(), DEFAULT_SAMPLE_COUNT);

        let mut props = Properties::new("independent");
        props.set("count", Property::Integer(8));
        assert_eq!(create_sampler(&props).unwrap().samples_per_pixel(), 8);
    }

    #[test]
    fn test_missing_required_property() {
        let props = Properties::new("point");
        assert!(matches!(create_light(&props), Err(SceneLoadError::MissingProperty(_))));

        let mut props = Properties::new("point");
        props.set("position", Property::Vector(Vector3f::new(0.0, 1.0, 0.0)));
        props.set("power", Property::Float(10.0));
        assert!(!create_light(&props).unwrap().can_be_intersected());
    }

    #[test]
    fn test_camera_resolution_and_axis() {
        let mut props = Properties::new("perspective");
        props.set("fov", Property::Float(40.0));
        props.set("width", Property::Integer(320));
        props.set("height", Property::Integer(240));
        let camera = create_camera(&props).unwrap();
        assert_eq!(camera.resolution(), Vector2i::new(320, 240));

        props.set("fovAxis", Property::String("z".to_string()));
        assert!(matches!(create_camera(&props), Err(SceneLoadError::Parse(_))));
    }

    #[test]
    fn test_pathtracer_alias() {
        let mut props = Properties::new("pathtracer");
        props.set("depth", Property::Integer(4));
        assert!(create_integrator(&props).is_ok());
    }

    #[test]
    fn test_thinlens_focal_length_fallback() {
        let mut props = Properties::new("thinlens");
        props.set("fov", Property::Float(40.0));
        props.set("radius", Property::Float(0.1));
        match create_camera(&props) {
            Err(SceneLoadError::MissingProperty(name)) => assert_eq!(name, "thinlens.focalDistance"),
            _ => panic!("expected a missing property error"),
        }

        props.set("focal_length", Property::Float(3.0));
        assert!(thinlens_focal_distance(&props).unwrap() == 3.0);
        assert!(create_camera(&props).is_ok());

        props.set("focalDistance", Property::Float(5.0));
        assert!(thinlens_focal_distance(&props).unwrap() == 5.0);
    }
}
