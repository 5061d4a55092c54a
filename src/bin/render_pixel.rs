use lightpath::core::scene_loader::{load_scene, RenderOverrides};
use lightpath::core::sensor::Sensor;
use lightpath::renderers::simple::SimpleRenderer;
use std::env;
use std::process;

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: {} <scene.xml> <x> <y> [--spp N] [--depth N] [--seed N]", args[0]);
        process::exit(1);
    }

    let scene_path = &args[1];
    let (x, y) = match (args[2].parse::<usize>(), args[3].parse::<usize>()) {
        (Ok(x), Ok(y)) => (x, y),
        _ => {
            log::error!("Pixel coordinates must be non-negative integers: {} {}", args[2], args[3]);
            process::exit(1);
        }
    };
    let overrides = RenderOverrides::from_args(&args[4..]).unwrap_or_else(|message| {
        log::error!("{}", message);
        process::exit(1);
    });

    let mut description = load_scene(scene_path).unwrap_or_else(|e| {
        log::error!("failed to load scene: {}", e);
        process::exit(1);
    });
    description.apply_overrides(&overrides);

    let (integrator, sampler) = match (description.build_integrator(), description.build_sampler()) {
        (Ok(integrator), Ok(sampler)) => (integrator, sampler),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };

    let camera: &dyn Sensor = match description.scene.camera() {
        Some(camera) => camera.as_ref(),
        None => {
            log::error!("Scene has no camera");
            process::exit(1);
        }
    };
    let resolution = camera.resolution();
    if x >= resolution.x as usize || y >= resolution.y as usize {
        eprintln!("Pixel out of bounds: ({}, {}) for size {}x{}", x, y, resolution.x, resolution.y);
        process::exit(2);
    }

    let mut pixel_sampler = sampler.clone_box();
    let renderer = SimpleRenderer::new(integrator, sampler);
    let rgb = renderer.render_pixel(&description.scene, camera, pixel_sampler.as_mut(), x, y);
    println!(
        "pixel ({}, {}) spp={} -> R {:.6}, G {:.6}, B {:.6}",
        x, y, renderer.samples_per_pixel(), rgb.r(), rgb.g(), rgb.b()
    );
}
