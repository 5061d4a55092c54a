// Copyright 2020 TwoCookingMice

use lightpath::core::scene_loader::{load_scene, RenderOverrides};
use lightpath::io::exr_utils;
use lightpath::renderers::simple::{Renderer, SimpleRenderer};

use std::env;
use std::process;

fn run(input_path: &str, output_path: &str, overrides: &RenderOverrides) -> Result<(), String> {
    let mut description = load_scene(input_path).map_err(|e| format!("failed to load {}: {}", input_path, e))?;
    description.apply_overrides(overrides);

    let integrator = description.build_integrator().map_err(|e| e.to_string())?;
    let sampler = description.build_sampler().map_err(|e| e.to_string())?;
    let renderer = SimpleRenderer::new(integrator, sampler);

    let image = renderer.render(&description.scene);
    exr_utils::write_exr_to_file(&image, output_path)
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <scene.xml> <output.exr> [--spp N] [--depth N] [--seed N]", args[0]);
        process::exit(1);
    }

    let overrides = match RenderOverrides::from_args(&args[3..]) {
        Ok(overrides) => overrides,
        Err(message) => {
            log::error!("{}", message);
            process::exit(1);
        }
    };

    if let Err(message) = run(&args[1], &args[2], &overrides) {
        log::error!("{}", message);
        process::exit(1);
    }
}
