// Copyright @yucwang 2021

use crate::core::computation_node::ComputationNode;
use crate::core::integrator::Integrator;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f, Vector2i};
use crate::math::spectrum::RGBSpectrum;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Instant;

pub use super::renderer::Renderer;

const BLOCK_SIZE: usize = 64;

pub struct SimpleRenderer {
    integrator: Box<dyn Integrator>,
    sampler: Box<dyn Sampler>,
    show_progress: bool,
}

impl ComputationNode for SimpleRenderer {
    fn to_string(&self) -> String {
        format!("SimpleRenderer: [ integrator: {}, sampler: {} ]",
                self.integrator.to_string(), self.sampler.to_string())
    }
}

impl Renderer for SimpleRenderer {
    fn render(&self, scene: &Scene) -> Bitmap {
        let camera: &dyn Sensor = match scene.camera() {
            Some(camera) => camera.as_ref(),
            None => {
                log::error!("Scene has no camera, nothing to render");
                return Bitmap::new(0, 0);
            }
        };

        let resolution = camera.resolution();
        let (width, height) = (resolution.x.max(0) as usize, resolution.y.max(0) as usize);
        if width == 0 || height == 0 {
            return Bitmap::new(0, 0);
        }

        let blocks_x = (width + BLOCK_SIZE - 1) / BLOCK_SIZE;
        let blocks_y = (height + BLOCK_SIZE - 1) / BLOCK_SIZE;
        let total_blocks = blocks_x * blocks_y;

        let progress = if self.show_progress {
            ProgressBar::new(total_blocks as u64)
        } else {
            ProgressBar::hidden()
        };
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} blocks")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let next_block = Arc::new(AtomicUsize::new(0));
        let thread_count = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(total_blocks);
        log::info!("Rendering {}x{} at {} spp on {} threads",
                   width, height, self.sampler.samples_per_pixel(), thread_count);
        let start = Instant::now();

        let (tx, rx) = mpsc::channel::<(usize, usize, usize, usize, Vec<RGBSpectrum>)>();
        let mut bitmap = Bitmap::new(width, height);

        thread::scope(|scope| {
            for _ in 0..thread_count {
                let next_block = Arc::clone(&next_block);
                let tx = tx.clone();
                let mut sampler = self.sampler.clone_box();
                scope.spawn(move || {
                    loop {
                        let block_index = next_block.fetch_add(1, Ordering::Relaxed);
                        if block_index >= total_blocks {
                            break;
                        }

                        let x0 = (block_index % blocks_x) * BLOCK_SIZE;
                        let y0 = (block_index / blocks_x) * BLOCK_SIZE;
                        let x1 = (x0 + BLOCK_SIZE).min(width);
                        let y1 = (y0 + BLOCK_SIZE).min(height);

                        let mut block = Vec::with_capacity((x1 - x0) * (y1 - y0));
                        for y in y0..y1 {
                            for x in x0..x1 {
                                block.push(self.render_pixel(scene, camera, sampler.as_mut(), x, y));
                            }
                        }
                        if tx.send((x0, y0, x1, y1, block)).is_err() {
                            break;
                        }
                    }
                });
            }

            drop(tx);
            for (x0, y0, x1, y1, block) in rx.iter() {
                for y in y0..y1 {
                    for x in x0..x1 {
                        bitmap[(x, y)] = block[(x - x0) + (x1 - x0) * (y - y0)];
                    }
                }
                progress.inc(1);
            }
        });
        progress.finish_and_clear();

        log::info!("Rendering finished in {:.2}s", start.elapsed().as_secs_f64());
        bitmap
    }
}

impl SimpleRenderer {
    pub fn new(integrator: Box<dyn Integrator>, sampler: Box<dyn Sampler>) -> Self {
        Self { integrator, sampler, show_progress: true }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.sampler.samples_per_pixel().max(1)
    }

    // Average estimate of pixel `(x, y)`. Every sample reseeds the sampler,
    // so the result only depends on the pixel and the sampler's seed.
    pub fn render_pixel(&self,
                        scene: &Scene,
                        camera: &dyn Sensor,
                        sampler: &mut dyn Sampler,
                        x: usize,
                        y: usize) -> RGBSpectrum {
        let resolution = camera.resolution();
        let (width, height) = (resolution.x as Float, resolution.y as Float);
        let pixel = Vector2i::new(x as i32, y as i32);
        let spp = self.samples_per_pixel();

        let mut color = RGBSpectrum::black();
        for sample_index in 0..spp {
            sampler.seed_pixel(pixel, sample_index);
            let offset = sampler.next_2d();
            let normalized = Vector2f::new(
                2.0 * (x as Float + offset.x) / width - 1.0,
                -(2.0 * (y as Float + offset.y) / height - 1.0),
            );
            let camera_sample = camera.sample(&normalized, sampler);
            color += camera_sample.weight * self.integrator.li(scene, &camera_sample.ray, sampler);
        }
        color / spp as Float
    }
}
