// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::texture::Texture;
use crate::math::constants::{Float, Vector2f};
use crate::math::spectrum::RGBSpectrum;
use exr::prelude::*;
use image::io::Reader as ImageReader;
use image::GenericImageView;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    Bilinear,
    Nearest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderMode {
    Repeat,
    Clamp,
}

#[derive(Clone, Debug)]
pub struct ImageData {
    width: usize,
    height: usize,
    pixels: Vec<RGBSpectrum>,
}

fn srgb_to_linear(v: Float) -> Float {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

impl ImageData {
    pub fn new(width: usize, height: usize, pixels: Vec<RGBSpectrum>) -> std::result::Result<Self, String> {
        if width == 0 || height == 0 || pixels.len() != width * height {
            return Err(format!("invalid image data: {}x{} with {} pixels", width, height, pixels.len()));
        }
        Ok(Self { width, height, pixels })
    }

    pub fn from_exr(path: &str) -> std::result::Result<Self, String> {
        let image = read()
            .no_deep_data()
            .largest_resolution_level()
            .rgba_channels(
                |resolution, _| {
                    let width = resolution.width();
                    let height = resolution.height();
                    ImageData { width,
                                height,
                                pixels: vec![RGBSpectrum::black(); width * height] }
                },
                |image, position, (r, g, b, _a): (f32, f32, f32, f32)| {
                    let idx = position.x() + image.width * position.y();
                    image.pixels[idx] = RGBSpectrum::new(r, g, b);
                },
            )
            .first_valid_layer()
            .all_attributes()
            .from_file(path)
            .map_err(|e| format!("failed to read exr {}: {}", path, e))?;

        let data = image.layer_data.channel_data.pixels;
        Self::new(data.width, data.height, data.pixels)
    }

    pub fn from_image(path: &str) -> std::result::Result<Self, String> {
        let img = ImageReader::open(path)
            .map_err(|e| format!("failed to open image {}: {}", path, e))?
            .decode()
            .map_err(|e| format!("failed to decode image {}: {}", path, e))?;

        let (width, height) = img.dimensions();
        let rgb = img.to_rgb32f();
        let pixels = rgb
            .pixels()
            .map(|p| RGBSpectrum::new(srgb_to_linear(p[0]), srgb_to_linear(p[1]), srgb_to_linear(p[2])))
            .collect();
        Self::new(width as usize, height as usize, pixels)
    }

    pub fn from_file(path: &str) -> std::result::Result<Self, String> {
        let ext = Path::new(path)
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "exr" => Self::from_exr(path),
            "jpg" | "jpeg" | "png" => Self::from_image(path),
            _ => Err(format!("unsupported texture format: {}", ext)),
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub(crate) fn pixel_at(&self, x: usize, y: usize) -> RGBSpectrum {
        self.pixels[x + self.width * y]
    }
}

pub struct ImageTexture {
    image: ImageData,
    exposure: Float,
    filter_mode: FilterMode,
    border_mode: BorderMode,
}

impl ImageTexture {
    pub fn new(image: ImageData, exposure: Float, filter_mode: FilterMode, border_mode: BorderMode) -> Self {
        Self { image, exposure, filter_mode, border_mode }
    }

    fn wrap_coord(&self, value: Float) -> Float {
        match self.border_mode {
            BorderMode::Repeat => value - value.floor(),
            BorderMode::Clamp => value.clamp(0.0, 1.0),
        }
    }

    fn wrap_index(&self, idx: isize, size: usize) -> usize {
        let n = size as isize;
        match self.border_mode {
            BorderMode::Repeat => idx.rem_euclid(n) as usize,
            BorderMode::Clamp => idx.clamp(0, n - 1) as usize,
        }
    }

    fn sample_nearest(&self, u: Float, v: Float) -> RGBSpectrum {
        let (width, height) = self.image.dimensions();
        let x = ((u * width as Float) as usize).min(width - 1);
        let y = (((1.0 - v) * height as Float) as usize).min(height - 1);
        self.image.pixel_at(x, y)
    }

    fn sample_bilinear(&self, u: Float, v: Float) -> RGBSpectrum {
        let (width, height) = self.image.dimensions();
        let x = u * (width as Float) - 0.5;
        let y = (1.0 - v) * (height as Float) - 0.5;

        let x0 = x.floor() as isize;
        let y0 = y.floor() as isize;
        let tx = x - x0 as Float;
        let ty = y - y0 as Float;

        let x0u = self.wrap_index(x0, width);
        let y0u = self.wrap_index(y0, height);
        let x1u = self.wrap_index(x0 + 1, width);
        let y1u = self.wrap_index(y0 + 1, height);

        let top = self.image.pixel_at(x0u, y0u) * (1.0 - tx) + self.image.pixel_at(x1u, y0u) * tx;
        let bottom = self.image.pixel_at(x0u, y1u) * (1.0 - tx) + self.image.pixel_at(x1u, y1u) * tx;
        top * (1.0 - ty) + bottom * ty
    }
}

impl ComputationNode for ImageTexture {
    fn to_string(&self) -> String {
        let (width, height) = self.image.dimensions();
        format!("ImageTexture: [ size: {}x{}, exposure: {}, filter: {:?}, border: {:?} ]",
                width, height, self.exposure, self.filter_mode, self.border_mode)
    }
}

impl Texture for ImageTexture {
    fn eval(&self, uv: Vector2f) -> RGBSpectrum {
        let u = self.wrap_coord(uv.x);
        let v = self.wrap_coord(uv.y);
        let value = match self.filter_mode {
            FilterMode::Bilinear => self.sample_bilinear(u, v),
            FilterMode::Nearest => self.sample_nearest(u, v),
        };
        value * self.exposure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: RGBSpectrum, b: RGBSpectrum) {
        assert!((a.to_vector() - b.to_vector()).norm() < 1e-5, "expected {:?} ≈ {:?}", a, b);
    }

    // 2x2 image: top row red, green; bottom row blue, white.
    fn quad() -> ImageData {
        ImageData::new(2, 2, vec![RGBSpectrum::new(1.0, 0.0, 0.0),
                                  RGBSpectrum::new(0.0, 1.0, 0.0),
                                  RGBSpectrum::new(0.0, 0.0, 1.0),
                                  RGBSpectrum::white()]).unwrap()
    }

    #[test]
    fn test_image_nearest_flips_v() {
        let tex = ImageTexture::new(quad(), 1.0, FilterMode::Nearest, BorderMode::Clamp);
        assert_close(tex.eval(Vector2f::new(0.25, 0.75)), RGBSpectrum::new(1.0, 0.0, 0.0));
        assert_close(tex.eval(Vector2f::new(0.75, 0.75)), RGBSpectrum::new(0.0, 1.0, 0.0));
        assert_close(tex.eval(Vector2f::new(0.25, 0.25)), RGBSpectrum::new(0.0, 0.0, 1.0));
        assert_close(tex.eval(Vector2f::new(1.0, 0.0)), RGBSpectrum::white());
    }

    #[test]
    fn test_image_bilinear_center_and_exposure() {
        let tex = ImageTexture::new(quad(), 2.0, FilterMode::Bilinear, BorderMode::Clamp);
        assert_close(tex.eval(Vector2f::new(0.5, 0.5)), RGBSpectrum::new(1.0, 1.0, 1.0));
        assert_close(tex.eval(Vector2f::new(0.25, 0.75)), RGBSpectrum::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_image_repeat_border() {
        let tex = ImageTexture::new(quad(), 1.0, FilterMode::Nearest, BorderMode::Repeat);
        assert_close(tex.eval(Vector2f::new(1.25, -0.25)), tex.eval(Vector2f::new(0.25, 0.75)));
    }

    #[test]
    fn test_image_data_rejects_bad_size() {
        assert!(ImageData::new(2, 2, vec![RGBSpectrum::black(); 3]).is_err());
        assert!(ImageData::from_file("texture.bmp").is_err());
    }
}
