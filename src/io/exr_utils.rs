/* Copyright 2020 @TwoCookingMice */

use crate::math::bitmap::Bitmap;

use exr::prelude::*;

pub fn write_exr_to_file(image: &Bitmap, file_path: &str) -> std::result::Result<(), String> {
    log::info!("Writing {}x{} OpenEXR image to {}", image.width(), image.height(), file_path);

    let width = image.width();
    let pixels = image.pixels();
    write_rgb_file(file_path, width, image.height(), |x, y| {
        let p = pixels[y * width + x];
        (p.r(), p.g(), p.b())
    }).map_err(|e| format!("failed to write exr {}: {}", file_path, e))?;

    log::info!("EXR written to {}", file_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::spectrum::RGBSpectrum;
    use crate::textures::image::ImageData;

    #[test]
    fn test_write_then_read_back() {
        let mut bitmap = Bitmap::new(3, 2);
        bitmap[(2, 1)] = RGBSpectrum::new(0.5, 1.5, 2.5);

        let path = std::env::temp_dir().join(format!("lightpath_exr_{}.exr", std::process::id()));
        let path = path.to_string_lossy().to_string();
        write_exr_to_file(&bitmap, &path).unwrap();

        let image = ImageData::from_exr(&path).unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.pixel_at(2, 1), RGBSpectrum::new(0.5, 1.5, 2.5));
        assert_eq!(image.pixel_at(0, 0), RGBSpectrum::black());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let bitmap = Bitmap::new(1, 1);
        assert!(write_exr_to_file(&bitmap, "/nonexistent-dir/out.exr").is_err());
    }
}
