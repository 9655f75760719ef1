use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Resize a square RGBA canvas to an exact target side using Lanczos3
/// convolution. Alpha is premultiplied for the convolution and divided back
/// out by the resizer. Pure: the input is not mutated and the result is
/// deterministic for a given input/size pair.
pub fn resize_square(canvas: &RgbaImage, target_size: u32) -> Result<RgbaImage> {
    let (width, height) = canvas.dimensions();
    debug!(
        "Resizing {}x{} -> {}x{}",
        width, height, target_size, target_size
    );

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(width, height, canvas.as_raw().clone(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target_size, target_size, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_size, target_size, dst_image.into_vec()).ok_or_else(|| {
        Error::Processing(format!(
            "resized buffer does not match {target_size}x{target_size} RGBA"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn output_has_exact_target_dimensions() {
        let canvas = RgbaImage::from_pixel(100, 100, Rgba([9, 9, 9, 255]));
        for size in [16u32, 48, 180, 512] {
            let out = resize_square(&canvas, size).unwrap();
            assert_eq!(out.dimensions(), (size, size));
        }
    }

    #[test]
    fn uniform_canvas_stays_uniform() {
        let canvas = RgbaImage::from_pixel(64, 64, Rgba([120, 40, 200, 255]));
        let out = resize_square(&canvas, 32).unwrap();
        for pixel in out.pixels() {
            for (got, want) in pixel.0.iter().zip([120u8, 40, 200, 255]) {
                assert!(got.abs_diff(want) <= 1, "pixel {:?} drifted", pixel.0);
            }
        }
    }

    #[test]
    fn resize_is_deterministic_and_non_mutating() {
        let mut canvas = RgbaImage::new(40, 40);
        for (x, y, pixel) in canvas.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 6) as u8, (y * 6) as u8, 77, 255]);
        }
        let before = canvas.clone();
        let a = resize_square(&canvas, 16).unwrap();
        let b = resize_square(&canvas, 16).unwrap();
        assert_eq!(a, b);
        assert_eq!(canvas, before);
    }

    #[test]
    fn upscale_is_supported() {
        let canvas = RgbaImage::from_pixel(20, 20, Rgba([1, 2, 3, 255]));
        let out = resize_square(&canvas, 192).unwrap();
        assert_eq!(out.dimensions(), (192, 192));
    }
}
