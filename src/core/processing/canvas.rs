use image::{RgbaImage, imageops};
use tracing::info;

use crate::types::Background;

/// Pad an image to a square canvas, centered. Content is never cropped or
/// scaled; the canvas side is the larger of the input's two dimensions and
/// the source is alpha-composited over the requested fill.
pub fn pad_to_square(img: &RgbaImage, background: Background) -> RgbaImage {
    let (width, height) = img.dimensions();
    let side = width.max(height);
    let pad_left = (side - width) / 2;
    let pad_top = (side - height) / 2;

    info!(
        "Normalizing canvas: {}x{} -> {}x{} (offset {},{})",
        width, height, side, side, pad_left, pad_top
    );

    let mut canvas = RgbaImage::from_pixel(side, side, background.fill());
    imageops::overlay(&mut canvas, img, pad_left as i64, pad_top as i64);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn opaque_red(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([200, 10, 10, 255]))
    }

    #[test]
    fn wide_input_pads_to_square_side_max() {
        let canvas = pad_to_square(&opaque_red(10, 4), Background::Transparent);
        assert_eq!(canvas.dimensions(), (10, 10));
    }

    #[test]
    fn tall_input_pads_to_square_side_max() {
        let canvas = pad_to_square(&opaque_red(3, 7), Background::Transparent);
        assert_eq!(canvas.dimensions(), (7, 7));
    }

    #[test]
    fn content_is_centered_and_unscaled() {
        let canvas = pad_to_square(&opaque_red(4, 10), Background::Transparent);
        // offset = floor((10 - 4) / 2) = 3
        assert_eq!(canvas.get_pixel(3, 0), &Rgba([200, 10, 10, 255]));
        assert_eq!(canvas.get_pixel(6, 9), &Rgba([200, 10, 10, 255]));
        // padding stays fully transparent
        assert_eq!(canvas.get_pixel(0, 0).0[3], 0);
        assert_eq!(canvas.get_pixel(9, 9).0[3], 0);
    }

    #[test]
    fn odd_padding_floors_the_offset() {
        let canvas = pad_to_square(&opaque_red(5, 2), Background::Transparent);
        // offset = floor((5 - 2) / 2) = 1: row 0 padded, rows 1-2 content
        assert_eq!(canvas.get_pixel(0, 0).0[3], 0);
        assert_eq!(canvas.get_pixel(0, 1), &Rgba([200, 10, 10, 255]));
        assert_eq!(canvas.get_pixel(0, 2), &Rgba([200, 10, 10, 255]));
        assert_eq!(canvas.get_pixel(0, 3).0[3], 0);
    }

    #[test]
    fn square_input_is_a_no_op_over_transparent() {
        let img = opaque_red(6, 6);
        let canvas = pad_to_square(&img, Background::Transparent);
        assert_eq!(canvas, img);
    }

    #[test]
    fn solid_background_is_opaque() {
        let bg = Background::parse("#050405").unwrap();
        let canvas = pad_to_square(&opaque_red(2, 6), bg);
        let corner = canvas.get_pixel(0, 0);
        assert_eq!(corner, &Rgba([0x05, 0x04, 0x05, 255]));
    }

    #[test]
    fn source_alpha_composites_over_solid_fill() {
        // Fully transparent source pixel leaves the fill untouched
        let img = RgbaImage::from_pixel(4, 2, Rgba([255, 255, 255, 0]));
        let bg = Background::parse("#102030").unwrap();
        let canvas = pad_to_square(&img, bg);
        assert_eq!(canvas.get_pixel(2, 2), &Rgba([0x10, 0x20, 0x30, 255]));
    }
}
