use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::ExtendedColorType;
use image::RgbaImage;
use image::codecs::ico::{IcoEncoder, IcoFrame};

use crate::error::Result;

/// Write a multi-resolution ICO container. Frames are stored in the order
/// given; callers pass them ascending so the smallest is the primary entry.
pub fn write_ico(output: &Path, frames: &[RgbaImage]) -> Result<()> {
    let mut encoded = Vec::with_capacity(frames.len());
    for frame in frames {
        let (width, height) = frame.dimensions();
        encoded.push(IcoFrame::as_png(
            frame.as_raw(),
            width,
            height,
            ExtendedColorType::Rgba8,
        )?);
    }

    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    IcoEncoder::new(writer).encode_images(&encoded)?;
    Ok(())
}
