//! High-level, ergonomic library API: generate the full favicon set from a
//! file on disk or from an in-memory bitmap. Prefer these entrypoints over
//! the low-level processing modules when embedding FAVGEN.
use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::core::params::FaviconParams;
use crate::core::processing::canvas::pad_to_square;
use crate::core::processing::export::export_favicons;
use crate::error::Result;
use crate::io::loader::load_rgba;

/// Generate the complete favicon set from a source image file.
///
/// Loads `input`, pads it to a centered square over the configured fill,
/// and writes all output files into `out_dir` (created if absent).
/// Returns the canonicalized output directory.
pub fn generate_to_dir(input: &Path, out_dir: &Path, params: &FaviconParams) -> Result<PathBuf> {
    let img = load_rgba(input)?;
    generate_from_image(&img, out_dir, params)?;
    Ok(fs::canonicalize(out_dir)?)
}

/// Generate the complete favicon set from an already-decoded RGBA bitmap.
pub fn generate_from_image(img: &RgbaImage, out_dir: &Path, params: &FaviconParams) -> Result<()> {
    let canvas = pad_to_square(img, params.background);
    export_favicons(&canvas, out_dir, params)
}
