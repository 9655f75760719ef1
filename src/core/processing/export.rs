use std::fs;
use std::path::Path;

use image::RgbaImage;
use tracing::{debug, info};

use crate::core::params::FaviconParams;
use crate::core::processing::resize::resize_square;
use crate::error::Result;
use crate::io::writers::browserconfig::write_browserconfig;
use crate::io::writers::ico::write_ico;
use crate::io::writers::manifest::write_manifest;
use crate::types::{ICO_SIZES, PNG_SIZES};

/// Fan the normalized canvas out into the fixed output set: six PNGs, one
/// multi-resolution `favicon.ico`, `site.webmanifest`, and
/// `browserconfig.xml`. Existing files are overwritten; partial output from
/// a failed run is left in place.
pub fn export_favicons(canvas: &RgbaImage, out_dir: &Path, params: &FaviconParams) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    for (name, size) in PNG_SIZES {
        let icon = resize_square(canvas, size)?;
        let path = out_dir.join(name);
        icon.save(&path)?;
        debug!("Wrote {:?} ({}x{})", path, size, size);
    }

    let mut frames = Vec::with_capacity(ICO_SIZES.len());
    for size in ICO_SIZES {
        frames.push(resize_square(canvas, size)?);
    }
    write_ico(&out_dir.join("favicon.ico"), &frames)?;
    debug!("Wrote favicon.ico with {:?} frames", ICO_SIZES);

    write_manifest(out_dir, &params.theme_color, &params.background_color)?;
    write_browserconfig(out_dir, &params.theme_color)?;

    info!(
        "Exported {} PNGs, favicon.ico, site.webmanifest, browserconfig.xml to {:?}",
        PNG_SIZES.len(),
        out_dir
    );
    Ok(())
}
