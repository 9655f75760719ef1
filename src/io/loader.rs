use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::error::Result;

/// Decode the source image and convert it to RGBA8. Any format the `image`
/// crate can decode is accepted; decode failure aborts the run.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)?.to_rgba8();
    info!(
        "Loaded {:?}: {}x{} RGBA",
        path,
        img.width(),
        img.height()
    );
    Ok(img)
}
