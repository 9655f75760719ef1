#![doc = r##"
FAVGEN — a one-shot favicon asset generator.

This crate turns a single source image into the fixed favicon set a web
site's public directory expects: six PNG sizes, a multi-resolution
`favicon.ico`, `site.webmanifest`, and `browserconfig.xml`. It powers the
FAVGEN CLI and can be embedded in your own Rust applications.

The pipeline is strictly linear and stateless: decode to RGBA, pad to a
centered square over a transparent or solid fill, resample to each target
size with Lanczos3, and write everything into one output directory.

Quick start: generate a set from a file
---------------------------------------
```rust,no_run
use std::path::Path;
use favgen::{generate_to_dir, Background, FaviconParams};

fn main() -> favgen::Result<()> {
    let params = FaviconParams {
        background: Background::parse("#050505")?,
        theme_color: "#050505".to_string(),
        background_color: "#050505".to_string(),
    };

    let out = generate_to_dir(Path::new("logo.png"), Path::new("public"), &params)?;
    println!("favicons written to {}", out.display());
    Ok(())
}
```

From an in-memory bitmap
------------------------
```rust,no_run
use std::path::Path;
use favgen::{generate_from_image, FaviconParams};
use image::RgbaImage;

fn main() -> favgen::Result<()> {
    let img = RgbaImage::new(256, 128);
    generate_from_image(&img, Path::new("public"), &FaviconParams::default())
}
```

Error handling
--------------
All public functions return `favgen::Result<T>`; match on `favgen::Error`
to handle specific cases, e.g. an unparseable fill color or a decode
failure.

Output files
------------
`favicon.ico` (16/32/48), `favicon-16x16.png`, `favicon-32x32.png`,
`apple-touch-icon.png` (180), `android-chrome-192x192.png`,
`android-chrome-512x512.png`, `mstile-150x150.png`, `site.webmanifest`,
`browserconfig.xml`.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — `Background` and the fixed size tables.
- [`io`] — source loading and output writers.
- [`error`] — crate-level `Error` and `Result`.
"##]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::params::FaviconParams;
pub use error::{Error, Result};
pub use types::{APP_NAME, APP_SHORT_NAME, Background, ICO_SIZES, PNG_SIZES};

pub use api::{generate_from_image, generate_to_dir};
pub use io::writers::manifest::{ManifestIcon, WebManifest};
