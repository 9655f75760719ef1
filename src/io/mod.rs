//! I/O layer: source image loading and the output writers for the ICO
//! container, `site.webmanifest`, and `browserconfig.xml`.
pub mod loader;
pub mod writers;
