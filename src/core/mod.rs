//! Core processing building blocks: canvas normalization, resize, and the
//! export fan-out. These are internal primitives consumed by the high-level
//! `api` module.
pub mod params;
pub mod processing;
