pub mod canvas;
pub mod export;
pub mod resize;
