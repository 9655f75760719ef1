//! Command Line Interface (CLI) layer for FAVGEN.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`). It wires user-provided options to the underlying
//! library functionality exposed via `favgen::api`.
//!
//! If you are embedding FAVGEN into another application, prefer using
//! the high-level `favgen::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
