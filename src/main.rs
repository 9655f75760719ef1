//! FAVGEN CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! generation pipeline, and exit with appropriate status. For programmatic
//! use, prefer the library API (`favgen::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
