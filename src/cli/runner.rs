use tracing::info;

use favgen::api::generate_to_dir;
use favgen::core::params::FaviconParams;
use favgen::types::Background;

use super::args::CliArgs;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    // Color validation happens before anything touches the filesystem
    let background = Background::parse(&args.bg)?;

    let params = FaviconParams {
        background,
        theme_color: args.theme,
        background_color: args.background,
    };

    let out = generate_to_dir(&args.input, &args.out, &params)?;
    info!("Successfully processed: {:?} -> {:?}", args.input, out);
    println!("Done. Favicons generated in: {}", out.display());

    Ok(())
}
