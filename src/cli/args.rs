use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "favgen", version, about = "FAVGEN CLI")]
pub struct CliArgs {
    /// Source image path (any format decodable to RGBA, at minimum PNG)
    #[arg(long)]
    pub input: PathBuf,

    /// Output directory (e.g., a site's public/ folder)
    #[arg(long, default_value = "favicons_out")]
    pub out: PathBuf,

    /// Canvas padding fill: "transparent" or hex like "#050505"
    #[arg(long, default_value = "transparent")]
    pub bg: String,

    /// theme_color for site.webmanifest and browserconfig tile color
    #[arg(long, default_value = "#050505")]
    pub theme: String,

    /// background_color for site.webmanifest
    #[arg(long, default_value = "#050505")]
    pub background: String,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
