use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pst-gen")]
#[command(
    about = "Generate Logic Pro X Channel EQ presets (.pst) for device speaker \
             simulation from a JSON file of device profiles."
)]
pub struct Cli {
    /// Path to the device profiles JSON.
    #[arg(long = "config", default_value = "devices.json")]
    pub config: PathBuf,

    /// Output directory for .pst files.
    #[arg(short = 'o', long = "output", default_value = ".")]
    pub output: PathBuf,

    /// List available device profiles and exit.
    #[arg(long = "list")]
    pub list: bool,

    /// Generate presets only for devices whose name contains this substring
    /// (case-insensitive).
    #[arg(short = 'd', long = "device")]
    pub device: Option<String>,
}
