use std::path::PathBuf;

use clap::Parser;

/// Command-line configuration, parsed once at startup.
#[derive(Parser, Debug, Clone)]
#[command(name = "vhi-explorer")]
#[command(about = "Explore VCI/TCI/VHI vegetation health indices by region, year and week")]
#[command(version)]
pub struct Cli {
    /// CSV file with Year, Week, area, SMN, SMT, VCI, TCI, VHI columns
    #[arg(default_value = "combined_data.csv")]
    pub data: PathBuf,

    /// Initial window width in points
    #[arg(long, default_value_t = 1200.0)]
    pub width: f32,

    /// Initial window height in points
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,
}
