use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "harbor")]
#[command(about = "Profiles a hull and floats it in calm water", long_about = None)]
pub struct Args {
    /// Hull configuration (TOML)
    #[arg(long, default_value = "harbor/configs/cargo.toml")]
    pub config: PathBuf,
    /// Simulation ticks to run after profiling
    #[arg(long, default_value_t = 600)]
    pub ticks: u32,
    /// Fixed timestep in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,
    /// Speeds (m/s) to print a resistance breakdown for
    #[arg(long, value_delimiter = ',', default_values_t = [2.0, 5.0, 8.0])]
    pub report_speeds: Vec<f32>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            config: PathBuf::from("harbor/configs/cargo.toml"),
            ticks: 600,
            dt: 1.0 / 60.0,
            report_speeds: vec![2.0, 5.0, 8.0],
        }
    }
}
