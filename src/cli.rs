use std::path::PathBuf;
use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(short, long, default_value_t = 0.0, help = "Mean of the normal distribution")]
    pub mean: f64,

    #[arg(short, long, default_value_t = 0.1, help = "Standard deviation of the normal distribution")]
    pub stddev: f64,

    #[arg(short = 'n', long, default_value_t = 1000, help = "Number of samples to draw")]
    pub samples: usize,

    #[arg(short, long, default_value_t = 30, help = "Number of histogram buckets")]
    pub buckets: usize,

    #[arg(short, long, default_value = "normal_distribution.png", help = "Path to the output chart image")]
    pub output: PathBuf,
}
