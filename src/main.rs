use clap::Parser;
use rand::rng;

use crate::cli::Cli;
use crate::error::NormplotError;
use crate::histogram::Histogram;
use crate::normal_distr::NormalDistribution;

mod chart;
mod cli;
mod error;
mod histogram;
mod normal_distr;

fn main() -> Result<(), NormplotError> {
    let cli = Cli::parse();

    let distribution = NormalDistribution::new(cli.mean, cli.stddev)?;
    let mut rng = rng();
    let samples = distribution.sample_array(&mut rng, cli.samples)?;

    let histogram = Histogram::new(&samples, cli.buckets)?;
    let curve = histogram
        .edges()
        .iter()
        .map(|&x| (x, distribution.pdf(x)))
        .collect::<Vec<(f64, f64)>>();

    chart::render(&cli.output, &histogram, &curve)?;

    println!(
        "Drew {} samples from N({}, {}²): empirical mean = {:.5}, empirical std dev = {:.5}",
        samples.len(),
        distribution.mean(),
        distribution.std_dev(),
        samples.mean().unwrap_or(f64::NAN),
        samples.std(1.0)
    );
    println!("Chart written to {}", cli.output.display());
    Ok(())
}
