use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::error::NormplotError;
use crate::histogram::Histogram;

const CHART_SIZE: (u32, u32) = (1024, 768);

/// Renders the histogram bars and the theoretical density curve on one set
/// of axes and writes the chart as a PNG image.
pub fn render(
    path: &Path,
    histogram: &Histogram,
    curve: &[(f64, f64)],
) -> Result<(), NormplotError> {
    draw(path, histogram, curve).map_err(|e| NormplotError::Render(e.to_string()))
}

fn draw(path: &Path, histogram: &Histogram, curve: &[(f64, f64)]) -> Result<(), Box<dyn Error>> {
    let (x_min, x_max) = histogram.x_range();
    let y_max = histogram
        .densities()
        .iter()
        .copied()
        .chain(curve.iter().map(|&(_, y)| y))
        .fold(0.0f64, f64::max)
        .max(1e-9);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Normal Distribution", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0f64..(y_max * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("Value")
        .y_desc("Frequency")
        .x_labels(10)
        .draw()?;

    chart.draw_series(histogram.buckets().map(|(left, right, density)| {
        Rectangle::new([(left, 0.0), (right, density)], GREEN.mix(0.6).filled())
    }))?;

    chart.draw_series(LineSeries::new(
        curve.iter().copied(),
        RED.stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}
