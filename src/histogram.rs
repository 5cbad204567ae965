use ndarray::Array1;

use crate::error::NormplotError;

/// An area-normalized histogram: the densities are scaled so that the sum
/// of density × bucket width over all buckets is 1.
pub struct Histogram {
    edges: Vec<f64>,
    densities: Vec<f64>,
    bucket_width: f64,
}

impl Histogram {
    pub fn new(samples: &Array1<f64>, bucket_count: usize) -> Result<Self, NormplotError> {
        if bucket_count == 0 {
            return Err(NormplotError::invalid_parameter(
                "bucket count must be positive",
            ));
        }
        if samples.is_empty() {
            return Err(NormplotError::invalid_parameter(
                "cannot build a histogram from zero samples",
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &value in samples.iter() {
            min = min.min(value);
            max = max.max(value);
        }
        // A zero-width range (all samples equal) is widened by half a unit
        // on each side, matching the usual histogram convention.
        if min == max {
            min -= 0.5;
            max += 0.5;
        }

        let bucket_width = (max - min) / bucket_count as f64;
        let mut counts = vec![0usize; bucket_count];
        for &value in samples.iter() {
            let mut index = ((value - min) / bucket_width) as usize;
            // The sample at the top edge belongs to the last bucket.
            if index >= bucket_count {
                index = bucket_count - 1;
            }
            counts[index] += 1;
        }

        let total = samples.len() as f64;
        let densities = counts
            .iter()
            .map(|&count| count as f64 / (total * bucket_width))
            .collect();
        let edges = (0..=bucket_count)
            .map(|i| min + i as f64 * bucket_width)
            .collect();

        Ok(Histogram {
            edges,
            densities,
            bucket_width,
        })
    }

    /// Bucket boundaries, one more than the number of buckets.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    pub fn bucket_width(&self) -> f64 {
        self.bucket_width
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }

    /// Iterates buckets as (left edge, right edge, density).
    pub fn buckets(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.edges
            .windows(2)
            .zip(self.densities.iter())
            .map(|(edge_pair, &density)| (edge_pair[0], edge_pair[1], density))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_buckets() {
        let samples = Array1::from_vec(vec![0.0, 1.0, 2.0]);
        assert!(matches!(
            Histogram::new(&samples, 0),
            Err(NormplotError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn edges_span_the_sample_range() {
        let samples = Array1::from_vec(vec![-1.0, 0.25, 0.5, 3.0]);
        let histogram = Histogram::new(&samples, 4).unwrap();
        assert_eq!(histogram.edges().len(), 5);
        let (low, high) = histogram.x_range();
        assert!((low - -1.0).abs() < 1e-12);
        assert!((high - 3.0).abs() < 1e-12);
        assert!((histogram.bucket_width() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn total_area_is_one() {
        let samples = Array1::from_vec(vec![
            -0.3, -0.2, -0.1, 0.0, 0.0, 0.05, 0.1, 0.1, 0.2, 0.4,
        ]);
        let histogram = Histogram::new(&samples, 7).unwrap();
        let area: f64 = histogram
            .densities()
            .iter()
            .map(|d| d * histogram.bucket_width())
            .sum();
        assert!((area - 1.0).abs() < 1e-9, "area was {}", area);
    }

    #[test]
    fn sample_at_the_top_edge_lands_in_the_last_bucket() {
        let samples = Array1::from_vec(vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        let histogram = Histogram::new(&samples, 4).unwrap();
        assert!((histogram.densities()[3] - 2.0 / (5.0 * 1.0)).abs() < 1e-12);
    }

    #[test]
    fn identical_samples_widen_the_range() {
        let samples = Array1::from_vec(vec![2.0; 5]);
        let histogram = Histogram::new(&samples, 3).unwrap();
        let (low, high) = histogram.x_range();
        assert!((low - 1.5).abs() < 1e-12);
        assert!((high - 2.5).abs() < 1e-12);
        let area: f64 = histogram
            .densities()
            .iter()
            .map(|d| d * histogram.bucket_width())
            .sum();
        assert!((area - 1.0).abs() < 1e-9);
    }
}
