use std::f64::consts::PI;
use ndarray::Array1;
use rand::distr::Distribution;
use rand::Rng;

use crate::error::NormplotError;

pub struct NormalDistribution {
    mean: f64,
    std_dev: f64,
}

impl NormalDistribution {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, NormplotError> {
        if !mean.is_finite() || !std_dev.is_finite() {
            return Err(NormplotError::invalid_parameter(format!(
                "mean and standard deviation must be finite, got mean = {}, std dev = {}",
                mean, std_dev
            )));
        }
        if std_dev <= 0.0 {
            return Err(NormplotError::invalid_parameter(format!(
                "standard deviation must be positive, got {}",
                std_dev
            )));
        }
        Ok(NormalDistribution { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// The closed-form density 1/(σ√(2π)) · exp(−(x−µ)²/(2σ²)).
    pub fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.mean) / self.std_dev;
        (-0.5 * z * z).exp() / (self.std_dev * (2.0 * PI).sqrt())
    }

    pub fn sample_array<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Array1<f64>, NormplotError> {
        if count == 0 {
            return Err(NormplotError::invalid_parameter(
                "sample count must be positive",
            ));
        }
        let samples = (0..count).map(|_| self.sample(rng)).collect::<Vec<f64>>();
        Ok(Array1::from_vec(samples))
    }
}

impl Distribution<f64> for NormalDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // Box-Muller; u1 is shifted into (0, 1] so the log stays finite.
        let u1: f64 = 1.0 - rng.random::<f64>();
        let u2: f64 = rng.random();
        let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        self.mean + z0 * self.std_dev
    }
}
