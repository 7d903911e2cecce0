//! Simplest feature extractor: summary statistics over all values.

use ndarray::{ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};

/// Population mean, standard deviation and variance of a set of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Arithmetic mean
    #[serde(with = "crate::features::float_repr")]
    pub mean: f64,
    /// Population standard deviation (divisor `N`)
    #[serde(with = "crate::features::float_repr")]
    pub std_dev: f64,
    /// Population variance (divisor `N`)
    #[serde(with = "crate::features::float_repr")]
    pub variance: f64,
}

impl SummaryStatistics {
    /// Compute statistics over every element of `data`.
    ///
    /// An empty array produces NaN for all three fields.
    pub fn from_values<S, T, D>(data: &ArrayBase<S, D>) -> Self
    where
        S: Data<Elem = T>,
        T: Copy + Into<f64>,
        D: Dimension,
    {
        let values = data.mapv(Into::<f64>::into);
        let mean = values.mean().unwrap_or(f64::NAN);
        let variance = values
            .mapv(|v| (v - mean) * (v - mean))
            .mean()
            .unwrap_or(f64::NAN);

        Self {
            mean,
            std_dev: variance.sqrt(),
            variance,
        }
    }

    /// The statistics as `[mean, std_dev, variance]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.mean, self.std_dev, self.variance]
    }
}

/// Extracts one [`SummaryStatistics`] feature vector from pixel data.
#[derive(Debug, Clone, Copy, Default)]
pub struct VanillaFeatureExtractor;

impl VanillaFeatureExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Lazily yield the summary statistics of `data`.
    ///
    /// The returned iterator yields exactly one item, computed when it is
    /// first advanced.
    pub fn extract<S, T, D>(self, data: &ArrayBase<S, D>) -> impl Iterator<Item = SummaryStatistics>
    where
        S: Data<Elem = T>,
        T: Copy + Into<f64>,
        D: Dimension,
    {
        std::iter::once_with(move || SummaryStatistics::from_values(data))
    }
}
