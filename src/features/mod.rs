//! Feature extractors built on the spectral primitives.
//!
//! - `VanillaFeatureExtractor`: mean, standard deviation and variance
//! - `PoolSignatureFeatureExtractor`: band ratios and spectral angle to a
//!   reference swimming pool spectrum

mod float_repr;
mod pool;
mod vanilla;

pub use pool::{PoolFeatures, PoolSignatureFeatureExtractor};
pub use vanilla::{SummaryStatistics, VanillaFeatureExtractor};

#[cfg(test)]
mod tests;
