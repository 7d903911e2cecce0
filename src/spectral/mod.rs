//! Per-pixel spectral similarity and band ratio computations.
//!
//! This module provides:
//! - `SpectralAngleMapper`: angle between every pixel and a set of member spectra
//! - `normalized_difference`: `(a - b) / (a + b)` band ratio images
//! - NaN-propagating min/max reductions used to summarize feature images

mod angle;
mod ratio;

pub use angle::{SpectralAngleMapper, spectral_angles};
pub use ratio::{normalized_difference, propagating_max, propagating_min};
