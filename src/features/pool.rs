//! Feature extractor for swimming pool detection.

use std::path::Path;

use ndarray::{ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::config::PoolSignatureConfig;
use crate::constants::{BAND_2_INDEX, BAND_3_INDEX, BAND_6_INDEX, POOL_SIGNATURE};
use crate::data::BandStack;
use crate::error::{FeatureError, Result};
use crate::spectral::{
    SpectralAngleMapper, normalized_difference, propagating_max, propagating_min,
};

/// Feature vector produced for one raster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolFeatures {
    /// Maximum of the band 2 / band 6 normalized difference
    #[serde(with = "crate::features::float_repr")]
    pub max_band26_ratio: f64,
    /// Maximum of the band 3 / band 6 normalized difference
    #[serde(with = "crate::features::float_repr")]
    pub max_band36_ratio: f64,
    /// Smallest spectral angle to the pool signature, in radians
    #[serde(with = "crate::features::float_repr")]
    pub min_pool_angle: f64,
}

impl PoolFeatures {
    /// The features as `[max_band26_ratio, max_band36_ratio, min_pool_angle]`.
    pub fn to_array(&self) -> [f64; 3] {
        [
            self.max_band26_ratio,
            self.max_band36_ratio,
            self.min_pool_angle,
        ]
    }
}

/// Compares a raster against a reference pool spectrum and two band ratios.
///
/// Ratio images are not guarded against division by zero: NaN and infinite
/// values propagate into the max reductions. Only the spectral angle maps
/// zero-norm pixels to a defined value.
#[derive(Debug, Clone)]
pub struct PoolSignatureFeatureExtractor {
    mapper: SpectralAngleMapper,
    band_2_index: usize,
    band_3_index: usize,
    band_6_index: usize,
}

impl PoolSignatureFeatureExtractor {
    /// Create an extractor using [`POOL_SIGNATURE`] and the default band indices.
    pub fn new() -> Self {
        Self {
            mapper: SpectralAngleMapper::new(POOL_SIGNATURE),
            band_2_index: BAND_2_INDEX,
            band_3_index: BAND_3_INDEX,
            band_6_index: BAND_6_INDEX,
        }
    }

    /// Create an extractor from a configured signature and band indices.
    ///
    /// # Errors
    /// Returns [`FeatureError::InvalidShape`] if the config does not validate.
    pub fn from_config(config: &PoolSignatureConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            mapper: SpectralAngleMapper::new(config.signature.as_slice()),
            band_2_index: config.band_2_index,
            band_3_index: config.band_3_index,
            band_6_index: config.band_6_index,
        })
    }

    /// The reference pool spectrum.
    pub fn signature(&self) -> ArrayView1<'_, f64> {
        self.mapper.members().view().index_axis_move(Axis(0), 0)
    }

    /// Compute `[max(band26), max(band36), min(pool angle)]` for a raster.
    ///
    /// `raster_file` names the source image. It does not affect the result.
    ///
    /// # Errors
    /// - [`FeatureError::DimensionMismatch`] if the raster band count differs
    ///   from the signature length. This is checked before any band is read.
    /// - [`FeatureError::EmptyRaster`] if the raster has no pixels.
    pub fn extract(&self, data: &BandStack, raster_file: impl AsRef<Path>) -> Result<PoolFeatures> {
        log::trace!(
            "PoolSignatureFeatureExtractor: extracting features for {}",
            raster_file.as_ref().display()
        );

        let pool_angles = self.mapper.compute(data)?;

        let band26_ratio = normalized_difference(
            band(data, self.band_2_index),
            band(data, self.band_6_index),
        );
        let band36_ratio = normalized_difference(
            band(data, self.band_3_index),
            band(data, self.band_6_index),
        );

        let features = PoolFeatures {
            max_band26_ratio: propagating_max(&band26_ratio).ok_or(FeatureError::EmptyRaster)?,
            max_band36_ratio: propagating_max(&band36_ratio).ok_or(FeatureError::EmptyRaster)?,
            min_pool_angle: propagating_min(&pool_angles).ok_or(FeatureError::EmptyRaster)?,
        };

        log::debug!("PoolSignatureFeatureExtractor: {:?}", features);
        Ok(features)
    }
}

impl Default for PoolSignatureFeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-index band access. The band count has already been matched
/// against the signature, which every configured index addresses.
fn band(data: &BandStack, index: usize) -> ArrayView2<'_, f64> {
    data.view().index_axis_move(Axis(0), index)
}
