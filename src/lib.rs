//! Spectral features for pixel classification.
//!
//! Computes per-pixel spectral angles between a multi-band raster and a set
//! of reference spectra, plus small feature vectors built on top of them
//! (summary statistics and a swimming pool signature).
//!
//! Rasters are supplied as `[band, row, col]` arrays by the caller; loading,
//! reprojection and classification happen elsewhere.
//!
//! ```rust
//! use ndarray::array;
//! use spectral_features::{BandStack, spectral_angles};
//!
//! let data = BandStack::new(array![[[1.0, 0.0]], [[0.0, 0.0]]]);
//! let angles = spectral_angles(&data, [1.0, 0.0]).unwrap();
//! assert_eq!(angles.shape(), &[1, 1, 2]);
//! assert_eq!(angles[[0, 0, 0]], 0.0);
//! ```

pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod features;
pub mod spectral;

pub use config::{ExtractorConfig, PoolSignatureConfig};
pub use data::{BandStack, MemberSpectra};
pub use error::{FeatureError, Result};
pub use features::{
    PoolFeatures, PoolSignatureFeatureExtractor, SummaryStatistics, VanillaFeatureExtractor,
};
pub use spectral::{SpectralAngleMapper, spectral_angles};
