//! Configuration file support for feature extractors.
//!
//! The pool signature and the band indices used by the pool extractor are
//! constants by default. A JSON config can override them, for example when
//! a sensor with a different band layout is used.

use serde::{Deserialize, Serialize};

use crate::constants::{BAND_2_INDEX, BAND_3_INDEX, BAND_6_INDEX, POOL_SIGNATURE};
use crate::error::{FeatureError, Result};

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Extractor configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Pool signature extractor settings
    #[serde(default)]
    pub pool: PoolSignatureConfig,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            pool: PoolSignatureConfig::default(),
        }
    }
}

impl ExtractorConfig {
    /// Parse a config from a JSON string.
    ///
    /// # Errors
    /// Fails on malformed JSON, on an unsupported version, or if the pool
    /// settings do not validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;

        if config.version != CONFIG_VERSION {
            return Err(FeatureError::VersionMismatch {
                expected: CONFIG_VERSION,
                found: config.version,
            });
        }

        config.pool.validate()?;
        Ok(config)
    }

    /// Serialize the config to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reference spectrum and band indices for the pool extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSignatureConfig {
    /// Reference pool spectrum, one value per band
    #[serde(default = "default_signature")]
    pub signature: Vec<f64>,

    /// Band index used as the first operand of the first ratio
    #[serde(default = "default_band_2_index")]
    pub band_2_index: usize,

    /// Band index used as the first operand of the second ratio
    #[serde(default = "default_band_3_index")]
    pub band_3_index: usize,

    /// Band index used as the second operand of both ratios
    #[serde(default = "default_band_6_index")]
    pub band_6_index: usize,
}

fn default_signature() -> Vec<f64> {
    POOL_SIGNATURE.to_vec()
}

fn default_band_2_index() -> usize {
    BAND_2_INDEX
}

fn default_band_3_index() -> usize {
    BAND_3_INDEX
}

fn default_band_6_index() -> usize {
    BAND_6_INDEX
}

impl Default for PoolSignatureConfig {
    fn default() -> Self {
        Self {
            signature: default_signature(),
            band_2_index: BAND_2_INDEX,
            band_3_index: BAND_3_INDEX,
            band_6_index: BAND_6_INDEX,
        }
    }
}

impl PoolSignatureConfig {
    /// Check that the signature is non-empty and that every band index
    /// addresses a band of the signature.
    ///
    /// The extractor only accepts rasters whose band count equals the
    /// signature length, so this guarantees the ratio bands exist.
    pub fn validate(&self) -> Result<()> {
        if self.signature.is_empty() {
            return Err(FeatureError::invalid_shape("pool signature has no bands"));
        }

        let num_bands = self.signature.len();
        for (name, index) in [
            ("band_2_index", self.band_2_index),
            ("band_3_index", self.band_3_index),
            ("band_6_index", self.band_6_index),
        ] {
            if index >= num_bands {
                return Err(FeatureError::invalid_shape(format!(
                    "{} = {} is out of range for a {}-band signature",
                    name, index, num_bands
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = ExtractorConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.pool.signature, POOL_SIGNATURE.to_vec());
        assert_eq!(config.pool.band_2_index, 1);
        assert_eq!(config.pool.band_3_index, 2);
        assert_eq!(config.pool.band_6_index, 5);
        assert!(config.pool.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = ExtractorConfig::default();
        config.pool.signature = vec![1.0, 2.0, 3.0, 4.0];
        config.pool.band_6_index = 3;

        let json = config.to_json().expect("serialize");
        let parsed = ExtractorConfig::from_json(&json).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed = ExtractorConfig::from_json(r#"{ "version": 1 }"#).expect("parse");
        assert_eq!(parsed, ExtractorConfig::default());

        let parsed =
            ExtractorConfig::from_json(r#"{ "version": 1, "pool": { "band_3_index": 4 } }"#)
                .expect("parse");
        assert_eq!(parsed.pool.band_3_index, 4);
        assert_eq!(parsed.pool.signature, POOL_SIGNATURE.to_vec());
    }

    #[test]
    fn test_version_mismatch() {
        let err = ExtractorConfig::from_json(r#"{ "version": 2 }"#).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::VersionMismatch {
                expected: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn test_invalid_pool_settings() {
        let err = ExtractorConfig::from_json(r#"{ "version": 1, "pool": { "signature": [] } }"#)
            .unwrap_err();
        assert!(matches!(err, FeatureError::InvalidShape { .. }));

        let config = PoolSignatureConfig {
            signature: vec![1.0, 2.0, 3.0],
            ..PoolSignatureConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("band_6_index"));
    }

    #[test]
    fn test_malformed_json() {
        let err = ExtractorConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, FeatureError::Json(_)));
    }
}
