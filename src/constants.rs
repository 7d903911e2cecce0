//! Reference constants for the swimming pool extractor.

/// Reference spectrum of a swimming pool, one value per band (8 bands).
pub const POOL_SIGNATURE: [f64; 8] = [1179.0, 2295.0, 2179.0, 759.0, 628.0, 186.0, 270.0, 110.0];

/// Zero-based index of band 2 (first operand of the band 2/6 ratio)
pub const BAND_2_INDEX: usize = 1;

/// Zero-based index of band 3 (first operand of the band 3/6 ratio)
pub const BAND_3_INDEX: usize = 2;

/// Zero-based index of band 6 (second operand of both ratios)
pub const BAND_6_INDEX: usize = 5;
