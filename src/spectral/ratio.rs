//! Normalized difference ratios and NaN-aware reductions.

use ndarray::{Array2, ArrayBase, ArrayView2, Data, Dimension, Zip};

/// Compute the normalized difference `(a - b) / (a + b)` for every pixel.
///
/// Division by zero is left to IEEE rules: `0/0` yields NaN and `x/0`
/// yields an infinity. Unlike [`crate::SpectralAngleMapper`], no position is
/// overridden.
///
/// # Panics
/// Panics if the two bands have different shapes.
pub fn normalized_difference(a: ArrayView2<'_, f64>, b: ArrayView2<'_, f64>) -> Array2<f64> {
    Zip::from(&a)
        .and(&b)
        .map_collect(|&a, &b| (a - b) / (a + b))
}

/// Maximum of all values, or `None` if the array is empty.
///
/// Any NaN makes the result NaN.
pub fn propagating_max<S, D>(values: &ArrayBase<S, D>) -> Option<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    values.iter().copied().reduce(|acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.max(v)
        }
    })
}

/// Minimum of all values, or `None` if the array is empty.
///
/// Any NaN makes the result NaN.
pub fn propagating_min<S, D>(values: &ArrayBase<S, D>) -> Option<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    values.iter().copied().reduce(|acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.min(v)
        }
    })
}
