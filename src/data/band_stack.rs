//! Band-stacked raster data.

use ndarray::{Array3, ArrayBase, ArrayView2, ArrayView3, Axis, Data, Ix3};

use crate::error::{FeatureError, Result};

/// A multi-band raster stored as a 3-D array indexed `[band, row, col]`.
///
/// Every pixel has the same number of bands. Values are held as `f64`
/// regardless of the source data type so that norms and ratios are computed
/// in double precision.
#[derive(Debug, Clone, PartialEq)]
pub struct BandStack {
    data: Array3<f64>,
}

impl BandStack {
    /// Wrap an existing `[band, row, col]` array.
    pub fn new(data: Array3<f64>) -> Self {
        Self { data }
    }

    /// Convert any numeric `[band, row, col]` array into a band stack.
    ///
    /// The source array is copied; it is never modified.
    pub fn from_array<S, T>(array: &ArrayBase<S, Ix3>) -> Self
    where
        S: Data<Elem = T>,
        T: Copy + Into<f64>,
    {
        Self::new(array.mapv(Into::<f64>::into))
    }

    /// Build a band stack from flattened bands.
    ///
    /// Each band is a row-major `rows * cols` buffer, the layout produced by
    /// band-per-vector hyperspectral loaders.
    ///
    /// # Errors
    /// Returns [`FeatureError::InvalidShape`] if any band has the wrong length
    /// or if `rows * cols` does not fit in `usize`.
    pub fn from_bands<T>(bands: &[Vec<T>], rows: usize, cols: usize) -> Result<Self>
    where
        T: Copy + Into<f64>,
    {
        let pixel_count = rows.checked_mul(cols).ok_or_else(|| {
            FeatureError::invalid_shape(format!("{}x{} raster overflows usize", rows, cols))
        })?;
        let mut values: Vec<f64> = Vec::with_capacity(bands.len().saturating_mul(pixel_count));

        for (index, band) in bands.iter().enumerate() {
            if band.len() != pixel_count {
                return Err(FeatureError::invalid_shape(format!(
                    "band {} has {} values, expected {} ({}x{})",
                    index,
                    band.len(),
                    pixel_count,
                    rows,
                    cols
                )));
            }
            values.extend(band.iter().map(|&v| v.into()));
        }

        let data = Array3::from_shape_vec((bands.len(), rows, cols), values)
            .map_err(|e| FeatureError::invalid_shape(e.to_string()))?;

        log::trace!(
            "BandStack: built {}x{} raster with {} bands",
            rows,
            cols,
            bands.len()
        );

        Ok(Self::new(data))
    }

    /// Number of spectral bands.
    pub fn num_bands(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    /// Number of pixel rows.
    pub fn rows(&self) -> usize {
        self.data.len_of(Axis(1))
    }

    /// Number of pixel columns.
    pub fn cols(&self) -> usize {
        self.data.len_of(Axis(2))
    }

    /// Total number of pixels per band.
    pub fn pixel_count(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Get a view of a single band, or `None` if the index is out of range.
    pub fn band(&self, index: usize) -> Option<ArrayView2<'_, f64>> {
        (index < self.num_bands()).then(|| self.data.index_axis(Axis(0), index))
    }

    /// Borrow the underlying `[band, row, col]` array.
    pub fn view(&self) -> ArrayView3<'_, f64> {
        self.data.view()
    }

    /// Consume the stack and return the underlying array.
    pub fn into_inner(self) -> Array3<f64> {
        self.data
    }
}

impl From<Array3<f64>> for BandStack {
    fn from(data: Array3<f64>) -> Self {
        Self::new(data)
    }
}
