//! Reference member spectra.

use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayView2, Axis, Data, Ix1, Ix2, IxDyn};

use crate::error::{FeatureError, Result};

/// A batch of reference spectra stored as `[member, band]`.
///
/// A single spectrum is always held as a one-row batch. Constructors copy
/// their input, so normalizing a 1-D spectrum never alters the caller's
/// array.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSpectra {
    spectra: Array2<f64>,
}

impl MemberSpectra {
    /// Build from a single spectrum of `n` bands (one member).
    pub fn single<S, T>(spectrum: &ArrayBase<S, Ix1>) -> Self
    where
        S: Data<Elem = T>,
        T: Copy + Into<f64>,
    {
        Self {
            spectra: spectrum.mapv(Into::<f64>::into).insert_axis(Axis(0)),
        }
    }

    /// Build from a `[member, band]` batch.
    pub fn batch<S, T>(spectra: &ArrayBase<S, Ix2>) -> Self
    where
        S: Data<Elem = T>,
        T: Copy + Into<f64>,
    {
        Self {
            spectra: spectra.mapv(Into::<f64>::into),
        }
    }

    /// Build from an array of unknown rank.
    ///
    /// # Errors
    /// Returns [`FeatureError::InvalidShape`] unless the array is 1-D or 2-D.
    pub fn from_dyn<S, T>(spectra: &ArrayBase<S, IxDyn>) -> Result<Self>
    where
        S: Data<Elem = T>,
        T: Copy + Into<f64>,
    {
        let invalid = |e: ndarray::ShapeError| FeatureError::invalid_shape(e.to_string());

        match spectra.ndim() {
            1 => Ok(Self::single(
                &spectra.view().into_dimensionality::<Ix1>().map_err(invalid)?,
            )),
            2 => Ok(Self::batch(
                &spectra.view().into_dimensionality::<Ix2>().map_err(invalid)?,
            )),
            n => Err(FeatureError::invalid_shape(format!(
                "member spectra must be 1-D or 2-D, got {}-D array",
                n
            ))),
        }
    }

    /// Number of member spectra.
    pub fn num_members(&self) -> usize {
        self.spectra.nrows()
    }

    /// Number of bands per member.
    pub fn num_bands(&self) -> usize {
        self.spectra.ncols()
    }

    /// Get a single member spectrum.
    pub fn member(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.num_members()).then(|| self.spectra.row(index))
    }

    /// Euclidean norm of every member spectrum.
    pub fn norms(&self) -> Array1<f64> {
        self.spectra.map_axis(Axis(1), |spectrum| spectrum.dot(&spectrum).sqrt())
    }

    /// Borrow the underlying `[member, band]` array.
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.spectra.view()
    }
}

impl From<Array1<f64>> for MemberSpectra {
    fn from(spectrum: Array1<f64>) -> Self {
        Self {
            spectra: spectrum.insert_axis(Axis(0)),
        }
    }
}

impl From<Array2<f64>> for MemberSpectra {
    fn from(spectra: Array2<f64>) -> Self {
        Self { spectra }
    }
}

impl From<ArrayView1<'_, f64>> for MemberSpectra {
    fn from(spectrum: ArrayView1<'_, f64>) -> Self {
        Self::single(&spectrum)
    }
}

impl From<ArrayView2<'_, f64>> for MemberSpectra {
    fn from(spectra: ArrayView2<'_, f64>) -> Self {
        Self::batch(&spectra)
    }
}

impl From<&[f64]> for MemberSpectra {
    fn from(spectrum: &[f64]) -> Self {
        Self::single(&ArrayView1::from(spectrum))
    }
}

impl From<Vec<f64>> for MemberSpectra {
    fn from(spectrum: Vec<f64>) -> Self {
        Array1::from(spectrum).into()
    }
}

impl<const N: usize> From<[f64; N]> for MemberSpectra {
    fn from(spectrum: [f64; N]) -> Self {
        Self::from(&spectrum[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{ArrayD, array};

    #[test]
    fn test_single_becomes_one_row() {
        let spectrum = array![3.0, 4.0, 0.0];
        let members = MemberSpectra::single(&spectrum);

        assert_eq!(members.num_members(), 1);
        assert_eq!(members.num_bands(), 3);
        assert_eq!(members.view(), array![[3.0, 4.0, 0.0]]);
        // Caller array keeps its 1-D shape
        assert_eq!(spectrum.shape(), &[3]);
    }

    #[test]
    fn test_norms() {
        let members = MemberSpectra::from(array![[3.0, 4.0], [0.0, 0.0], [1.0, 0.0]]);
        assert_eq!(members.norms(), array![5.0, 0.0, 1.0]);
    }

    #[test]
    fn test_from_dyn_ranks() {
        let flat = ArrayD::from_shape_vec(vec![4], vec![1.0f32, 2.0, 3.0, 4.0]).expect("shape");
        let members = MemberSpectra::from_dyn(&flat).expect("1-D accepted");
        assert_eq!(members.num_members(), 1);
        assert_eq!(members.num_bands(), 4);

        let batch = ArrayD::<f64>::zeros(vec![2, 4]);
        let members = MemberSpectra::from_dyn(&batch).expect("2-D accepted");
        assert_eq!(members.num_members(), 2);

        let cube = ArrayD::<f64>::zeros(vec![2, 2, 2]);
        let err = MemberSpectra::from_dyn(&cube).unwrap_err();
        assert!(matches!(err, FeatureError::InvalidShape { .. }));
    }

    #[test]
    fn test_slice_and_vec_conversions_agree() {
        let from_slice = MemberSpectra::from(&[1.0, 2.0][..]);
        let from_vec = MemberSpectra::from(vec![1.0, 2.0]);
        let from_fixed = MemberSpectra::from([1.0, 2.0]);
        assert_eq!(from_slice, from_vec);
        assert_eq!(from_vec, from_fixed);
        assert!(from_fixed.member(1).is_none());
    }
}
