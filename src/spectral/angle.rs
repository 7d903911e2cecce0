//! Spectral angle mapper.
//!
//! The spectral angle between a pixel and a reference spectrum is the angle
//! between the two band vectors:
//!
//! ```text
//! angle = acos( <pixel, member> / (|pixel| * |member|) )
//! ```
//!
//! It is insensitive to overall brightness, which makes it a common
//! similarity metric for material signatures. When either vector has zero
//! norm the angle is undefined; those positions are reported as exactly `0`.

use ndarray::{Array1, Array2, Array3, ArrayView1, ArrayView3, Axis, Zip};

use crate::data::{BandStack, MemberSpectra};
use crate::error::{FeatureError, Result};

/// Computes spectral angles between every pixel of a raster and a fixed set
/// of member spectra.
///
/// Member norms are computed once at construction, so a mapper can be reused
/// across many rasters.
#[derive(Debug, Clone)]
pub struct SpectralAngleMapper {
    members: MemberSpectra,
    member_norms: Array1<f64>,
}

impl SpectralAngleMapper {
    /// Create a mapper for the given member spectra.
    ///
    /// A single 1-D spectrum is treated as one member.
    pub fn new(members: impl Into<MemberSpectra>) -> Self {
        let members = members.into();
        let member_norms = members.norms();
        Self {
            members,
            member_norms,
        }
    }

    /// The member spectra this mapper compares against.
    pub fn members(&self) -> &MemberSpectra {
        &self.members
    }

    /// Compute the `[member, row, col]` angle array for a band stack.
    ///
    /// # Errors
    /// Returns [`FeatureError::DimensionMismatch`] if the member band count
    /// differs from the band count of `data`. No partial result is produced.
    pub fn compute(&self, data: &BandStack) -> Result<Array3<f64>> {
        self.compute_view(data.view())
    }

    /// Compute angles for a borrowed `[band, row, col]` array.
    ///
    /// See [`SpectralAngleMapper::compute`].
    pub fn compute_view(&self, data: ArrayView3<'_, f64>) -> Result<Array3<f64>> {
        let (num_bands, rows, cols) = data.dim();
        if self.members.num_bands() != num_bands {
            return Err(FeatureError::dimension_mismatch(
                num_bands,
                self.members.num_bands(),
            ));
        }

        let data_norm = data.map_axis(Axis(0), |pixel| pixel.dot(&pixel).sqrt());

        let mut angles = Array3::zeros((self.members.num_members(), rows, cols));
        let members = self.members.view();

        for ((mut out, member), &member_norm) in angles
            .outer_iter_mut()
            .zip(members.outer_iter())
            .zip(self.member_norms.iter())
        {
            let num = weighted_band_sum(data, member);

            Zip::from(&mut out)
                .and(&num)
                .and(&data_norm)
                .for_each(|angle, &dot, &pixel_norm| {
                    *angle = angle_from_ratio(dot, pixel_norm * member_norm);
                });
        }

        log::debug!(
            "SpectralAngleMapper: computed {} member(s) over {}x{} pixels with {} bands",
            self.members.num_members(),
            rows,
            cols,
            num_bands
        );

        Ok(angles)
    }
}

/// Compute spectral angles of `data` against one or more member spectra.
///
/// `members` may be a single spectrum (`[f64; N]`, `Vec<f64>`, `Array1`) or a
/// `[member, band]` batch (`Array2`). The result is indexed
/// `[member, row, col]` in the order members were given.
///
/// # Errors
/// Returns [`FeatureError::DimensionMismatch`] if the band counts differ.
pub fn spectral_angles(data: &BandStack, members: impl Into<MemberSpectra>) -> Result<Array3<f64>> {
    SpectralAngleMapper::new(members).compute(data)
}

/// Per-pixel dot product of a band stack with a per-band weight vector.
///
/// Each band image is scaled by its weight and accumulated, band by band.
/// The caller has already matched the weight count to the band count.
fn weighted_band_sum(data: ArrayView3<'_, f64>, weights: ArrayView1<'_, f64>) -> Array2<f64> {
    let (_, rows, cols) = data.dim();

    let mut sum = Array2::zeros((rows, cols));
    for (band, &weight) in data.outer_iter().zip(weights.iter()) {
        sum.scaled_add(weight, &band);
    }
    sum
}

/// Turn a dot product and a norm product into an angle in radians.
///
/// The division follows IEEE rules (`0/0` is NaN, `x/0` is infinite). The
/// cosine is clipped to `[-1, 1]` before `acos`, then any position with a
/// zero denominator is overridden to `0`.
fn angle_from_ratio(num: f64, den: f64) -> f64 {
    let angle = (num / den).clamp(-1.0, 1.0).acos();
    if den == 0.0 { 0.0 } else { angle }
}
