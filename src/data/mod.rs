//! Input containers for spectral feature computation.
//!
//! This module provides:
//! - `BandStack`: a `[band, row, col]` raster supplied by the caller
//! - `MemberSpectra`: reference spectra stored as `[member, band]`
//!
//! Both copy their input into `f64` storage. Any element type that converts
//! losslessly into `f64` (`u8`, `u16`, `i16`, `i32`, `f32`, `f64`) is accepted.

mod band_stack;
mod members;

pub use band_stack::BandStack;
pub use members::MemberSpectra;
