//! Unit tests for the feature extractors.
//!
//! These tests check the extractor arithmetic against small hand-built
//! rasters with known values.

mod vanilla_tests;
