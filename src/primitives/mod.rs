//! Core data primitives for categorical features.
//!
//! Feature vectors are fixed-width sequences of small non-negative integer
//! codes. Width is validated once, when a [`FeatureMatrix`] is built.

mod matrix;

pub use matrix::FeatureMatrix;

/// Discrete level observed at one feature dimension (e.g. `Age = 0` for "Youth").
pub type FeatureCode = u32;
