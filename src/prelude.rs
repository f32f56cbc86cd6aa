//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use categorical_nb::prelude::*;
//! ```

pub use crate::classification::{CategoricalNB, CategoricalNBConfig, ProbabilityTable};
pub use crate::error::NbError;
pub use crate::metrics::{accuracy, BinaryConfusion};
pub use crate::primitives::{FeatureCode, FeatureMatrix};
pub use crate::schema::FeatureSchema;
pub use crate::traits::Classifier;
