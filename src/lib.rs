//! Categorical Naive Bayes for discrete, finite-valued features.
//!
//! Training builds a table of `P(feature = value | label)` for every
//! (feature, value) pair seen, plus the class base rates. Prediction
//! multiplies the matching probabilities with the base rate of each class
//! and picks the strictly larger score; ties predict `false`.
//!
//! # Quick Start
//!
//! ```
//! use categorical_nb::datasets::buys_computer;
//! use categorical_nb::prelude::*;
//!
//! let data = buys_computer().expect("bundled data is valid");
//!
//! let mut model = CategoricalNB::new().with_schema(data.schema.clone());
//! model.fit(&data.features, &data.labels).expect("both classes present");
//!
//! // Senior, medium income, not a student, fair credit
//! let query = FeatureMatrix::from_rows(&[[2, 1, 0, 1]]).expect("one row");
//! assert_eq!(model.predict(&query).expect("fitted"), vec![true]);
//! ```
//!
//! # Failure modes
//!
//! Without smoothing (the default) two situations are hard errors rather
//! than silently patched:
//! - a label class with no training examples fails `fit` with
//!   [`NbError::ZeroClassCount`] (division by zero);
//! - a feature value never seen in training fails `predict` with
//!   [`NbError::UnseenFeatureValue`].
//!
//! # Modules
//!
//! - [`primitives`]: Fixed-width matrix of feature codes
//! - [`schema`]: Display names for features and levels
//! - [`classification`]: Probability table builder, scorer and classifier
//! - [`metrics`]: Confusion counts, accuracy, precision, recall
//! - [`datasets`]: Bundled toy data

pub mod classification;
pub mod datasets;
pub mod error;
pub mod metrics;
pub mod prelude;
pub mod primitives;
pub mod schema;
pub mod traits;

pub use error::{NbError, Result};
pub use primitives::{FeatureCode, FeatureMatrix};
pub use traits::Classifier;
