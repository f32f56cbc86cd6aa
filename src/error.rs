//! Error types for categorical Naive Bayes operations.
//!
//! Every failure is returned to the caller of the operation that triggered it;
//! nothing is retried and no trained table is partially updated.

use std::fmt;

use crate::primitives::FeatureCode;

/// Main error type for this crate.
///
/// # Examples
///
/// ```
/// use categorical_nb::error::NbError;
///
/// let err = NbError::UnseenFeatureValue { feature: 1, value: 2 };
/// assert!(err.to_string().contains("never seen during training"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum NbError {
    /// Shapes disagree (ragged rows, label count, trained width, schema width).
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// No rows or no columns where at least one is required.
    EmptyInput {
        /// What was empty
        context: String,
    },

    /// A class has no training examples, so a conditional probability
    /// would divide by zero.
    ZeroClassCount {
        /// Label of the empty class
        label: bool,
    },

    /// A query holds a (feature, value) pair absent from the trained table.
    UnseenFeatureValue {
        /// Feature index
        feature: usize,
        /// Value code
        value: FeatureCode,
    },

    /// Prediction requested before `fit`.
    NotFitted,

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Configuration could not be parsed.
    Serialization(String),
}

impl fmt::Display for NbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NbError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            NbError::EmptyInput { context } => write!(f, "Empty input: {context}"),
            NbError::ZeroClassCount { label } => {
                let class = if *label { "positive" } else { "negative" };
                write!(
                    f,
                    "Division by zero: no {class} training examples to condition on"
                )
            }
            NbError::UnseenFeatureValue { feature, value } => {
                write!(
                    f,
                    "Lookup failed: feature {feature} value {value} was never seen during training"
                )
            }
            NbError::NotFitted => write!(f, "Model not fitted: call fit before predict"),
            NbError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            NbError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for NbError {}

impl From<serde_json::Error> for NbError {
    fn from(err: serde_json::Error) -> Self {
        NbError::Serialization(err.to_string())
    }
}

impl NbError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, NbError>;
