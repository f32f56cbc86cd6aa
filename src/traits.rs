//! Core trait for binary classifiers over categorical features.

use crate::error::{NbError, Result};
use crate::metrics::accuracy;
use crate::primitives::FeatureMatrix;

/// Supervised binary classifier with fit/predict/score, following sklearn
/// conventions.
///
/// # Examples
///
/// ```
/// use categorical_nb::prelude::*;
///
/// let x = FeatureMatrix::from_rows(&[[0], [0], [1], [1]]).expect("valid");
/// let y = [true, true, false, false];
///
/// let mut model = CategoricalNB::new();
/// Classifier::fit(&mut model, &x, &y).expect("both classes present");
/// let score = model.score(&x, &y).expect("fitted");
/// assert!((score - 1.0).abs() < 1e-12);
/// ```
pub trait Classifier {
    /// Fits the model to training data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails (shape mismatch, degenerate classes, etc.).
    fn fit(&mut self, x: &FeatureMatrix, y: &[bool]) -> Result<()>;

    /// Predicts one label per row of `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or `x` cannot be scored.
    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<bool>>;

    /// Accuracy of `predict(x)` against `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if prediction fails or `y` has the wrong length.
    fn score(&self, x: &FeatureMatrix, y: &[bool]) -> Result<f64> {
        let predictions = self.predict(x)?;
        if predictions.len() != y.len() {
            return Err(NbError::dimension_mismatch("labels", predictions.len(), y.len()));
        }
        Ok(accuracy(&predictions, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Predicts the first feature being non-zero; exercises the default score.
    struct ThresholdClassifier {
        fitted: bool,
    }

    impl Classifier for ThresholdClassifier {
        fn fit(&mut self, x: &FeatureMatrix, y: &[bool]) -> Result<()> {
            if x.n_rows() != y.len() {
                return Err(NbError::dimension_mismatch("labels", x.n_rows(), y.len()));
            }
            self.fitted = true;
            Ok(())
        }

        fn predict(&self, x: &FeatureMatrix) -> Result<Vec<bool>> {
            if !self.fitted {
                return Err(NbError::NotFitted);
            }
            Ok(x.rows().map(|row| row[0] != 0).collect())
        }
    }

    #[test]
    fn test_default_score() {
        let x = FeatureMatrix::from_rows(&[[0], [1], [2], [0]]).expect("valid");
        let y = [false, true, true, true];
        let mut model = ThresholdClassifier { fitted: false };
        model.fit(&x, &y).expect("fit");

        let score = model.score(&x, &y).expect("score");
        assert!((score - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_score_propagates_predict_error() {
        let x = FeatureMatrix::from_rows(&[[0], [1]]).expect("valid");
        let model = ThresholdClassifier { fitted: false };
        assert_eq!(model.score(&x, &[false, true]), Err(NbError::NotFitted));
    }

    #[test]
    fn test_score_label_length_mismatch() {
        let x = FeatureMatrix::from_rows(&[[0], [1]]).expect("valid");
        let model = ThresholdClassifier { fitted: true };
        assert!(matches!(
            model.score(&x, &[true]),
            Err(NbError::DimensionMismatch { .. })
        ));
    }
}
