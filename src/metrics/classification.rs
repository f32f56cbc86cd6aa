//! Binary classification metrics.
//!
//! Provides the confusion counts and the accuracy, precision, recall and
//! F1 scores derived from them.

/// Confusion counts for boolean predictions against boolean truth.
///
/// # Examples
///
/// ```
/// use categorical_nb::metrics::BinaryConfusion;
///
/// let y_true = [true, true, false, false];
/// let y_pred = [true, false, true, false];
/// let cm = BinaryConfusion::from_predictions(&y_pred, &y_true);
///
/// assert_eq!(cm.true_positive, 1);
/// assert_eq!(cm.false_negative, 1);
/// assert!((cm.recall() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryConfusion {
    /// Predicted true, actually true
    pub true_positive: usize,
    /// Predicted false, actually false
    pub true_negative: usize,
    /// Predicted true, actually false
    pub false_positive: usize,
    /// Predicted false, actually true
    pub false_negative: usize,
}

impl BinaryConfusion {
    /// Tallies predictions against truth.
    ///
    /// # Panics
    ///
    /// Panics if the slices have different lengths.
    #[must_use]
    pub fn from_predictions(y_pred: &[bool], y_true: &[bool]) -> Self {
        assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");

        let mut cm = Self::default();
        for (&pred, &truth) in y_pred.iter().zip(y_true) {
            match (truth, pred) {
                (true, true) => cm.true_positive += 1,
                (false, false) => cm.true_negative += 1,
                (true, false) => cm.false_negative += 1,
                (false, true) => cm.false_positive += 1,
            }
        }
        cm
    }

    /// Number of tallied samples.
    #[must_use]
    pub fn total(&self) -> usize {
        self.true_positive + self.true_negative + self.false_positive + self.false_negative
    }

    /// (TP + TN) / total
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        ratio(self.true_positive + self.true_negative, self.total())
    }

    /// TP / (TP + FP)
    #[must_use]
    pub fn precision(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_positive)
    }

    /// TP / (TP + FN)
    #[must_use]
    pub fn recall(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }

    /// Harmonic mean of precision and recall.
    #[must_use]
    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Compute classification accuracy.
///
/// # Panics
///
/// Panics if slices have different lengths.
///
/// # Examples
///
/// ```
/// use categorical_nb::metrics::accuracy;
///
/// let acc = accuracy(&[true, false, false], &[true, true, false]);
/// assert!((acc - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn accuracy(y_pred: &[bool], y_true: &[bool]) -> f64 {
    BinaryConfusion::from_predictions(y_pred, y_true).accuracy()
}

/// Shorthand for [`BinaryConfusion::from_predictions`].
///
/// # Panics
///
/// Panics if slices have different lengths.
#[must_use]
pub fn confusion(y_pred: &[bool], y_true: &[bool]) -> BinaryConfusion {
    BinaryConfusion::from_predictions(y_pred, y_true)
}
