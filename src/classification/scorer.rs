//! Posterior scoring against a trained [`ProbabilityTable`].

use rayon::prelude::*;
use tracing::trace;

use super::table::ProbabilityTable;
use crate::error::{NbError, Result};
use crate::primitives::{FeatureCode, FeatureMatrix};

/// Unnormalized class scores for one query vector:
/// base rate times the product of the matching conditional probabilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosteriorScores {
    /// Score of the positive class
    pub positive: f64,
    /// Score of the negative class
    pub negative: f64,
}

impl PosteriorScores {
    /// Predicted label. Strictly greater wins, so a tie is negative.
    #[must_use]
    pub fn label(&self) -> bool {
        self.positive > self.negative
    }

    /// Positive score normalized over both classes; `0.0` when both are zero.
    #[must_use]
    pub fn positive_probability(&self) -> f64 {
        let total = self.positive + self.negative;
        if total > 0.0 {
            self.positive / total
        } else {
            0.0
        }
    }
}

impl ProbabilityTable {
    /// Scores one query vector.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `row` is not as wide as the training
    /// data, and `UnseenFeatureValue` for a level never seen in training.
    pub fn posterior(&self, row: &[FeatureCode]) -> Result<PosteriorScores> {
        if row.len() != self.n_features() {
            return Err(NbError::dimension_mismatch(
                "n_features",
                self.n_features(),
                row.len(),
            ));
        }

        let mut positive = self.positive_prior();
        let mut negative = self.negative_prior();
        for (feature, &value) in row.iter().enumerate() {
            let entry = self.lookup(feature, value)?;
            positive *= entry.positive_prob();
            negative *= entry.negative_prob();
        }

        Ok(PosteriorScores { positive, negative })
    }

    /// Predicts one label per row, in input order.
    ///
    /// # Errors
    ///
    /// Fails on the first row that cannot be scored; see
    /// [`ProbabilityTable::posterior`].
    pub fn predict(&self, x: &FeatureMatrix) -> Result<Vec<bool>> {
        self.check_width(x)?;
        x.rows()
            .enumerate()
            .map(|(i, row)| {
                self.posterior(row).map(|scores| {
                    trace!(
                        row = i,
                        positive = scores.positive,
                        negative = scores.negative,
                        "scored"
                    );
                    scores.label()
                })
            })
            .collect()
    }

    /// Normalized positive-class posterior per row.
    ///
    /// # Errors
    ///
    /// Same as [`ProbabilityTable::predict`].
    pub fn predict_proba(&self, x: &FeatureMatrix) -> Result<Vec<f64>> {
        self.check_width(x)?;
        x.rows()
            .map(|row| self.posterior(row).map(|s| s.positive_probability()))
            .collect()
    }

    /// Like [`ProbabilityTable::predict`], scoring rows on the rayon pool.
    ///
    /// The table is only read, so any number of these may run at once.
    ///
    /// # Errors
    ///
    /// Same as [`ProbabilityTable::predict`]; which failing row is reported
    /// is unspecified when several fail.
    pub fn predict_par(&self, x: &FeatureMatrix) -> Result<Vec<bool>> {
        self.check_width(x)?;
        x.as_slice()
            .par_chunks_exact(x.n_features())
            .map(|row| self.posterior(row).map(|s| s.label()))
            .collect()
    }

    fn check_width(&self, x: &FeatureMatrix) -> Result<()> {
        if x.n_features() != self.n_features() {
            return Err(NbError::dimension_mismatch(
                "n_features",
                self.n_features(),
                x.n_features(),
            ));
        }
        Ok(())
    }
}
