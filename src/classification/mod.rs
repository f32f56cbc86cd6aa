//! Categorical Naive Bayes classification.
//!
//! Training counts, for every feature dimension and every level observed
//! there, how often the level co-occurs with each label. Prediction
//! multiplies the matching conditional probabilities with the class base
//! rate and compares the two unnormalized scores.
//!
//! By default no smoothing is applied: a class without training examples
//! fails `fit` with a division-by-zero error, and a level never seen in
//! training fails `predict` with a lookup error. Additive smoothing is
//! available through [`CategoricalNB::with_alpha`]; it removes the first
//! failure but not the second.
//!
//! # Example
//!
//! ```
//! use categorical_nb::classification::CategoricalNB;
//! use categorical_nb::primitives::FeatureMatrix;
//!
//! let x = FeatureMatrix::from_rows(&[
//!     [0, 1],
//!     [0, 0],
//!     [1, 1],
//!     [1, 0],
//! ]).expect("rows share one width");
//! let y = vec![true, true, false, false];
//!
//! let mut model = CategoricalNB::new();
//! model.fit(&x, &y).expect("both classes present");
//! let predictions = model.predict(&x).expect("model is fitted");
//!
//! assert_eq!(predictions, vec![true, true, false, false]);
//! ```

mod scorer;
mod table;

pub use scorer::PosteriorScores;
pub use table::{FeatureKey, ProbabilityEntry, ProbabilityTable, TableBuilder};

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{NbError, Result};
use crate::primitives::{FeatureCode, FeatureMatrix};
use crate::schema::FeatureSchema;
use crate::traits::Classifier;

/// Hyperparameters of [`CategoricalNB`].
///
/// # Example
///
/// ```
/// use categorical_nb::classification::CategoricalNBConfig;
///
/// let config = CategoricalNBConfig::from_json(r#"{ "alpha": 1.0 }"#).expect("valid config");
/// assert_eq!(config.alpha, 1.0);
/// assert!(config.log_entries);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoricalNBConfig {
    /// Additive smoothing; `0.0` keeps raw frequency estimates.
    pub alpha: f64,
    /// Emit a `debug` event for every entry computed by `fit`.
    pub log_entries: bool,
}

impl Default for CategoricalNBConfig {
    fn default() -> Self {
        Self {
            alpha: 0.0,
            log_entries: true,
        }
    }
}

impl CategoricalNBConfig {
    /// Parses a JSON document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` for malformed JSON and
    /// `InvalidHyperparameter` for an invalid `alpha`.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks hyperparameter constraints.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` if `alpha` is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        table::validate_alpha(self.alpha)
    }
}

/// Categorical Naive Bayes classifier for binary labels.
///
/// Starts untrained; [`CategoricalNB::fit`] installs a [`ProbabilityTable`]
/// and every later `fit` replaces it wholesale, or leaves it untouched if
/// training fails.
#[derive(Debug, Clone, Default)]
pub struct CategoricalNB {
    config: CategoricalNBConfig,
    schema: Option<FeatureSchema>,
    table: Option<Arc<ProbabilityTable>>,
}

impl CategoricalNB {
    /// Creates an untrained classifier without smoothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an untrained classifier with display names for every
    /// feature and level.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the two lists differ in length.
    pub fn with_names(
        feature_names: Vec<String>,
        levels: Vec<BTreeMap<FeatureCode, String>>,
    ) -> Result<Self> {
        Ok(Self::new().with_schema(FeatureSchema::new(feature_names, levels)?))
    }

    /// Creates an untrained classifier from a validated config.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` if the config is invalid.
    pub fn from_config(config: CategoricalNBConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Sets additive smoothing. Checked when `fit` runs.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    /// Enables or disables per-entry `debug` events during `fit`.
    #[must_use]
    pub fn with_entry_logging(mut self, enabled: bool) -> Self {
        self.config.log_entries = enabled;
        self
    }

    /// Attaches display names.
    #[must_use]
    pub fn with_schema(mut self, schema: FeatureSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Current hyperparameters.
    #[must_use]
    pub fn config(&self) -> &CategoricalNBConfig {
        &self.config
    }

    /// Attached display names, if any.
    #[must_use]
    pub fn schema(&self) -> Option<&FeatureSchema> {
        self.schema.as_ref()
    }

    /// True once `fit` has succeeded.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.table.is_some()
    }

    /// Shared handle to the trained table.
    ///
    /// The handle keeps the table alive after a retrain replaces it.
    #[must_use]
    pub fn table(&self) -> Option<Arc<ProbabilityTable>> {
        self.table.clone()
    }

    /// Trains the classifier.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `alpha` is invalid
    /// - the attached schema is not as wide as `x`
    /// - sample count mismatch between `x` and `y`
    /// - a class has no examples and smoothing is off
    pub fn fit(&mut self, x: &FeatureMatrix, y: &[bool]) -> Result<()> {
        self.fit_with_observer(x, y, |_| {})
    }

    /// Trains the classifier, handing each computed entry to `observer`.
    ///
    /// # Errors
    ///
    /// See [`CategoricalNB::fit`].
    pub fn fit_with_observer<F>(&mut self, x: &FeatureMatrix, y: &[bool], observer: F) -> Result<()>
    where
        F: FnMut(&ProbabilityEntry),
    {
        match self.build_table(x, y, observer) {
            Ok(table) => {
                info!(
                    samples = table.count(),
                    features = table.n_features(),
                    entries = table.len(),
                    positive_prior = table.positive_prior(),
                    negative_prior = table.negative_prior(),
                    "categorical naive bayes fitted"
                );
                self.table = Some(Arc::new(table));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "fit failed, previous table kept");
                Err(err)
            }
        }
    }

    fn build_table<F>(&self, x: &FeatureMatrix, y: &[bool], observer: F) -> Result<ProbabilityTable>
    where
        F: FnMut(&ProbabilityEntry),
    {
        self.config.validate()?;

        if let Some(schema) = &self.schema {
            if schema.n_features() != x.n_features() {
                return Err(NbError::dimension_mismatch(
                    "schema features",
                    schema.n_features(),
                    x.n_features(),
                ));
            }
        }

        TableBuilder::new()
            .with_alpha(self.config.alpha)
            .with_entry_logging(self.config.log_entries)
            .with_schema(self.schema.as_ref())
            .build_with_observer(x, y, observer)
    }

    fn fitted(&self) -> Result<&ProbabilityTable> {
        self.table.as_deref().ok_or(NbError::NotFitted)
    }

    /// Predicts one label per row.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` before `fit`, `DimensionMismatch` for the wrong
    /// width, and `UnseenFeatureValue` for levels absent from training.
    pub fn predict(&self, x: &FeatureMatrix) -> Result<Vec<bool>> {
        self.fitted()?.predict(x)
    }

    /// Predicts with rows scored in parallel.
    ///
    /// # Errors
    ///
    /// See [`CategoricalNB::predict`].
    pub fn predict_par(&self, x: &FeatureMatrix) -> Result<Vec<bool>> {
        self.fitted()?.predict_par(x)
    }

    /// Normalized positive-class posterior per row.
    ///
    /// # Errors
    ///
    /// See [`CategoricalNB::predict`].
    pub fn predict_proba(&self, x: &FeatureMatrix) -> Result<Vec<f64>> {
        self.fitted()?.predict_proba(x)
    }

    /// Unnormalized class scores for one vector.
    ///
    /// # Errors
    ///
    /// See [`CategoricalNB::predict`].
    pub fn posterior(&self, row: &[FeatureCode]) -> Result<PosteriorScores> {
        self.fitted()?.posterior(row)
    }
}

impl Classifier for CategoricalNB {
    fn fit(&mut self, x: &FeatureMatrix, y: &[bool]) -> Result<()> {
        CategoricalNB::fit(self, x, y)
    }

    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<bool>> {
        CategoricalNB::predict(self, x)
    }
}
