//! Probability table: per-(feature, value) conditional probabilities and
//! class base rates, built in one pass over the training data.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::debug;

use crate::error::{NbError, Result};
use crate::primitives::{FeatureCode, FeatureMatrix};
use crate::schema::FeatureSchema;

/// Structural identity of a probability entry.
///
/// Entries are looked up by this key only; display names never take part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureKey {
    /// Feature index (0-based position in the vector)
    pub feature: usize,
    /// Observed level at that position
    pub value: FeatureCode,
}

impl FeatureKey {
    /// Creates a key for `(feature, value)`.
    #[must_use]
    pub fn new(feature: usize, value: FeatureCode) -> Self {
        Self { feature, value }
    }
}

/// Estimated `P(feature = value | class)` for both classes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityEntry {
    key: FeatureKey,
    positive_count: usize,
    negative_count: usize,
    positive_prob: f64,
    negative_prob: f64,
    feature_name: Option<String>,
    level_name: Option<String>,
}

impl ProbabilityEntry {
    /// Lookup key of this entry.
    #[must_use]
    pub fn key(&self) -> FeatureKey {
        self.key
    }

    /// Feature index.
    #[must_use]
    pub fn feature(&self) -> usize {
        self.key.feature
    }

    /// Feature value code.
    #[must_use]
    pub fn value(&self) -> FeatureCode {
        self.key.value
    }

    /// Positive training rows holding this value.
    #[must_use]
    pub fn positive_count(&self) -> usize {
        self.positive_count
    }

    /// Negative training rows holding this value.
    #[must_use]
    pub fn negative_count(&self) -> usize {
        self.negative_count
    }

    /// `P(value | positive)`.
    #[must_use]
    pub fn positive_prob(&self) -> f64 {
        self.positive_prob
    }

    /// `P(value | negative)`.
    #[must_use]
    pub fn negative_prob(&self) -> f64 {
        self.negative_prob
    }

    /// Display name of the feature, if a schema supplied one.
    #[must_use]
    pub fn feature_name(&self) -> Option<&str> {
        self.feature_name.as_deref()
    }

    /// Display name of the level, if a schema supplied one.
    #[must_use]
    pub fn level_name(&self) -> Option<&str> {
        self.level_name.as_deref()
    }
}

impl fmt::Display for ProbabilityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.feature_name {
            Some(name) => write!(f, "Class {name} = ")?,
            None => write!(f, "Class feature[{}] = ", self.key.feature)?,
        }
        match &self.level_name {
            Some(level) => write!(f, "{level}")?,
            None => write!(f, "{}", self.key.value)?,
        }
        write!(
            f,
            ", Probability Positive = {:.6}, Probability Negative = {:.6}",
            self.positive_prob, self.negative_prob
        )
    }
}

/// Everything one training run learned.
///
/// Immutable once built; retraining produces a new table.
///
/// # Examples
///
/// ```
/// use categorical_nb::classification::TableBuilder;
/// use categorical_nb::primitives::FeatureMatrix;
///
/// let x = FeatureMatrix::from_rows(&[[0, 1], [0, 0], [1, 1], [1, 0]]).expect("valid");
/// let y = [true, true, false, true];
///
/// let table = TableBuilder::new().build(&x, &y).expect("both classes present");
/// assert_eq!(table.positive_count(), 3);
/// assert!((table.positive_prior() - 0.75).abs() < 1e-12);
///
/// let entry = table.lookup(0, 1).expect("value 1 seen at feature 0");
/// assert!((entry.positive_prob() - 1.0 / 3.0).abs() < 1e-12);
/// assert!((entry.negative_prob() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    entries: HashMap<FeatureKey, ProbabilityEntry>,
    n_features: usize,
    positive_count: usize,
    negative_count: usize,
    positive_prior: f64,
    negative_prior: f64,
    alpha: f64,
}

impl ProbabilityTable {
    /// Entry for `(feature, value)`, if that pair was seen in training.
    #[must_use]
    pub fn get(&self, feature: usize, value: FeatureCode) -> Option<&ProbabilityEntry> {
        self.entries.get(&FeatureKey::new(feature, value))
    }

    /// Entry for `(feature, value)`.
    ///
    /// # Errors
    ///
    /// Returns `UnseenFeatureValue` if the pair never occurred in training.
    pub fn lookup(&self, feature: usize, value: FeatureCode) -> Result<&ProbabilityEntry> {
        self.get(feature, value)
            .ok_or(NbError::UnseenFeatureValue { feature, value })
    }

    /// All entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &ProbabilityEntry> + '_ {
        self.entries.values()
    }

    /// All entries ordered by `(feature, value)`.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<&ProbabilityEntry> {
        let mut entries: Vec<&ProbabilityEntry> = self.entries.values().collect();
        entries.sort_by_key(|entry| entry.key);
        entries
    }

    /// Distinct levels seen at `feature`, ascending.
    #[must_use]
    pub fn levels(&self, feature: usize) -> Vec<FeatureCode> {
        let mut levels: Vec<FeatureCode> = self
            .entries
            .keys()
            .filter(|key| key.feature == feature)
            .map(|key| key.value)
            .collect();
        levels.sort_unstable();
        levels
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Feature dimension the table was trained on.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of positive training labels.
    #[must_use]
    pub fn positive_count(&self) -> usize {
        self.positive_count
    }

    /// Number of negative training labels.
    #[must_use]
    pub fn negative_count(&self) -> usize {
        self.negative_count
    }

    /// Number of training labels.
    #[must_use]
    pub fn count(&self) -> usize {
        self.positive_count + self.negative_count
    }

    /// Fraction of positive training labels.
    #[must_use]
    pub fn positive_prior(&self) -> f64 {
        self.positive_prior
    }

    /// Fraction of negative training labels.
    #[must_use]
    pub fn negative_prior(&self) -> f64 {
        self.negative_prior
    }

    /// Additive smoothing used when the table was built.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

/// Checks that `alpha` is finite and non-negative.
///
/// # Errors
///
/// Returns `InvalidHyperparameter` otherwise.
pub(crate) fn validate_alpha(alpha: f64) -> Result<()> {
    if !alpha.is_finite() || alpha < 0.0 {
        return Err(NbError::InvalidHyperparameter {
            param: "alpha".to_string(),
            value: alpha.to_string(),
            constraint: ">= 0 and finite".to_string(),
        });
    }
    Ok(())
}

/// Builds a [`ProbabilityTable`] from labeled training data.
///
/// Defaults reproduce plain frequency estimates: no smoothing, so a class
/// without examples is a division-by-zero error. Entry logging is on, as for
/// [`super::CategoricalNBConfig::default`].
#[derive(Debug, Clone, Copy)]
pub struct TableBuilder<'a> {
    alpha: f64,
    log_entries: bool,
    schema: Option<&'a FeatureSchema>,
}

impl Default for TableBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TableBuilder<'a> {
    /// Creates a builder with no smoothing and no display metadata.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alpha: 0.0,
            log_entries: true,
            schema: None,
        }
    }

    /// Sets additive smoothing. `0.0` disables it.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Emits a `debug` event per computed entry.
    #[must_use]
    pub fn with_entry_logging(mut self, enabled: bool) -> Self {
        self.log_entries = enabled;
        self
    }

    /// Decorates entries with names from `schema`.
    #[must_use]
    pub fn with_schema(mut self, schema: Option<&'a FeatureSchema>) -> Self {
        self.schema = schema;
        self
    }

    /// Builds the table.
    ///
    /// # Errors
    ///
    /// See [`TableBuilder::build_with_observer`].
    pub fn build(&self, x: &FeatureMatrix, y: &[bool]) -> Result<ProbabilityTable> {
        self.build_with_observer(x, y, |_| {})
    }

    /// Builds the table and hands every entry to `observer`, in key order,
    /// once the whole table has been computed.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `alpha` is negative or not finite
    /// - `y` and `x` disagree on the number of samples
    /// - there are no samples
    /// - a class has no examples and smoothing is off (division by zero)
    pub fn build_with_observer<F>(
        &self,
        x: &FeatureMatrix,
        y: &[bool],
        mut observer: F,
    ) -> Result<ProbabilityTable>
    where
        F: FnMut(&ProbabilityEntry),
    {
        validate_alpha(self.alpha)?;

        let (n_samples, n_features) = x.shape();

        if y.len() != n_samples {
            return Err(NbError::dimension_mismatch("labels", n_samples, y.len()));
        }

        let positive_count = y.iter().filter(|&&label| label).count();
        let negative_count = y.len() - positive_count;
        let count = positive_count + negative_count;
        if count == 0 {
            return Err(NbError::empty_input("training labels"));
        }

        let positive_prior = positive_count as f64 / count as f64;
        let negative_prior = negative_count as f64 / count as f64;

        let mut entries = HashMap::new();
        for feature in 0..n_features {
            let positions = value_positions(x, feature);
            let n_levels = positions.len();

            for (value, rows) in positions {
                let (pos, neg) = label_counts(&rows, y);
                let positive_prob =
                    self.conditional(pos, positive_count, n_levels, true)?;
                let negative_prob =
                    self.conditional(neg, negative_count, n_levels, false)?;

                let key = FeatureKey::new(feature, value);
                let entry = ProbabilityEntry {
                    key,
                    positive_count: pos,
                    negative_count: neg,
                    positive_prob,
                    negative_prob,
                    feature_name: self
                        .schema
                        .and_then(|s| s.feature_name(feature))
                        .map(str::to_string),
                    level_name: self
                        .schema
                        .and_then(|s| s.level_name(feature, value))
                        .map(str::to_string),
                };
                entries.insert(key, entry);
            }
        }

        let table = ProbabilityTable {
            entries,
            n_features,
            positive_count,
            negative_count,
            positive_prior,
            negative_prior,
            alpha: self.alpha,
        };

        for entry in table.sorted_entries() {
            if self.log_entries {
                debug!(
                    feature = entry.feature(),
                    value = entry.value(),
                    positive_prob = entry.positive_prob(),
                    negative_prob = entry.negative_prob(),
                    "{entry}"
                );
            }
            observer(entry);
        }

        Ok(table)
    }

    /// `(count + alpha) / (class_count + alpha * n_levels)`
    fn conditional(
        &self,
        count: usize,
        class_count: usize,
        n_levels: usize,
        label: bool,
    ) -> Result<f64> {
        let denominator = class_count as f64 + self.alpha * n_levels as f64;
        if denominator <= 0.0 {
            return Err(NbError::ZeroClassCount { label });
        }
        Ok((count as f64 + self.alpha) / denominator)
    }
}

/// Groups row indices by the value observed at `feature`.
fn value_positions(x: &FeatureMatrix, feature: usize) -> BTreeMap<FeatureCode, Vec<usize>> {
    let mut positions: BTreeMap<FeatureCode, Vec<usize>> = BTreeMap::new();
    for (row, value) in x.column(feature).into_iter().enumerate() {
        positions.entry(value).or_default().push(row);
    }
    positions
}

/// Counts (positive, negative) labels among `rows`.
fn label_counts(rows: &[usize], y: &[bool]) -> (usize, usize) {
    rows.iter().fold((0, 0), |(pos, neg), &row| {
        if y[row] {
            (pos + 1, neg)
        } else {
            (pos, neg + 1)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::CategoricalNBConfig;

    #[test]
    fn test_builder_logging_default_matches_config() {
        assert_eq!(
            TableBuilder::new().log_entries,
            CategoricalNBConfig::default().log_entries
        );
        assert!(TableBuilder::default().log_entries);
        assert!(!TableBuilder::new().with_entry_logging(false).log_entries);
    }

    #[test]
    fn test_validate_alpha() {
        assert!(validate_alpha(0.0).is_ok());
        assert!(validate_alpha(2.5).is_ok());
        for alpha in [-0.2, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                validate_alpha(alpha),
                Err(NbError::InvalidHyperparameter { .. })
            ));
        }
    }
}
