//! Human-readable names for features and their levels.
//!
//! Names are cosmetic: they decorate probability entries and log lines but
//! never take part in lookup or scoring.

use std::collections::BTreeMap;

use crate::error::{NbError, Result};
use crate::primitives::FeatureCode;

/// Display metadata for a fixed set of categorical features.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use categorical_nb::schema::FeatureSchema;
///
/// let schema = FeatureSchema::new(
///     vec!["Student".to_string()],
///     vec![BTreeMap::from([(0, "Not Student".to_string()), (1, "Student".to_string())])],
/// )
/// .expect("one name per level map");
///
/// assert_eq!(schema.feature_name(0), Some("Student"));
/// assert_eq!(schema.level_name(0, 1), Some("Student"));
/// assert_eq!(schema.level_name(0, 7), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureSchema {
    feature_names: Vec<String>,
    levels: Vec<BTreeMap<FeatureCode, String>>,
}

impl FeatureSchema {
    /// Creates a schema from feature names and per-feature level names.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the two lists have different lengths.
    pub fn new(
        feature_names: Vec<String>,
        levels: Vec<BTreeMap<FeatureCode, String>>,
    ) -> Result<Self> {
        if feature_names.len() != levels.len() {
            return Err(NbError::DimensionMismatch {
                expected: format!("{} level maps (one per feature name)", feature_names.len()),
                actual: format!("{} level maps", levels.len()),
            });
        }
        Ok(Self {
            feature_names,
            levels,
        })
    }

    /// Number of features described.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Name of feature `feature`, if described.
    #[must_use]
    pub fn feature_name(&self, feature: usize) -> Option<&str> {
        self.feature_names.get(feature).map(String::as_str)
    }

    /// Name of level `value` of feature `feature`, if described.
    #[must_use]
    pub fn level_name(&self, feature: usize, value: FeatureCode) -> Option<&str> {
        self.levels
            .get(feature)
            .and_then(|levels| levels.get(&value))
            .map(String::as_str)
    }

    /// All feature names in order.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }
}
